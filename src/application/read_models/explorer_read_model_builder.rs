//! Builder for constructing ExplorerReadModel from domain objects

use super::explorer_read_model::{
    ExplorerReadModel, IssueView, ModuleView, NodeView, ReportMetadataView, RuleView,
};
use crate::explorer::domain::{BadgeCategory, DisplayTree, NodeId, NormalizedFinding, ReportMetadata};
use crate::explorer::policies::NodeFilter;
use crate::explorer::services::AggregatedTree;
use std::collections::BTreeSet;

/// Label of the rule list entry that is not tied to a badge category
pub const ALL_RULES_LABEL: &str = "All rules";

/// Builder for constructing ExplorerReadModel from domain objects
pub struct ExplorerReadModelBuilder;

impl ExplorerReadModelBuilder {
    /// Builds the read model of a project that has data
    ///
    /// # Arguments
    /// * `metadata` - Report metadata (timestamp, tool info)
    /// * `filter` - Active mode and search
    /// * `modules` - Selected modules with their aggregated tree, `None` for an empty forest
    /// * `findings` - Every normalized finding of the project
    /// * `open_badges` - Distinct badge categories present in the findings
    pub fn build(
        metadata: &ReportMetadata,
        filter: &NodeFilter,
        modules: Vec<(String, Option<AggregatedTree>)>,
        findings: &[NormalizedFinding],
        open_badges: &BTreeSet<BadgeCategory>,
    ) -> ExplorerReadModel {
        let modules = modules
            .into_iter()
            .map(|(name, aggregated)| Self::build_module(name, aggregated))
            .collect();

        let issues = findings
            .iter()
            .filter(|finding| filter.issue_visible(finding))
            .map(Self::build_issue)
            .collect();

        ExplorerReadModel {
            metadata: Self::build_metadata(metadata, filter),
            no_data: false,
            modules,
            issues,
            rules: Self::build_rules(filter, open_badges),
            open_badges: open_badges.iter().copied().collect(),
        }
    }

    /// Builds the read model of a project the host has no report for
    pub fn build_no_data(metadata: &ReportMetadata, filter: &NodeFilter) -> ExplorerReadModel {
        ExplorerReadModel {
            metadata: Self::build_metadata(metadata, filter),
            no_data: true,
            modules: Vec::new(),
            issues: Vec::new(),
            rules: Vec::new(),
            open_badges: Vec::new(),
        }
    }

    fn build_metadata(metadata: &ReportMetadata, filter: &NodeFilter) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            mode: filter.mode().to_string(),
            search: filter.search().to_string(),
        }
    }

    fn build_module(name: String, aggregated: Option<AggregatedTree>) -> ModuleView {
        match aggregated {
            Some(aggregated) => {
                let root = Self::build_node(&aggregated, aggregated.tree.root());
                ModuleView {
                    name,
                    root: Some(root),
                    expanded: aggregated.expanded,
                }
            }
            None => ModuleView {
                name,
                root: None,
                expanded: Vec::new(),
            },
        }
    }

    /// Converts the subtree reachable from `id`
    fn build_node(aggregated: &AggregatedTree, id: NodeId) -> NodeView {
        let tree: &DisplayTree = &aggregated.tree;
        let node = &tree[id];
        NodeView {
            id: node.id.clone(),
            name: node.name.clone(),
            version: node.version.clone(),
            property_name: node.property_name.clone(),
            next_version: node.next_version.clone(),
            last_version: node.last_version.clone(),
            licenses: node.licenses.clone(),
            kind: node.kind,
            badges: node.badges.active().collect(),
            has_sub_mismatch: node.aggregate.has_sub_mismatch,
            has_sub_transitive: node.aggregate.has_sub_transitive,
            has_sub_incoherence: node.aggregate.has_sub_incoherence,
            expanded: aggregated.is_expanded(&node.id),
            children: tree
                .children(id)
                .iter()
                .map(|child| Self::build_node(aggregated, *child))
                .collect(),
        }
    }

    fn build_issue(finding: &NormalizedFinding) -> IssueView {
        IssueView {
            key: finding.key.clone(),
            artifact: finding.artifact.clone(),
            badge: finding.badge,
            description: finding.description.clone(),
            module: finding.module.clone(),
            severity: finding.severity.clone(),
            status: finding.status.clone(),
        }
    }

    fn build_rules(filter: &NodeFilter, open_badges: &BTreeSet<BadgeCategory>) -> Vec<RuleView> {
        let active_badge = filter.mode().badge();
        let mut rules = vec![RuleView {
            badge: None,
            label: ALL_RULES_LABEL.to_string(),
            active: active_badge.is_none(),
        }];
        rules.extend(open_badges.iter().map(|category| RuleView {
            badge: Some(*category),
            label: category.label().to_string(),
            active: active_badge == Some(*category),
        }));
        rules
    }
}
