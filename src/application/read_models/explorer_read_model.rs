//! Exploration read model for query operations
//!
//! A denormalized, render-ready view of one exploration: the visible
//! tree of every selected module, the issue panel and the rule list.

use crate::explorer::domain::{ArtifactKind, BadgeCategory};
use serde::Serialize;

/// Main read model handed to the formatters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerReadModel {
    pub metadata: ReportMetadataView,
    /// True when the host holds no dependency report for the project
    pub no_data: bool,
    pub modules: Vec<ModuleView>,
    /// Findings listed for the active mode
    pub issues: Vec<IssueView>,
    /// "All rules" entry followed by one entry per open badge category
    pub rules: Vec<RuleView>,
    pub open_badges: Vec<BadgeCategory>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub mode: String,
    pub search: String,
}

/// One module with its visible tree
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleView {
    pub name: String,
    /// `None` when the module has no dependency tree
    pub root: Option<NodeView>,
    /// Identities to show opened, sorted
    pub expanded: Vec<String>,
}

impl ModuleView {
    /// Number of nodes reachable from the root
    pub fn visible_count(&self) -> usize {
        self.root.as_ref().map_or(0, NodeView::subtree_size)
    }
}

/// One visible dependency and its visible children
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub id: String,
    pub name: String,
    pub version: Option<String>,
    pub property_name: Option<String>,
    pub next_version: Option<String>,
    pub last_version: Option<String>,
    pub licenses: String,
    pub kind: ArtifactKind,
    pub badges: Vec<BadgeCategory>,
    pub has_sub_mismatch: bool,
    pub has_sub_transitive: bool,
    pub has_sub_incoherence: bool,
    pub expanded: bool,
    pub children: Vec<NodeView>,
}

impl NodeView {
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(NodeView::subtree_size).sum::<usize>()
    }

    /// Display name; unnamed dependencies show their identity
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// One row of the issue panel
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueView {
    pub key: String,
    pub artifact: String,
    pub badge: Option<BadgeCategory>,
    pub description: String,
    pub module: String,
    pub severity: String,
    pub status: String,
}

/// One entry of the rule list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleView {
    /// `None` for the "All rules" entry
    pub badge: Option<BadgeCategory>,
    pub label: String,
    /// True for the entry matching the active mode
    pub active: bool,
}
