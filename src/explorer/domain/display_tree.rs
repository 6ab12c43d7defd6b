use super::badge::{BadgeCategory, Badges};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

/// Index of a node inside its [`DisplayTree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// How an artifact takes part in the build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Runtime,
    Test,
    Plugin,
}

impl ArtifactKind {
    /// A `source` marker containing "PLUGIN" wins over the scope
    pub fn classify(scope: Option<&str>, source: Option<&str>) -> Self {
        if source.is_some_and(|s| s.contains("PLUGIN")) {
            ArtifactKind::Plugin
        } else if scope == Some("test") {
            ArtifactKind::Test
        } else {
            ArtifactKind::Runtime
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Runtime => "runtime",
            ArtifactKind::Test => "test",
            ArtifactKind::Plugin => "plugin",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "Has affected descendant" flags, derived from the own-flags below a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateFlags {
    pub has_sub_mismatch: bool,
    pub has_sub_transitive: bool,
    pub has_sub_incoherence: bool,
}

impl AggregateFlags {
    /// Own-flags that are propagated to ancestors
    pub const PROPAGATED: [BadgeCategory; 3] = [
        BadgeCategory::Mismatch,
        BadgeCategory::Transitive,
        BadgeCategory::Incoherence,
    ];

    pub fn contains(&self, category: BadgeCategory) -> bool {
        match category {
            BadgeCategory::Mismatch => self.has_sub_mismatch,
            BadgeCategory::Transitive => self.has_sub_transitive,
            BadgeCategory::Incoherence => self.has_sub_incoherence,
            BadgeCategory::Update | BadgeCategory::Unused => false,
        }
    }

    /// Returns false for categories that are never propagated
    pub fn set(&mut self, category: BadgeCategory) -> bool {
        match category {
            BadgeCategory::Mismatch => self.has_sub_mismatch = true,
            BadgeCategory::Transitive => self.has_sub_transitive = true,
            BadgeCategory::Incoherence => self.has_sub_incoherence = true,
            BadgeCategory::Update | BadgeCategory::Unused => return false,
        }
        true
    }

    pub fn any(&self) -> bool {
        self.has_sub_mismatch || self.has_sub_transitive || self.has_sub_incoherence
    }
}

/// One annotated dependency, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayNode {
    /// Path-based identity, unique within one module tree
    pub id: String,
    /// "group:artifact", empty when the raw node carried neither
    pub name: String,
    pub version: Option<String>,
    pub property_name: Option<String>,
    pub next_version: Option<String>,
    pub last_version: Option<String>,
    pub licenses: String,
    pub kind: ArtifactKind,
    pub depth: usize,
    pub badges: Badges,
    pub aggregate: AggregateFlags,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl DisplayNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, depth: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: None,
            property_name: None,
            next_version: None,
            last_version: None,
            licenses: String::new(),
            kind: ArtifactKind::Runtime,
            depth,
            badges: Badges::default(),
            aggregate: AggregateFlags::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_next_version(&self) -> bool {
        self.next_version.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Own-flag or aggregate flag for `category`
    pub fn flagged(&self, category: BadgeCategory) -> bool {
        self.badges.contains(category) || self.aggregate.contains(category)
    }
}

/// Arena holding one module's display tree
///
/// Nodes never move once inserted, so a [`NodeId`] stays valid for the
/// lifetime of the tree and of every [`DisplayTree::detached`] copy.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTree {
    nodes: Vec<DisplayNode>,
    by_identity: HashMap<String, NodeId>,
}

impl DisplayTree {
    pub fn new(mut root: DisplayNode) -> Self {
        root.parent = None;
        root.children.clear();
        let mut by_identity = HashMap::new();
        by_identity.insert(root.id.clone(), NodeId(0));
        Self {
            nodes: vec![root],
            by_identity,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Inserts `node` as the last child of `parent`
    pub fn add_child(&mut self, parent: NodeId, mut node: DisplayNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.by_identity.insert(node.id.clone(), id);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&DisplayNode> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut DisplayNode {
        &mut self.nodes[id.0]
    }

    pub fn find(&self, identity: &str) -> Option<NodeId> {
        self.by_identity.get(identity).copied()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Strict ancestors of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// Strict descendants of `id` reachable through the children lists
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            found.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        found
    }

    /// Every node of the arena, including those not linked from the root
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &DisplayNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Copy with every children list emptied and aggregate flags cleared
    ///
    /// Parent links are kept; they are needed to propagate flags and to
    /// register nodes again.
    pub fn detached(&self) -> Self {
        let nodes = self
            .nodes
            .iter()
            .map(|node| DisplayNode {
                children: Vec::new(),
                aggregate: AggregateFlags::default(),
                ..node.clone()
            })
            .collect();
        Self {
            nodes,
            by_identity: self.by_identity.clone(),
        }
    }

    /// Appends `child` to the children of its recorded parent
    pub(crate) fn attach_to_parent(&mut self, child: NodeId) -> Option<NodeId> {
        let parent = self.nodes[child.0].parent?;
        self.nodes[parent.0].children.push(child);
        Some(parent)
    }

    /// Stable sort of every children list: named nodes first, then by name
    pub fn sort_children_by_name(&mut self) {
        for i in 0..self.nodes.len() {
            let mut children = std::mem::take(&mut self.nodes[i].children);
            children.sort_by(|a, b| compare_names(&self.nodes[a.0].name, &self.nodes[b.0].name));
            self.nodes[i].children = children;
        }
    }
}

impl Index<NodeId> for DisplayTree {
    type Output = DisplayNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DisplayTree {
        let mut tree = DisplayTree::new(DisplayNode::new("0", "com.acme:app", 1));
        let root = tree.root();
        let web = tree.add_child(root, DisplayNode::new("0.0", "org.web:server", 2));
        tree.add_child(root, DisplayNode::new("0.1", "", 2));
        tree.add_child(root, DisplayNode::new("0.2", "Apache:commons", 2));
        tree.add_child(web, DisplayNode::new("0.0.0", "io.netty:netty", 3));
        tree
    }

    #[test]
    fn test_artifact_kind_classification() {
        assert_eq!(
            ArtifactKind::classify(Some("test"), Some("MAVEN_PLUGIN")),
            ArtifactKind::Plugin
        );
        assert_eq!(ArtifactKind::classify(Some("test"), None), ArtifactKind::Test);
        assert_eq!(
            ArtifactKind::classify(Some("compile"), Some("DEPENDENCY")),
            ArtifactKind::Runtime
        );
        assert_eq!(ArtifactKind::classify(None, None), ArtifactKind::Runtime);
    }

    #[test]
    fn test_add_child_links_both_directions() {
        let tree = sample_tree();
        let web = tree.find("0.0").unwrap();
        let netty = tree.find("0.0.0").unwrap();

        assert_eq!(tree.parent(netty), Some(web));
        assert_eq!(tree.children(web), &[netty]);
        assert_eq!(tree.iter().count(), 5);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let tree = sample_tree();
        let netty = tree.find("0.0.0").unwrap();
        let ancestors: Vec<&str> = tree.ancestors(netty).map(|id| tree[id].id.as_str()).collect();
        assert_eq!(ancestors, vec!["0.0", "0"]);
    }

    #[test]
    fn test_descendants_pre_order() {
        let tree = sample_tree();
        let ids: Vec<&str> = tree
            .descendants(tree.root())
            .into_iter()
            .map(|id| tree[id].id.as_str())
            .collect();
        assert_eq!(ids, vec!["0.0", "0.0.0", "0.1", "0.2"]);
    }

    #[test]
    fn test_detached_clears_children_and_aggregates() {
        let mut tree = sample_tree();
        let root = tree.root();
        tree.get_mut(root).aggregate.has_sub_mismatch = true;

        let copy = tree.detached();
        assert!(copy.children(root).is_empty());
        assert!(!copy[root].aggregate.any());
        let netty = copy.find("0.0.0").unwrap();
        assert_eq!(copy[copy.parent(netty).unwrap()].id, "0.0");
    }

    #[test]
    fn test_sort_children_named_first_case_insensitive() {
        let mut tree = sample_tree();
        tree.sort_children_by_name();
        let names: Vec<&str> = tree
            .children(tree.root())
            .iter()
            .map(|id| tree[*id].name.as_str())
            .collect();
        assert_eq!(names, vec!["Apache:commons", "org.web:server", ""]);
    }

    #[test]
    fn test_aggregate_flags_ignore_unpropagated_categories() {
        let mut flags = AggregateFlags::default();
        assert!(!flags.set(BadgeCategory::Unused));
        assert!(flags.set(BadgeCategory::Transitive));
        assert!(flags.contains(BadgeCategory::Transitive));
        assert!(!flags.contains(BadgeCategory::Update));
    }
}
