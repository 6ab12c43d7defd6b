use super::BadgeMatcher;
use crate::explorer::domain::{
    ArtifactKind, DisplayNode, DisplayTree, NodeId, NormalizedFinding, RawArtifact,
};

/// TreeEnricher service converting a raw dependency tree into a display tree
///
/// Identities are path based: the sibling index at depth 1, then
/// `<parent identity>.<sibling index>` below. They only depend on the shape
/// of the raw tree, so the same input always yields the same identities.
pub struct TreeEnricher;

impl TreeEnricher {
    /// Enriches the tree rooted at `raw_root`, which sits at index 0 of its forest
    pub fn enrich(findings: &[NormalizedFinding], raw_root: &RawArtifact) -> DisplayTree {
        Self::enrich_at(findings, raw_root, 0)
    }

    /// Enriches the first root of a module forest; `None` for an empty forest
    pub fn enrich_forest(
        findings: &[NormalizedFinding],
        roots: &[RawArtifact],
    ) -> Option<DisplayTree> {
        roots.first().map(|root| Self::enrich(findings, root))
    }

    /// Enriches a root found at `sibling_index` among the forest roots
    pub fn enrich_at(
        findings: &[NormalizedFinding],
        raw_root: &RawArtifact,
        sibling_index: usize,
    ) -> DisplayTree {
        let root = Self::build_node(findings, raw_root, sibling_index.to_string(), 1);
        let mut tree = DisplayTree::new(root);

        // Children are inserted in raw order when their parent is visited,
        // so the stack order does not affect sibling order.
        let mut pending: Vec<(NodeId, &RawArtifact)> = vec![(tree.root(), raw_root)];
        while let Some((parent, raw_parent)) = pending.pop() {
            let parent_identity = tree[parent].id.clone();
            let depth = tree[parent].depth + 1;
            for (index, raw_child) in raw_parent.children.iter().enumerate() {
                let identity = format!("{}.{}", parent_identity, index);
                let node = Self::build_node(findings, raw_child, identity, depth);
                let child = tree.add_child(parent, node);
                pending.push((child, raw_child));
            }
        }

        tree
    }

    fn build_node(
        findings: &[NormalizedFinding],
        raw: &RawArtifact,
        identity: String,
        depth: usize,
    ) -> DisplayNode {
        let name = raw.coordinate();
        let mut node = DisplayNode::new(identity, name, depth);
        node.version = raw.version.clone();
        node.property_name = raw.property_name.clone();
        node.next_version = raw.next_version.clone();
        node.last_version = raw.last_version.clone();
        node.licenses = raw.license_text();
        node.kind = ArtifactKind::classify(raw.scope.as_deref(), raw.source.as_deref());
        node.badges = BadgeMatcher::match_badges(&node.name, findings);
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::domain::{BadgeCategory, LicenseField};

    fn finding(artifact: &str, badge: BadgeCategory) -> NormalizedFinding {
        NormalizedFinding {
            key: format!("K-{}", artifact),
            artifact: artifact.to_string(),
            badge: Some(badge),
            description: String::new(),
            module: "acme:app".to_string(),
            severity: "MAJOR".to_string(),
            status: "OPEN".to_string(),
        }
    }

    fn raw_tree() -> RawArtifact {
        let mut junit = RawArtifact::new("org.junit", "junit");
        junit.scope = Some("test".to_string());
        let mut plugin = RawArtifact::new("org.apache.maven.plugins", "maven-shade-plugin");
        plugin.source = Some("BUILD_PLUGIN".to_string());

        RawArtifact::new("com.acme", "app").with_children(vec![
            RawArtifact::new("com.x", "lib").with_children(vec![RawArtifact::new("org.y", "deep")]),
            junit,
            plugin,
        ])
    }

    #[test]
    fn test_identities_follow_paths() {
        let tree = TreeEnricher::enrich(&[], &raw_tree());

        assert_eq!(tree[tree.root()].id, "0");
        let ids: Vec<&str> = tree
            .descendants(tree.root())
            .into_iter()
            .map(|id| tree[id].id.as_str())
            .collect();
        assert_eq!(ids, vec!["0.0", "0.0.0", "0.1", "0.2"]);
        assert_eq!(tree[tree.find("0.0.0").unwrap()].name, "org.y:deep");
        assert_eq!(tree[tree.find("0.0.0").unwrap()].depth, 3);
    }

    #[test]
    fn test_enrich_at_uses_sibling_index_for_root() {
        let tree = TreeEnricher::enrich_at(&[], &raw_tree(), 2);
        assert_eq!(tree[tree.root()].id, "2");
        assert!(tree.find("2.0.0").is_some());
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let findings = vec![finding("com.x:lib", BadgeCategory::Mismatch)];
        let first = TreeEnricher::enrich(&findings, &raw_tree());
        let second = TreeEnricher::enrich(&findings, &raw_tree());
        assert_eq!(first, second);
    }

    #[test]
    fn test_kinds_are_classified() {
        let tree = TreeEnricher::enrich(&[], &raw_tree());
        assert_eq!(tree[tree.find("0.0").unwrap()].kind, ArtifactKind::Runtime);
        assert_eq!(tree[tree.find("0.1").unwrap()].kind, ArtifactKind::Test);
        assert_eq!(tree[tree.find("0.2").unwrap()].kind, ArtifactKind::Plugin);
    }

    #[test]
    fn test_own_flags_from_findings() {
        let findings = vec![
            finding("com.x:lib", BadgeCategory::Mismatch),
            finding("org.junit:junit", BadgeCategory::Unused),
        ];
        let tree = TreeEnricher::enrich(&findings, &raw_tree());

        let lib = &tree[tree.find("0.0").unwrap()];
        assert!(lib.badges.mismatch);
        assert!(!lib.aggregate.any());
        assert!(tree[tree.find("0.1").unwrap()].badges.unused);
        assert!(tree[tree.root()].badges.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let mut raw = RawArtifact::default();
        raw.licenses = Some(LicenseField::Many(vec!["MIT".into(), "Apache-2.0".into()]));
        let tree = TreeEnricher::enrich(&[], &raw);

        let root = &tree[tree.root()];
        assert_eq!(root.name, "");
        assert!(root.version.is_none());
        assert_eq!(root.licenses, "MIT, Apache-2.0");
        assert!(tree.children(tree.root()).is_empty());
    }

    #[test]
    fn test_enrich_forest_uses_first_root() {
        let roots = vec![RawArtifact::new("a", "first"), RawArtifact::new("b", "second")];
        let tree = TreeEnricher::enrich_forest(&[], &roots).unwrap();
        assert_eq!(tree[tree.root()].name, "a:first");
        assert!(TreeEnricher::enrich_forest(&[], &[]).is_none());
    }
}
