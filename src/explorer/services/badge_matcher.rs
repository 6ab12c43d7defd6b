use crate::explorer::domain::{Badges, NormalizedFinding};

/// BadgeMatcher service attributing findings to artifact coordinates
pub struct BadgeMatcher;

impl BadgeMatcher {
    /// ORs together the categories of every finding that applies to `coordinate`
    ///
    /// A finding applies when its extracted artifact is a prefix of the
    /// coordinate. Findings without a category, or without an artifact,
    /// contribute nothing.
    pub fn match_badges(coordinate: &str, findings: &[NormalizedFinding]) -> Badges {
        let mut badges = Badges::default();
        for finding in findings {
            let Some(category) = finding.badge else {
                continue;
            };
            if Self::applies_to(finding, coordinate) {
                badges.set(category);
            }
        }
        badges
    }

    pub fn applies_to(finding: &NormalizedFinding, coordinate: &str) -> bool {
        !finding.artifact.is_empty() && coordinate.starts_with(&finding.artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::domain::BadgeCategory;

    fn finding(artifact: &str, badge: Option<BadgeCategory>) -> NormalizedFinding {
        NormalizedFinding {
            key: format!("K-{}", artifact),
            artifact: artifact.to_string(),
            badge,
            description: String::new(),
            module: String::new(),
            severity: "MAJOR".to_string(),
            status: "OPEN".to_string(),
        }
    }

    #[test]
    fn test_categories_are_ored() {
        let findings = vec![
            finding("com.x:lib", Some(BadgeCategory::Update)),
            finding("com.x:lib", Some(BadgeCategory::Mismatch)),
            finding("org.y:other", Some(BadgeCategory::Unused)),
        ];

        let badges = BadgeMatcher::match_badges("com.x:lib", &findings);
        assert!(badges.update);
        assert!(badges.mismatch);
        assert!(!badges.unused);
    }

    #[test]
    fn test_prefix_match() {
        let findings = vec![finding("com.x:lib", Some(BadgeCategory::Transitive))];
        assert!(BadgeMatcher::match_badges("com.x:lib-extra", &findings).transitive);
        assert!(!BadgeMatcher::match_badges("com.x:li", &findings).transitive);
    }

    #[test]
    fn test_uncategorized_and_unattributed_findings_are_ignored() {
        let findings = vec![
            finding("com.x:lib", None),
            finding("", Some(BadgeCategory::Incoherence)),
        ];
        assert!(BadgeMatcher::match_badges("com.x:lib", &findings).is_empty());
        assert!(BadgeMatcher::match_badges("", &findings).is_empty());
    }
}
