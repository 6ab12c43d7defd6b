use crate::explorer::domain::{BadgeCategory, Finding, NormalizedFinding};
use regex::Regex;
use std::sync::LazyLock;

/// First "group:artifact" pair in a finding message (ASCII word characters, dots, dashes)
static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9_.-]+:[A-Za-z0-9_.-]+").expect("coordinate pattern is valid")
});

/// Rule identifiers emitted by the dependency analysis, and the badge each one drives
const RULE_TABLE: [(&str, BadgeCategory); 5] = [
    (
        "DependencyExplorer:UsingOutdatedDependency",
        BadgeCategory::Update,
    ),
    (
        "DependencyExplorer:UsingIncompatibleLicencedDependency",
        BadgeCategory::Mismatch,
    ),
    (
        "DependencyExplorer:UsingIncoherentVersionnedDependency",
        BadgeCategory::Incoherence,
    ),
    ("DependencyExplorer:UnusedDependency", BadgeCategory::Unused),
    (
        "DependencyExplorer:UsingTransitiveDependency",
        BadgeCategory::Transitive,
    ),
];

/// FindingClassifier service turning host findings into normalized ones
///
/// Pure string processing; unknown rules and unparseable texts are kept
/// with an empty attribution rather than rejected.
pub struct FindingClassifier;

impl FindingClassifier {
    /// Exact lookup in the rule table
    pub fn classify(rule: &str) -> Option<BadgeCategory> {
        RULE_TABLE
            .iter()
            .find(|(id, _)| *id == rule)
            .map(|(_, category)| *category)
    }

    /// Extracts the affected "group:artifact" coordinate from a message
    ///
    /// Returns an empty string when the message names no coordinate.
    pub fn extract_artifact(message: &str) -> String {
        COORDINATE_PATTERN
            .find(message)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Extracts the owning module from a component path
    ///
    /// `proj:module:path:sub` gives `proj:path`, `proj:module:path` gives
    /// `proj:module`, anything shorter is returned unchanged.
    pub fn extract_module(component_path: &str) -> String {
        let segments: Vec<&str> = component_path.split(':').collect();
        if segments.len() >= 4 {
            format!("{}:{}", segments[0], segments[2])
        } else if segments.len() >= 3 {
            format!("{}:{}", segments[0], segments[1])
        } else {
            component_path.to_string()
        }
    }

    pub fn normalize(finding: &Finding) -> NormalizedFinding {
        NormalizedFinding {
            key: finding.key.clone(),
            artifact: Self::extract_artifact(&finding.message),
            badge: Self::classify(&finding.rule),
            description: finding.message.clone(),
            module: Self::extract_module(&finding.component),
            severity: finding.severity.clone(),
            status: finding.lifecycle_status().to_string(),
        }
    }
}
