use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic category a finding contributes to a dependency node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Update,
    Incoherence,
    Mismatch,
    Unused,
    Transitive,
}

impl BadgeCategory {
    pub const ALL: [BadgeCategory; 5] = [
        BadgeCategory::Update,
        BadgeCategory::Incoherence,
        BadgeCategory::Mismatch,
        BadgeCategory::Unused,
        BadgeCategory::Transitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeCategory::Update => "update",
            BadgeCategory::Incoherence => "incoherence",
            BadgeCategory::Mismatch => "mismatch",
            BadgeCategory::Unused => "unused",
            BadgeCategory::Transitive => "transitive",
        }
    }

    /// Label shown in the rule list
    pub fn label(&self) -> &'static str {
        match self {
            BadgeCategory::Update => "Updates",
            BadgeCategory::Incoherence => "Version incoherence",
            BadgeCategory::Mismatch => "Licenses mismatch",
            BadgeCategory::Unused => "Unused dependency",
            BadgeCategory::Transitive => "Transitive usage",
        }
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BadgeCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown badge category: {}", s))
    }
}

/// Own-flags of a single node, one per [`BadgeCategory`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Badges {
    pub incoherence: bool,
    pub mismatch: bool,
    pub unused: bool,
    pub transitive: bool,
    pub update: bool,
}

impl Badges {
    pub fn set(&mut self, category: BadgeCategory) {
        match category {
            BadgeCategory::Update => self.update = true,
            BadgeCategory::Incoherence => self.incoherence = true,
            BadgeCategory::Mismatch => self.mismatch = true,
            BadgeCategory::Unused => self.unused = true,
            BadgeCategory::Transitive => self.transitive = true,
        }
    }

    pub fn contains(&self, category: BadgeCategory) -> bool {
        match category {
            BadgeCategory::Update => self.update,
            BadgeCategory::Incoherence => self.incoherence,
            BadgeCategory::Mismatch => self.mismatch,
            BadgeCategory::Unused => self.unused,
            BadgeCategory::Transitive => self.transitive,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Categories that are set, in [`BadgeCategory::ALL`] order
    pub fn active(&self) -> impl Iterator<Item = BadgeCategory> + '_ {
        BadgeCategory::ALL
            .into_iter()
            .filter(move |category| self.contains(*category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_category_from_str_case_insensitive() {
        assert_eq!(
            BadgeCategory::from_str("Mismatch").unwrap(),
            BadgeCategory::Mismatch
        );
        assert!(BadgeCategory::from_str("security").is_err());
    }

    #[test]
    fn test_badge_category_serializes_lowercase() {
        let json = serde_json::to_string(&BadgeCategory::Incoherence).unwrap();
        assert_eq!(json, "\"incoherence\"");
    }

    #[test]
    fn test_badges_set_and_active() {
        let mut badges = Badges::default();
        assert!(badges.is_empty());

        badges.set(BadgeCategory::Transitive);
        badges.set(BadgeCategory::Update);

        assert!(badges.contains(BadgeCategory::Transitive));
        assert!(!badges.contains(BadgeCategory::Mismatch));
        let active: Vec<_> = badges.active().collect();
        assert_eq!(
            active,
            vec![BadgeCategory::Update, BadgeCategory::Transitive]
        );
    }
}
