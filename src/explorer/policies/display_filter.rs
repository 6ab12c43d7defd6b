use crate::explorer::domain::{BadgeCategory, DisplayNode, NormalizedFinding};
use std::fmt;
use std::str::FromStr;

/// Which part of the tree the user wants to see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Every node
    #[default]
    All,
    /// Nodes carrying any finding or update
    Global,
    Update,
    Mismatch,
    Unused,
    Transitive,
    Incoherence,
}

impl DisplayMode {
    pub const ALL_MODES: [DisplayMode; 7] = [
        DisplayMode::All,
        DisplayMode::Global,
        DisplayMode::Update,
        DisplayMode::Mismatch,
        DisplayMode::Unused,
        DisplayMode::Transitive,
        DisplayMode::Incoherence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::All => "all",
            DisplayMode::Global => "global",
            DisplayMode::Update => "update",
            DisplayMode::Mismatch => "mismatch",
            DisplayMode::Unused => "unused",
            DisplayMode::Transitive => "transitive",
            DisplayMode::Incoherence => "incoherence",
        }
    }

    /// Badge category restricted by this mode, if any
    pub fn badge(&self) -> Option<BadgeCategory> {
        match self {
            DisplayMode::All | DisplayMode::Global => None,
            DisplayMode::Update => Some(BadgeCategory::Update),
            DisplayMode::Mismatch => Some(BadgeCategory::Mismatch),
            DisplayMode::Unused => Some(BadgeCategory::Unused),
            DisplayMode::Transitive => Some(BadgeCategory::Transitive),
            DisplayMode::Incoherence => Some(BadgeCategory::Incoherence),
        }
    }
}

impl From<BadgeCategory> for DisplayMode {
    fn from(category: BadgeCategory) -> Self {
        match category {
            BadgeCategory::Update => DisplayMode::Update,
            BadgeCategory::Mismatch => DisplayMode::Mismatch,
            BadgeCategory::Unused => DisplayMode::Unused,
            BadgeCategory::Transitive => DisplayMode::Transitive,
            BadgeCategory::Incoherence => DisplayMode::Incoherence,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayMode::ALL_MODES
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid mode: {}. Please specify one of: all, global, update, mismatch, unused, transitive, incoherence",
                    s
                )
            })
    }
}

/// NodeFilter policy combining a display mode with a free-text search
///
/// Each mode's predicate is `search && (mode condition)`; the search gate
/// is never bypassed by an aggregate flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeFilter {
    mode: DisplayMode,
    search: String,
}

impl NodeFilter {
    pub fn new(mode: DisplayMode, search: &str) -> Self {
        Self {
            mode,
            search: search.to_lowercase(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// `all` shows every node without consulting the predicate
    pub fn force_include_all(&self) -> bool {
        self.mode == DisplayMode::All && self.search.is_empty()
    }

    pub fn matches(&self, node: &DisplayNode) -> bool {
        if !self.search_matches(&node.name) {
            return false;
        }

        match self.mode {
            DisplayMode::All => true,
            DisplayMode::Global => {
                node.has_next_version()
                    || node.flagged(BadgeCategory::Incoherence)
                    || node.flagged(BadgeCategory::Mismatch)
                    || node.badges.unused
                    || node.flagged(BadgeCategory::Transitive)
            }
            DisplayMode::Update => node.has_next_version(),
            DisplayMode::Mismatch => node.flagged(BadgeCategory::Mismatch),
            DisplayMode::Unused => node.badges.unused,
            DisplayMode::Transitive => node.flagged(BadgeCategory::Transitive),
            DisplayMode::Incoherence => node.flagged(BadgeCategory::Incoherence),
        }
    }

    /// Whether a finding belongs in the issue panel for this mode
    pub fn issue_visible(&self, finding: &NormalizedFinding) -> bool {
        match self.mode.badge() {
            None => true,
            Some(category) => finding.badge == Some(category),
        }
    }

    fn search_matches(&self, name: &str) -> bool {
        self.search.is_empty() || name.to_lowercase().contains(&self.search)
    }
}
