use super::badge::BadgeCategory;
use super::lenient::{lenient_list, lenient_optional_text, lenient_text};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status reported by the host once a finding is still waiting for triage
pub const OPEN_STATUS: &str = "OPEN";

/// A finding ("issue") as returned by the host issue search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    #[serde(default, deserialize_with = "lenient_text")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rule: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub severity: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub component: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_optional_text", skip_serializing_if = "Option::is_none")]
    pub issue_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text", skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub issue_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_optional_text", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text", skip_serializing_if = "Option::is_none")]
    pub update_date: Option<String>,
}

impl Finding {
    pub fn new(
        key: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            rule: rule.into(),
            message: message.into(),
            component: component.into(),
            status: OPEN_STATUS.to_string(),
            ..Self::default()
        }
    }

    /// Lifecycle status: the newer `issueStatus` field when present, `status` otherwise
    pub fn lifecycle_status(&self) -> &str {
        match self.issue_status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ => &self.status,
        }
    }
}

/// A finding after classification, attributed to an artifact and a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedFinding {
    pub key: String,
    /// Extracted "group:artifact", empty when the message names none
    pub artifact: String,
    pub badge: Option<BadgeCategory>,
    pub description: String,
    pub module: String,
    pub severity: String,
    pub status: String,
}

/// Anything carrying a key and a status that a transition can replace
pub trait Transitionable: Clone {
    fn key(&self) -> &str;
    fn with_status(&self, status: String) -> Self;
}

impl Transitionable for Finding {
    fn key(&self) -> &str {
        &self.key
    }

    fn with_status(&self, status: String) -> Self {
        Self {
            status,
            issue_status: None,
            ..self.clone()
        }
    }
}

impl Transitionable for NormalizedFinding {
    fn key(&self) -> &str {
        &self.key
    }

    fn with_status(&self, status: String) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Status a user may move a finding to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionStatus {
    Accept,
    FalsePositive,
}

impl TransitionStatus {
    /// Transition name understood by the host API
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionStatus::Accept => "accept",
            TransitionStatus::FalsePositive => "falsepositive",
        }
    }
}

impl fmt::Display for TransitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accept" => Ok(TransitionStatus::Accept),
            "falsepositive" | "false-positive" => Ok(TransitionStatus::FalsePositive),
            _ => Err(format!(
                "Invalid transition: {}. Please specify 'accept' or 'falsepositive'",
                s
            )),
        }
    }
}

/// A requested status change for one finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub key: String,
    pub status: TransitionStatus,
}

impl TransitionRequest {
    pub fn new(key: impl Into<String>, status: TransitionStatus) -> Self {
        Self {
            key: key.into(),
            status,
        }
    }
}
