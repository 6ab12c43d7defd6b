use super::lenient::{lenient_list, lenient_optional_text, lenient_text, Lenient, ScalarText};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// License field as emitted by the analysis: either a list or a single string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LicenseField {
    Many(Vec<String>),
    One(String),
}

/// Licenses as found on the wire, before unreadable entries are dropped
#[derive(Deserialize)]
#[serde(untagged)]
enum LicenseWire {
    Many(Vec<ScalarText>),
    One(ScalarText),
}

fn lenient_licenses<'de, D>(deserializer: D) -> Result<Option<LicenseField>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LicenseWire::deserialize(deserializer)? {
        LicenseWire::Many(entries) => Some(LicenseField::Many(
            entries.into_iter().filter_map(ScalarText::into_string).collect(),
        )),
        LicenseWire::One(entry) => entry.into_string().map(LicenseField::One),
    })
}

/// Module forests; a module whose value is not a list of artifacts reads as empty
fn lenient_forests<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<RawArtifact>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(modules) =
        Lenient::<BTreeMap<String, Lenient<Vec<Lenient<RawArtifact>>>>>::deserialize(deserializer)?
            .into_option()
    else {
        return Ok(BTreeMap::new());
    };

    Ok(modules
        .into_iter()
        .map(|(module, roots)| {
            let roots = roots
                .into_option()
                .unwrap_or_default()
                .into_iter()
                .filter_map(Lenient::into_option)
                .collect();
            (module, roots)
        })
        .collect())
}

impl LicenseField {
    /// Display form: list entries joined with ", "
    pub fn joined(&self) -> String {
        match self {
            LicenseField::Many(licenses) => licenses.join(", "),
            LicenseField::One(license) => license.clone(),
        }
    }
}

/// One node of a dependency resolution tree, as produced by the build-tool analysis
///
/// Every field is optional on the wire; missing, `null` or wrongly typed
/// values read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArtifact {
    #[serde(default, deserialize_with = "lenient_text")]
    pub group_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub artifact_id: String,
    #[serde(default, deserialize_with = "lenient_optional_text", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text", skip_serializing_if = "Option::is_none")]
    pub next_version: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text", skip_serializing_if = "Option::is_none")]
    pub last_version: Option<String>,
    #[serde(default, deserialize_with = "lenient_licenses", skip_serializing_if = "Option::is_none")]
    pub licenses: Option<LicenseField>,
    #[serde(default, deserialize_with = "lenient_optional_text", skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text", skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub children: Vec<RawArtifact>,
}

impl RawArtifact {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<RawArtifact>) -> Self {
        self.children = children;
        self
    }

    /// "group:artifact", or empty when both coordinates are missing
    pub fn coordinate(&self) -> String {
        if self.group_id.is_empty() && self.artifact_id.is_empty() {
            return String::new();
        }
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    pub fn license_text(&self) -> String {
        self.licenses
            .as_ref()
            .map(LicenseField::joined)
            .unwrap_or_default()
    }
}

/// One entry of the measures payload: the dependency forests of one or more modules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyReport {
    #[serde(default, deserialize_with = "lenient_forests")]
    pub dependencies: BTreeMap<String, Vec<RawArtifact>>,
}

impl DependencyReport {
    pub fn new(dependencies: BTreeMap<String, Vec<RawArtifact>>) -> Self {
        Self { dependencies }
    }

    pub fn single(module: impl Into<String>, roots: Vec<RawArtifact>) -> Self {
        let mut dependencies = BTreeMap::new();
        dependencies.insert(module.into(), roots);
        Self { dependencies }
    }
}
