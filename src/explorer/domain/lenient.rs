//! Tolerant field readers for analysis payloads.
//!
//! A raw field of the wrong type reads as absent instead of failing the
//! whole document.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// A value of type `T`, or whatever else was found in its place
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    pub(crate) fn into_option(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

/// Scalar read as text: numbers and booleans keep their JSON spelling
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ScalarText {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
    Other(IgnoredAny),
}

impl ScalarText {
    pub(crate) fn into_string(self) -> Option<String> {
        match self {
            ScalarText::Text(text) => Some(text),
            ScalarText::Unsigned(n) => Some(n.to_string()),
            ScalarText::Signed(n) => Some(n.to_string()),
            ScalarText::Float(n) => Some(n.to_string()),
            ScalarText::Flag(b) => Some(b.to_string()),
            ScalarText::Other(_) => None,
        }
    }
}

/// Text field; `null` or a non-scalar reads as empty
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_text(deserializer)?.unwrap_or_default())
}

pub(crate) fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(ScalarText::deserialize(deserializer)?.into_string())
}

/// A list whose unreadable entries are dropped; anything but a list reads as empty
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Lenient::<Vec<Lenient<T>>>::deserialize(deserializer)?
        .into_option()
        .unwrap_or_default()
        .into_iter()
        .filter_map(Lenient::into_option)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient_optional_text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "lenient_list")]
        items: Vec<u32>,
    }

    #[test]
    fn test_scalars_read_as_text() {
        let read = |json: &str| serde_json::from_str::<Sample>(json).unwrap().text;

        assert_eq!(read(r#"{"text": "1.0"}"#).as_deref(), Some("1.0"));
        assert_eq!(read(r#"{"text": 2}"#).as_deref(), Some("2"));
        assert_eq!(read(r#"{"text": -3}"#).as_deref(), Some("-3"));
        assert_eq!(read(r#"{"text": 1.5}"#).as_deref(), Some("1.5"));
        assert_eq!(read(r#"{"text": true}"#).as_deref(), Some("true"));
    }

    #[test]
    fn test_unreadable_values_read_as_absent() {
        let sample: Sample = serde_json::from_str(r#"{"text": {"a": 1}, "items": "x"}"#).unwrap();
        assert!(sample.text.is_none());
        assert!(sample.items.is_empty());

        let sample: Sample = serde_json::from_str(r#"{"text": null, "items": null}"#).unwrap();
        assert!(sample.text.is_none());
        assert!(sample.items.is_empty());
    }

    #[test]
    fn test_list_drops_unreadable_entries() {
        let sample: Sample = serde_json::from_str(r#"{"items": [1, "two", 3, null]}"#).unwrap();
        assert_eq!(sample.items, vec![1, 3]);
    }
}
