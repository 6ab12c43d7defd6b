use crate::explorer::domain::lenient::{lenient_list, Lenient};
use crate::explorer::domain::{DependencyReport, Finding};
use serde::Deserialize;

/// Measures payload: normally an array of reports, a lone report is accepted too
///
/// Array entries that are not reports are skipped.
#[derive(Deserialize)]
#[serde(untagged)]
enum MeasuresPayload {
    Many(Vec<Lenient<DependencyReport>>),
    One(DependencyReport),
}

/// Issues payload: a bare array of findings, or the host search response
///
/// The array variant comes first: a struct variant would also accept a
/// one-element array positionally.
#[derive(Deserialize)]
#[serde(untagged)]
enum IssuesPayload {
    Bare(Vec<Lenient<Finding>>),
    Wrapped {
        #[serde(default, deserialize_with = "lenient_list")]
        issues: Vec<Finding>,
    },
}

pub fn parse_measures(content: &str) -> serde_json::Result<Vec<DependencyReport>> {
    Ok(match serde_json::from_str(content)? {
        MeasuresPayload::Many(reports) => reports
            .into_iter()
            .filter_map(Lenient::into_option)
            .collect(),
        MeasuresPayload::One(report) => vec![report],
    })
}

pub fn parse_issues(content: &str) -> serde_json::Result<Vec<Finding>> {
    Ok(match serde_json::from_str(content)? {
        IssuesPayload::Bare(issues) => issues
            .into_iter()
            .filter_map(Lenient::into_option)
            .collect(),
        IssuesPayload::Wrapped { issues } => issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measures_array() {
        let content = r#"[
            { "dependencies": { "acme:app": [ { "groupId": "com.acme", "artifactId": "app" } ] } },
            { "dependencies": { "acme:lib": [] } }
        ]"#;

        let reports = parse_measures(content).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].dependencies.contains_key("acme:app"));
        assert!(reports[1].dependencies["acme:lib"].is_empty());
    }

    #[test]
    fn test_parse_measures_single_object() {
        let content = r#"{ "dependencies": { "acme:app": [] } }"#;
        assert_eq!(parse_measures(content).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_measures_rejects_garbage() {
        assert!(parse_measures("not json").is_err());
        assert!(parse_measures("42").is_err());
    }

    #[test]
    fn test_parse_issues_search_response() {
        let content = r#"{
            "total": 1,
            "p": 1,
            "issues": [ { "key": "AY-1", "rule": "DependencyExplorer:UnusedDependency", "message": "com.x:lib" } ],
            "components": []
        }"#;

        let findings = parse_issues(content).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].key, "AY-1");
    }

    #[test]
    fn test_parse_measures_with_wrongly_typed_fields() {
        let content = r#"[{ "dependencies": { "acme:app": [ {
            "groupId": "com.acme", "artifactId": "app", "version": 2, "level": "1",
            "children": [ { "groupId": "com.x", "artifactId": "lib", "licenses": 5, "scope": false } ]
        } ] } }]"#;

        let reports = parse_measures(content).unwrap();
        let root = &reports[0].dependencies["acme:app"][0];
        assert_eq!(root.coordinate(), "com.acme:app");
        assert_eq!(root.version.as_deref(), Some("2"));
        assert_eq!(root.children[0].license_text(), "5");
        assert_eq!(root.children[0].scope.as_deref(), Some("false"));
    }

    #[test]
    fn test_parse_measures_skips_entries_that_are_not_reports() {
        let content = r#"[ 42, { "dependencies": { "acme:lib": [] } } ]"#;

        let reports = parse_measures(content).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].dependencies.contains_key("acme:lib"));
    }

    #[test]
    fn test_parse_issues_with_null_issues() {
        assert!(parse_issues(r#"{ "total": 0, "issues": null }"#).unwrap().is_empty());
        assert!(parse_issues(r#"{ "total": 0 }"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_issues_with_wrongly_typed_fields() {
        let content = r#"{ "issues": [ { "key": "AY-1", "severity": 3, "tags": "x", "message": null }, "junk" ] }"#;

        let findings = parse_issues(content).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].key, "AY-1");
        assert_eq!(findings[0].severity, "3");
        assert!(findings[0].tags.is_empty());
        assert_eq!(findings[0].message, "");
    }

    #[test]
    fn test_parse_issues_single_element_array() {
        let findings = parse_issues(r#"[ { "key": "AY-1" } ]"#).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].key, "AY-1");
    }

    #[test]
    fn test_parse_issues_bare_array() {
        let content = r#"[ { "key": "AY-1" }, { "key": "AY-2" } ]"#;
        assert_eq!(parse_issues(content).unwrap().len(), 2);
    }
}
