use super::NO_DATA_MESSAGE;
use crate::application::read_models::{ExplorerReadModel, IssueView, ModuleView, NodeView};
use crate::ports::outbound::ExplorerFormatter;
use crate::shared::Result;

/// Markdown table header for dependency rows
const TABLE_HEADER: &str =
    "| Name | Badges | Version | Property name | Next version | Last version | Licenses |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|------|--------|---------|---------------|--------------|--------------|----------|\n";

/// Markdown table header for the issue panel
const ISSUE_TABLE_HEADER: &str = "| Key | Badge | Artifact | Module | Severity | Status | Description |\n";

/// Markdown table separator line for the issue panel
const ISSUE_TABLE_SEPARATOR: &str =
    "|-----|-------|----------|--------|----------|--------|-------------|\n";

/// Indentation unit for nested dependency names
const INDENT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

/// MarkdownFormatter adapter for a static report of the visible trees
///
/// Tables list every visible node in display order, whatever its expand
/// state; nesting is shown by indenting the name cell.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn optional_cell(value: Option<&str>) -> String {
        value
            .map(Self::escape_markdown_table_cell)
            .unwrap_or_default()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ExplorerReadModel) {
        output.push_str("# Dependency Explorer\n\n");
        output.push_str(&format!("- Mode: `{}`\n", model.metadata.mode));
        if !model.metadata.search.is_empty() {
            output.push_str(&format!(
                "- Search: `{}`\n",
                Self::escape_markdown_table_cell(&model.metadata.search)
            ));
        }
        output.push_str(&format!(
            "- Generated: {} by {} {}\n\n",
            model.metadata.timestamp, model.metadata.tool_name, model.metadata.tool_version
        ));
    }

    fn render_rules(&self, output: &mut String, model: &ExplorerReadModel) {
        output.push_str("## Rules\n\n");
        for rule in &model.rules {
            if rule.active {
                output.push_str(&format!("- **{}**\n", rule.label));
            } else {
                output.push_str(&format!("- {}\n", rule.label));
            }
        }
        output.push('\n');
    }

    fn render_module(&self, output: &mut String, module: &ModuleView) {
        output.push_str(&format!("## Module `{}`\n\n", module.name));

        let Some(root) = &module.root else {
            output.push_str("*No dependency tree*\n\n");
            return;
        };

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        self.render_row(output, root, 0);
        output.push('\n');
    }

    fn render_row(&self, output: &mut String, node: &NodeView, level: usize) {
        let mut badges: Vec<String> = node.badges.iter().map(|b| b.to_string()).collect();
        for (set, label) in [
            (node.has_sub_mismatch, "+mismatch"),
            (node.has_sub_transitive, "+transitive"),
            (node.has_sub_incoherence, "+incoherence"),
        ] {
            if set {
                badges.push(label.to_string());
            }
        }

        output.push_str(&format!(
            "| {}{} | {} | {} | {} | {} | {} | {} |\n",
            INDENT.repeat(level),
            Self::escape_markdown_table_cell(node.label()),
            badges.join(", "),
            Self::optional_cell(node.version.as_deref()),
            Self::optional_cell(node.property_name.as_deref()),
            Self::optional_cell(node.next_version.as_deref()),
            Self::optional_cell(node.last_version.as_deref()),
            Self::escape_markdown_table_cell(&node.licenses)
        ));

        for child in &node.children {
            self.render_row(output, child, level + 1);
        }
    }

    fn render_issues(&self, output: &mut String, issues: &[IssueView]) {
        output.push_str("## Issues\n\n");

        if issues.is_empty() {
            output.push_str("*No issue for this rule*\n");
            return;
        }

        output.push_str(ISSUE_TABLE_HEADER);
        output.push_str(ISSUE_TABLE_SEPARATOR);
        for issue in issues {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&issue.key),
                issue.badge.map(|b| b.to_string()).unwrap_or_default(),
                Self::escape_markdown_table_cell(&issue.artifact),
                Self::escape_markdown_table_cell(&issue.module),
                Self::escape_markdown_table_cell(&issue.severity),
                Self::escape_markdown_table_cell(&issue.status),
                Self::escape_markdown_table_cell(&issue.description)
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerFormatter for MarkdownFormatter {
    fn format(&self, model: &ExplorerReadModel) -> Result<String> {
        let mut output = String::new();

        if model.no_data {
            output.push_str("# Dependency Explorer\n\n");
            output.push_str(&format!("> {}\n", NO_DATA_MESSAGE));
            return Ok(output);
        }

        self.render_header(&mut output, model);
        self.render_rules(&mut output, model);
        for module in &model.modules {
            self.render_module(&mut output, module);
        }
        self.render_issues(&mut output, &model.issues);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::fixtures::sample_read_model;

    #[test]
    fn test_escape_markdown_table_cell() {
        let escaped = MarkdownFormatter::escape_markdown_table_cell("a | b\nc");
        assert_eq!(escaped, "a \\| b c");
    }

    #[test]
    fn test_format_module_table() {
        let markdown = MarkdownFormatter::new().format(&sample_read_model()).unwrap();

        assert!(markdown.contains("# Dependency Explorer"));
        assert!(markdown.contains("- Mode: `all`"));
        assert!(markdown.contains("- **All rules**\n- Licenses mismatch\n"));
        assert!(markdown.contains("## Module `acme:app`"));
        assert!(markdown.contains(TABLE_HEADER));
        assert!(markdown.contains("| com.acme:app | +mismatch | 1.0.0 |  |  |  |  |"));
        assert!(markdown.contains(
            "| &nbsp;&nbsp;&nbsp;&nbsp;com.fasterxml:jackson-databind | update, +mismatch | 2.15.0 | jackson.version | 2.15.2 | 2.17.0 | Apache-2.0 |"
        ));
        // Collapsed nodes still list their visible children.
        assert!(markdown.contains("org.hamcrest:hamcrest-core"));
    }

    #[test]
    fn test_format_empty_module_and_issues() {
        let markdown = MarkdownFormatter::new().format(&sample_read_model()).unwrap();

        assert!(markdown.contains("## Module `acme:empty`\n\n*No dependency tree*"));
        assert!(markdown.contains(ISSUE_TABLE_HEADER));
        assert!(markdown.contains("| AY-1 | mismatch | com.fasterxml:annotations | acme:app | MAJOR | OPEN |"));
        assert!(markdown.contains("annotations \\| not allowed"));
    }

    #[test]
    fn test_format_without_issues() {
        let mut model = sample_read_model();
        model.issues.clear();

        let markdown = MarkdownFormatter::new().format(&model).unwrap();
        assert!(markdown.contains("*No issue for this rule*"));
    }

    #[test]
    fn test_format_no_data() {
        let mut model = sample_read_model();
        model.no_data = true;

        let markdown = MarkdownFormatter::new().format(&model).unwrap();
        assert!(markdown.contains(NO_DATA_MESSAGE));
        assert!(!markdown.contains("## Module"));
    }
}
