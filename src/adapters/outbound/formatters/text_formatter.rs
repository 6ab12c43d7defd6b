use super::NO_DATA_MESSAGE;
use crate::application::read_models::{ExplorerReadModel, IssueView, ModuleView, NodeView};
use crate::explorer::domain::{ArtifactKind, BadgeCategory};
use crate::ports::outbound::ExplorerFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};
use std::fmt::Write;

/// Marker printed in place of the children of a collapsed node
const COLLAPSED_MARKER: &str = "…";

/// TextFormatter adapter drawing each module as a console tree
///
/// Only expanded nodes show their children; a collapsed node with visible
/// children gets a single marker line instead.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn badge_style(category: BadgeCategory) -> Style {
        match category {
            BadgeCategory::Update => Style::new().cyan(),
            BadgeCategory::Incoherence => Style::new().magenta(),
            BadgeCategory::Mismatch => Style::new().red().bold(),
            BadgeCategory::Unused => Style::new().yellow(),
            BadgeCategory::Transitive => Style::new().blue(),
        }
    }

    fn render_header(&self, output: &mut String, model: &ExplorerReadModel) {
        let title = self.paint("Dependency explorer", Style::new().bold());
        let _ = write!(output, "{} - mode: {}", title, model.metadata.mode);
        if !model.metadata.search.is_empty() {
            let _ = write!(output, ", search: \"{}\"", model.metadata.search);
        }
        output.push('\n');

        if !model.rules.is_empty() {
            let rules: Vec<String> = model
                .rules
                .iter()
                .map(|rule| {
                    if rule.active {
                        self.paint(&format!("[{}]", rule.label), Style::new().bold())
                    } else {
                        rule.label.clone()
                    }
                })
                .collect();
            let _ = writeln!(output, "Rules: {}", rules.join(" | "));
        }
        output.push('\n');
    }

    fn render_module(&self, output: &mut String, module: &ModuleView) {
        let _ = writeln!(
            output,
            "📦 {}",
            self.paint(&module.name, Style::new().bold().underline())
        );
        match &module.root {
            Some(root) => {
                let _ = writeln!(output, "{}", self.node_line(root));
                self.render_children(output, root, "");
            }
            None => {
                let _ = writeln!(output, "   (no dependency tree)");
            }
        }
        output.push('\n');
    }

    fn render_children(&self, output: &mut String, node: &NodeView, prefix: &str) {
        if node.children.is_empty() {
            return;
        }
        if !node.expanded {
            let marker = format!("{} ({} hidden)", COLLAPSED_MARKER, node.subtree_size() - 1);
            let _ = writeln!(
                output,
                "{}└── {}",
                prefix,
                self.paint(&marker, Style::new().dimmed())
            );
            return;
        }

        let last = node.children.len() - 1;
        for (index, child) in node.children.iter().enumerate() {
            let (branch, continuation) = if index == last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            let _ = writeln!(output, "{}{}{}", prefix, branch, self.node_line(child));
            self.render_children(output, child, &format!("{}{}", prefix, continuation));
        }
    }

    fn node_line(&self, node: &NodeView) -> String {
        let mut line = self.paint(node.label(), Style::new().bold());

        if let Some(version) = &node.version {
            let _ = write!(line, " {}", version);
        }
        if let Some(next) = node.next_version.as_deref().filter(|v| !v.is_empty()) {
            let _ = write!(line, " {}", self.paint(&format!("→ {}", next), Style::new().cyan()));
        }
        if node.kind != ArtifactKind::Runtime {
            let _ = write!(line, " ({})", node.kind);
        }
        for category in &node.badges {
            let badge = format!("[{}]", category);
            let _ = write!(line, " {}", self.paint(&badge, Self::badge_style(*category)));
        }

        let below: Vec<&str> = [
            (node.has_sub_mismatch, "mismatch"),
            (node.has_sub_transitive, "transitive"),
            (node.has_sub_incoherence, "incoherence"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect();
        if !below.is_empty() {
            let note = format!("(below: {})", below.join(", "));
            let _ = write!(line, " {}", self.paint(&note, Style::new().dimmed()));
        }

        if !node.licenses.is_empty() {
            let _ = write!(line, " {}", self.paint(&node.licenses, Style::new().dimmed()));
        }
        line
    }

    fn render_issues(&self, output: &mut String, issues: &[IssueView]) {
        let heading = format!("Issues ({})", issues.len());
        let _ = writeln!(output, "{}", self.paint(&heading, Style::new().bold()));
        if issues.is_empty() {
            let _ = writeln!(output, "   No issue for this rule");
            return;
        }
        for issue in issues {
            let badge = issue
                .badge
                .map(|category| self.paint(&format!("[{}]", category), Self::badge_style(category)))
                .unwrap_or_else(|| "[-]".to_string());
            let _ = writeln!(
                output,
                "   {} {} {} {} {}",
                issue.key, issue.severity, issue.status, badge, issue.description
            );
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ExplorerFormatter for TextFormatter {
    fn format(&self, model: &ExplorerReadModel) -> Result<String> {
        let mut output = String::new();

        if model.no_data {
            let _ = writeln!(output, "{}", self.paint(NO_DATA_MESSAGE, Style::new().yellow()));
            return Ok(output);
        }

        self.render_header(&mut output, model);
        for module in &model.modules {
            self.render_module(&mut output, module);
        }
        self.render_issues(&mut output, &model.issues);

        Ok(output)
    }
}
