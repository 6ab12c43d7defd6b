/// Formatter adapters for the exploration output formats
mod json_formatter;
mod markdown_formatter;
mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use text_formatter::TextFormatter;

/// Shown instead of a tree when the host holds no dependency report
pub const NO_DATA_MESSAGE: &str =
    "No data: see error during project scan, or allow explorer to scan this project.";
