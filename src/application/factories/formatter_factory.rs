use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ExplorerFormatter;

/// Factory for creating exploration formatters
///
/// Selects the formatter adapter for an output format so the use case and
/// the CLI never name concrete adapters.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// `colored` only affects the text tree; Markdown and JSON are always plain.
    ///
    /// # Examples
    /// ```
    /// use dependency_explorer::application::dto::OutputFormat;
    /// use dependency_explorer::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn ExplorerFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(colored)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dependency_explorer::application::dto::OutputFormat;
    /// use dependency_explorer::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Markdown);
    /// assert_eq!(message, "📝 Rendering Markdown report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Rendering dependency tree...",
            OutputFormat::Markdown => "📝 Rendering Markdown report...",
            OutputFormat::Json => "📝 Rendering JSON view...",
        }
    }
}
