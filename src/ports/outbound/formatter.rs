use crate::application::read_models::ExplorerReadModel;
use crate::shared::Result;

/// ExplorerFormatter port for rendering an exploration
///
/// This port abstracts the output formats (console tree, Markdown, JSON).
pub trait ExplorerFormatter {
    /// Formats the exploration read model
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &ExplorerReadModel) -> Result<String>;
}
