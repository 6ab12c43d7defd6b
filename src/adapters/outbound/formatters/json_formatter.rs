use crate::application::read_models::ExplorerReadModel;
use crate::ports::outbound::ExplorerFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerFormatter for JsonFormatter {
    fn format(&self, model: &ExplorerReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        Ok(json)
    }
}
