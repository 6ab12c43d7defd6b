use crate::application::read_models::ExplorerReadModel;

/// ExploreResponse - Result of the exploration use case
#[derive(Debug, Clone)]
pub struct ExploreResponse {
    pub read_model: ExplorerReadModel,
    /// Keys of the findings whose transition was accepted
    pub transitioned: Vec<String>,
    /// Keys of the findings whose transition was rejected
    pub rejected: Vec<String>,
}

impl ExploreResponse {
    pub fn new(read_model: ExplorerReadModel) -> Self {
        Self {
            read_model,
            transitioned: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Whether any finding is listed for the active mode
    pub fn has_findings(&self) -> bool {
        !self.read_model.issues.is_empty()
    }
}
