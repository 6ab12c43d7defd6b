use crate::explorer::domain::TransitionRequest;
use crate::explorer::policies::DisplayMode;

/// ExploreRequest - Internal request DTO for the exploration use case
#[derive(Debug, Clone, Default)]
pub struct ExploreRequest {
    /// Which nodes to show
    pub mode: DisplayMode,
    /// Case-insensitive substring filter on "group:artifact"
    pub search: String,
    /// Modules to render; empty means every module
    pub modules: Vec<String>,
    /// Status changes to apply before rendering, in order
    pub transitions: Vec<TransitionRequest>,
}

impl ExploreRequest {
    pub fn new(mode: DisplayMode, search: String) -> Self {
        Self {
            mode,
            search,
            ..Self::default()
        }
    }

    pub fn with_modules(mut self, modules: Vec<String>) -> Self {
        self.modules = modules;
        self
    }

    pub fn with_transitions(mut self, transitions: Vec<TransitionRequest>) -> Self {
        self.transitions = transitions;
        self
    }
}
