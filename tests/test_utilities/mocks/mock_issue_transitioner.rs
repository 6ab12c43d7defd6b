use dependency_explorer::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock IssueTransitioner that records requests and answers like the server would
#[derive(Default, Clone)]
pub struct MockIssueTransitioner {
    pub requests: Arc<Mutex<Vec<TransitionRequest>>>,
    /// Answer OPEN instead of the requested status, as a server refusing the change
    reopen: bool,
}

impl MockIssueTransitioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reopening() -> Self {
        Self {
            reopen: true,
            ..Self::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl IssueTransitioner for MockIssueTransitioner {
    fn transition(
        &self,
        request: &TransitionRequest,
        findings: &[Finding],
    ) -> Result<Option<Finding>> {
        self.requests.lock().unwrap().push(request.clone());

        let status = if self.reopen {
            "OPEN"
        } else {
            request.status.as_str()
        };
        Ok(TransitionStub::apply_transition(status, &request.key, findings))
    }
}
