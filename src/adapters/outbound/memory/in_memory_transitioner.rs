use crate::explorer::domain::{Finding, TransitionRequest};
use crate::explorer::services::TransitionStub;
use crate::ports::outbound::IssueTransitioner;
use crate::shared::Result;

/// InMemoryTransitioner adapter answering transitions from loaded findings
///
/// Used for exported snapshots, where there is no server to call. Nothing
/// is persisted; the transition only affects the current run.
#[derive(Debug, Default)]
pub struct InMemoryTransitioner;

impl InMemoryTransitioner {
    pub fn new() -> Self {
        Self
    }
}

impl IssueTransitioner for InMemoryTransitioner {
    fn transition(
        &self,
        request: &TransitionRequest,
        findings: &[Finding],
    ) -> Result<Option<Finding>> {
        Ok(TransitionStub::apply(request.status, &request.key, findings))
    }
}
