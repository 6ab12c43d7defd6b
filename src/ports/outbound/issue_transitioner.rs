use crate::explorer::domain::{Finding, TransitionRequest};
use crate::shared::Result;

/// IssueTransitioner port for changing the status of a finding
///
/// The production adapter calls the host API; the in-memory adapter answers
/// from the findings already loaded.
pub trait IssueTransitioner {
    /// Requests a status transition
    ///
    /// # Arguments
    /// * `request` - Key of the finding and the requested status
    /// * `findings` - Findings currently loaded, for adapters that answer locally
    ///
    /// # Returns
    /// The finding as it stands after the transition, or `None` when the
    /// host did not know the key
    ///
    /// # Errors
    /// Returns an error if the host could not be reached
    fn transition(
        &self,
        request: &TransitionRequest,
        findings: &[Finding],
    ) -> Result<Option<Finding>>;
}
