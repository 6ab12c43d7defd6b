use crate::explorer::domain::{TransitionStatus, Transitionable};

/// TransitionStub service answering status transitions without a host
pub struct TransitionStub;

impl TransitionStub {
    /// Copy of the finding with `key`, its status replaced by the upper-cased `status`
    ///
    /// `None` when the key is empty, the list is empty or no finding has that key.
    /// The input list is never modified.
    pub fn apply_transition<F: Transitionable>(
        status: &str,
        key: &str,
        findings: &[F],
    ) -> Option<F> {
        if status.is_empty() || key.is_empty() || findings.is_empty() {
            return None;
        }
        findings
            .iter()
            .find(|finding| finding.key() == key)
            .map(|finding| finding.with_status(status.to_uppercase()))
    }

    pub fn apply<F: Transitionable>(
        status: TransitionStatus,
        key: &str,
        findings: &[F],
    ) -> Option<F> {
        Self::apply_transition(status.as_str(), key, findings)
    }
}
