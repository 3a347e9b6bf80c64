use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A proposed snapshot failed the structural check and was discarded.
    #[error("Invalid state candidate: {reason}")]
    InvalidCandidate { reason: String },
}

impl StateError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        StateError::InvalidCandidate {
            reason: reason.into(),
        }
    }
}
