use thiserror::Error;

/// Shown when the transport failed before any response arrived.
pub const GENERIC_FAILURE_MESSAGE: &str = "Please try again later.";
/// Shown when the endpoint rejected the submission without a body.
pub const EMPTY_REJECTION_MESSAGE: &str = "Submission failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Rejected,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("contact endpoint responded with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("contact endpoint unreachable: {0}")]
    Transport(String),
}

impl SubmissionError {
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Rejected { .. } => FailureKind::Rejected,
            Self::Transport(_) => FailureKind::Transport,
        }
    }

    /// Text for the error notification: the server body verbatim when one was
    /// sent, otherwise a fixed fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { body, .. } if !body.is_empty() => body.clone(),
            Self::Rejected { .. } => EMPTY_REJECTION_MESSAGE.to_string(),
            Self::Transport(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
