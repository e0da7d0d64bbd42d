//! Backend-to-UI events and error modeling for the portfolio window.

use shared::error::{FailureKind, SubmissionError};

pub enum UiEvent {
    Info(String),
    Error(UiError),
    ContactResolved(Result<(), SubmissionError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Configuration,
    Transport,
    Rejected,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    ContactSubmission,
    AssetLoading,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("missing asset") {
            UiErrorCategory::Configuration
        } else if lower.contains("runtime") {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_submission(err: &SubmissionError) -> Self {
        let category = match err.kind() {
            FailureKind::Rejected => UiErrorCategory::Rejected,
            FailureKind::Transport => UiErrorCategory::Transport,
        };
        Self {
            category,
            context: UiErrorContext::ContactSubmission,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn category_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Configuration => "Configuration",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Rejected => "Rejected",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
