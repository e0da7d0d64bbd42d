use serde::{Deserialize, Serialize};

/// JSON body of the outbound contact request.
///
/// Field order is the wire order: `name`, `email`, `subject`, `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
