//! Backend commands queued from UI to backend worker.

use portfolio_core::ContactDispatch;

pub enum BackendCommand {
    SubmitContact { dispatch: ContactDispatch },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitContact { .. } => "submit_contact",
        }
    }
}
