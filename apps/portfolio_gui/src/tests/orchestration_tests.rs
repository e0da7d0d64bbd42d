use super::*;
use crossbeam_channel::bounded;
use portfolio_core::ContactDispatch;
use shared::protocol::ContactSubmission;

fn submit_command() -> BackendCommand {
    BackendCommand::SubmitContact {
        dispatch: ContactDispatch {
            endpoint: "https://forms.example.test".to_string(),
            submission: ContactSubmission {
                name: "A".into(),
                email: "a@b.com".into(),
                subject: "S".into(),
                message: "M".into(),
            },
        },
    }
}

#[test]
fn queued_command_leaves_status_untouched() {
    let (tx, rx) = bounded(1);
    let mut status = "ready".to_string();
    assert!(dispatch_backend_command(&tx, submit_command(), &mut status));
    assert_eq!(status, "ready");
    assert!(matches!(
        rx.try_recv(),
        Ok(BackendCommand::SubmitContact { .. })
    ));
}

#[test]
fn full_queue_reports_retry_hint() {
    let (tx, _rx) = bounded(1);
    let mut status = String::new();
    assert!(dispatch_backend_command(&tx, submit_command(), &mut status));
    assert!(!dispatch_backend_command(&tx, submit_command(), &mut status));
    assert!(status.contains("queue is full"));
}

#[test]
fn disconnected_backend_is_reported() {
    let (tx, rx) = bounded::<BackendCommand>(1);
    drop(rx);
    let mut status = String::new();
    assert!(!dispatch_backend_command(&tx, submit_command(), &mut status));
    assert!(status.contains("disconnected"));
}
