use std::time::Duration;

use super::*;
use crossbeam_channel::bounded;
use portfolio_core::ContactDispatch;
use shared::{error::SubmissionError, protocol::ContactSubmission};

struct RejectingTransport;

#[async_trait::async_trait]
impl ContactTransport for RejectingTransport {
    async fn deliver(
        &self,
        _endpoint: &str,
        submission: &ContactSubmission,
    ) -> Result<(), SubmissionError> {
        Err(SubmissionError::rejected(400, format!("no thanks, {}", submission.name)))
    }
}

#[test]
fn worker_replies_with_contact_outcome() {
    let (cmd_tx, cmd_rx) = bounded(4);
    let (ui_tx, ui_rx) = bounded(4);
    launch_with(cmd_rx, ui_tx, RejectingTransport);

    cmd_tx
        .send(BackendCommand::SubmitContact {
            dispatch: ContactDispatch {
                endpoint: "https://forms.example.test".to_string(),
                submission: ContactSubmission {
                    name: "A".into(),
                    email: "a@b.com".into(),
                    subject: "S".into(),
                    message: "M".into(),
                },
            },
        })
        .expect("queue command");

    match ui_rx.recv_timeout(Duration::from_secs(5)).expect("ui event") {
        UiEvent::ContactResolved(Err(err)) => {
            assert_eq!(err, SubmissionError::rejected(400, "no thanks, A"));
        }
        _ => panic!("expected a rejected contact outcome"),
    }
}

#[test]
fn outcome_waits_for_room_in_a_full_ui_queue() {
    let (cmd_tx, cmd_rx) = bounded(4);
    let (ui_tx, ui_rx) = bounded(1);
    ui_tx
        .send(UiEvent::Info("startup".to_string()))
        .expect("fill ui queue");
    launch_with(cmd_rx, ui_tx, RejectingTransport);

    cmd_tx
        .send(BackendCommand::SubmitContact {
            dispatch: ContactDispatch {
                endpoint: "https://forms.example.test".to_string(),
                submission: ContactSubmission {
                    name: "B".into(),
                    email: "b@c.com".into(),
                    subject: "S".into(),
                    message: "M".into(),
                },
            },
        })
        .expect("queue command");

    // Give the worker time to finish delivering while the queue is still full.
    std::thread::sleep(Duration::from_millis(300));
    assert!(matches!(ui_rx.recv().expect("startup event"), UiEvent::Info(_)));

    match ui_rx.recv_timeout(Duration::from_secs(5)).expect("ui event") {
        UiEvent::ContactResolved(Err(err)) => {
            assert_eq!(err, SubmissionError::rejected(400, "no thanks, B"));
        }
        _ => panic!("expected the rejected contact outcome"),
    }
}
