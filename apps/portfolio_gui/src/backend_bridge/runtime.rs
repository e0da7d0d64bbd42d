//! Backend worker: owns the Tokio runtime and performs outbound requests.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use portfolio_core::{ContactTransport, HttpContactTransport};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    launch_with(cmd_rx, ui_tx, HttpContactTransport::new());
}

pub fn launch_with<T>(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, transport: T)
where
    T: ContactTransport + 'static,
{
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitContact { dispatch } => {
                        let outcome = transport
                            .deliver(&dispatch.endpoint, &dispatch.submission)
                            .await;
                        if let Err(err) = &outcome {
                            tracing::warn!(error = %err, "contact delivery failed");
                        }
                        if ui_tx.send(UiEvent::ContactResolved(outcome)).is_err() {
                            tracing::error!("ui event queue closed; dropping contact outcome");
                        }
                    }
                }
            }
            tracing::info!("backend command queue closed; worker exiting");
        });
    });
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
