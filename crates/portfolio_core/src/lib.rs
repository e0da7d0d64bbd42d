//! Headless core of the portfolio page: reveal timing, the project gallery,
//! the contact submission state machine and its transport, and site settings.

pub mod contact;
pub mod gallery;
pub mod reveal;
pub mod settings;
pub mod transport;

pub use contact::{
    ContactDispatch, ContactField, ContactFlow, ContactForm, ContactPhase, DeliveryAnimation,
    Notification, NotificationKind, SubmitDecision,
};
pub use gallery::ProjectGallery;
pub use reveal::{Entrance, EntranceFrame, RevealLatch, Stagger, ViewportSpan};
pub use settings::{SettingsError, SettingsLoader, SiteSettings};
pub use transport::{ContactTransport, HttpContactTransport};

/// Runs one submit attempt end to end: decides, delivers if a dispatch is due,
/// and resolves the outcome at `now`. Returns the notification to show, if
/// any. A success notification only follows later, from
/// [`ContactFlow::advance_delivery`].
pub async fn submit_once<T>(
    flow: &mut ContactFlow,
    transport: &T,
    endpoint: Option<&str>,
    now: f64,
) -> Option<Notification>
where
    T: ContactTransport + ?Sized,
{
    match flow.submit(endpoint) {
        SubmitDecision::Advisory(notification) => Some(notification),
        SubmitDecision::Incomplete(_) | SubmitDecision::Ignored => None,
        SubmitDecision::Dispatch(dispatch) => {
            let outcome = transport
                .deliver(&dispatch.endpoint, &dispatch.submission)
                .await;
            flow.resolve(outcome, now)
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
