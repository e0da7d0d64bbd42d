use super::*;
use crossbeam_channel::bounded;
use portfolio_core::{ContactField, ContactPhase};

use crate::controller::events::UiErrorCategory;

fn app_with_closed_backend() -> PortfolioApp {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
    drop(cmd_rx);
    let (_ui_tx, ui_rx) = bounded::<UiEvent>(1);
    let settings = SiteSettings {
        contact_endpoint: Some("https://forms.example.test/contact".to_string()),
        assets_dir: std::env::temp_dir(),
    };
    PortfolioApp::new(cmd_tx, ui_rx, settings, 2026)
}

fn fill(app: &mut PortfolioApp) {
    let form = app.contact.form_mut();
    *form.field_mut(ContactField::Name) = "A".to_string();
    *form.field_mut(ContactField::Email) = "a@b.com".to_string();
    *form.field_mut(ContactField::Subject) = "S".to_string();
    *form.field_mut(ContactField::Message) = "M".to_string();
}

#[test]
fn refused_dispatch_settles_the_flow_as_a_transport_failure() {
    let mut app = app_with_closed_backend();
    assert!(app.status_banner.is_none());
    fill(&mut app);
    let before = app.contact.form().clone();

    app.submit_contact(0.0);

    assert_eq!(app.contact.phase(), ContactPhase::Idle);
    assert!(!app.contact.is_submitting());
    assert_eq!(app.contact.form(), &before);
    assert_eq!(app.toasts.titles(), ["Submission Error"]);

    let banner = app.status_banner.as_ref().expect("banner");
    assert_eq!(banner.category(), UiErrorCategory::Transport);
    assert!(banner.message().contains("disconnected"));
}

#[test]
fn flow_accepts_a_new_submit_after_a_refused_dispatch() {
    let mut app = app_with_closed_backend();
    fill(&mut app);

    app.submit_contact(0.0);
    app.submit_contact(1.0);

    assert_eq!(app.contact.phase(), ContactPhase::Idle);
    assert_eq!(app.toasts.titles(), ["Submission Error", "Submission Error"]);
}

#[test]
fn incomplete_form_only_sets_the_hint() {
    let mut app = app_with_closed_backend();

    app.submit_contact(0.0);

    assert!(app.toasts.is_empty());
    assert!(app.status_banner.is_none());
    let hint = app.form_hint.as_deref().expect("hint");
    assert!(hint.contains("Name"));
}
