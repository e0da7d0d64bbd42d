//! Contact form state and the submission state machine.
//!
//! [`ContactFlow`] performs no I/O. `submit` decides whether a request should
//! go out and hands back the payload; the caller delivers it however it likes
//! and reports the outcome through `resolve`. The delivery animation that
//! follows a success is driven by `advance_delivery` with the caller's clock.

use shared::error::SubmissionError;
use shared::protocol::ContactSubmission;

/// Length of the post-success delivery animation, in seconds.
pub const DELIVERY_DURATION_SECS: f64 = 2.5;

pub const ADVISORY_TITLE: &str = "No form endpoint configured";
pub const ADVISORY_DESCRIPTION: &str = "Set CONTACT_ENDPOINT (or contact_endpoint in portfolio.toml) to enable form submissions, or use the mail button.";
pub const ERROR_TITLE: &str = "Submission Error";
pub const SUCCESS_TITLE: &str = "Message Sent!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you, I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "john@example.com",
            ContactField::Subject => "Project Inquiry",
            ContactField::Message => "Tell me about your project...",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Fields left empty. Only presence is checked, not format.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.field(field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Idle,
    Submitting,
    Success,
    Failed,
}

impl ContactPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactPhase::Idle => "idle",
            ContactPhase::Submitting => "submitting",
            ContactPhase::Success => "success",
            ContactPhase::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Advisory,
    Success,
    Error,
}

/// Transient user-facing message raised by the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn advisory() -> Self {
        Self {
            kind: NotificationKind::Advisory,
            title: ADVISORY_TITLE.to_string(),
            description: ADVISORY_DESCRIPTION.to_string(),
        }
    }

    pub fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_DESCRIPTION.to_string(),
        }
    }

    pub fn error(err: &SubmissionError) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: ERROR_TITLE.to_string(),
            description: err.user_message(),
        }
    }
}

/// One outbound request the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDispatch {
    pub endpoint: String,
    pub submission: ContactSubmission,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Required fields are empty; nothing happens.
    Incomplete(Vec<ContactField>),
    /// No endpoint is configured; show the notification and stay idle.
    Advisory(Notification),
    /// A submission or its delivery animation is still in progress.
    Ignored,
    Dispatch(ContactDispatch),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryAnimation {
    pub started_at: f64,
    pub duration: f64,
}

impl DeliveryAnimation {
    pub fn new(started_at: f64) -> Self {
        Self {
            started_at,
            duration: DELIVERY_DURATION_SECS,
        }
    }

    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[derive(Debug, Clone)]
pub struct ContactFlow {
    form: ContactForm,
    phase: ContactPhase,
    delivery: Option<DeliveryAnimation>,
    trail: Vec<ContactPhase>,
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFlow {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            phase: ContactPhase::Idle,
            delivery: None,
            trail: Vec::new(),
        }
    }

    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ContactPhase::Submitting
    }

    pub fn delivery_active(&self) -> bool {
        self.delivery.is_some()
    }

    pub fn delivery(&self) -> Option<DeliveryAnimation> {
        self.delivery
    }

    pub fn delivery_progress(&self, now: f64) -> Option<f32> {
        self.delivery.map(|animation| animation.progress(now))
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// The form stays editable in every phase; a dispatched request carries
    /// the values captured when it was submitted.
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Phases entered since the last dispatched submission.
    pub fn phase_trail(&self) -> &[ContactPhase] {
        &self.trail
    }

    pub fn submit(&mut self, endpoint: Option<&str>) -> SubmitDecision {
        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(missing = missing.len(), "contact form incomplete");
            return SubmitDecision::Incomplete(missing);
        }

        let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) else {
            tracing::info!("contact endpoint not configured; submission skipped");
            return SubmitDecision::Advisory(Notification::advisory());
        };

        if self.phase != ContactPhase::Idle {
            tracing::debug!(phase = self.phase.as_str(), "submission already in progress");
            return SubmitDecision::Ignored;
        }

        self.trail.clear();
        self.enter(ContactPhase::Submitting);
        tracing::info!(endpoint, "dispatching contact submission");
        SubmitDecision::Dispatch(ContactDispatch {
            endpoint: endpoint.to_string(),
            submission: self.form.to_submission(),
        })
    }

    /// Applies the outcome of the in-flight request. Success clears the form
    /// and starts the delivery animation; the success notification comes from
    /// `advance_delivery` once it finishes. Failure returns the error
    /// notification and leaves the form untouched.
    pub fn resolve(
        &mut self,
        outcome: Result<(), SubmissionError>,
        now: f64,
    ) -> Option<Notification> {
        if self.phase != ContactPhase::Submitting {
            tracing::warn!(
                phase = self.phase.as_str(),
                "ignoring submission outcome with no request in flight"
            );
            return None;
        }

        match outcome {
            Ok(()) => {
                self.form.clear();
                self.enter(ContactPhase::Success);
                self.delivery = Some(DeliveryAnimation::new(now));
                tracing::info!("contact submission accepted");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                self.enter(ContactPhase::Failed);
                self.enter(ContactPhase::Idle);
                Some(Notification::error(&err))
            }
        }
    }

    /// Finishes the delivery animation when its time is up, returning the
    /// success notification exactly once.
    pub fn advance_delivery(&mut self, now: f64) -> Option<Notification> {
        let animation = self.delivery?;
        if !animation.is_complete(now) {
            return None;
        }
        self.delivery = None;
        self.enter(ContactPhase::Idle);
        Some(Notification::success())
    }

    fn enter(&mut self, phase: ContactPhase) {
        tracing::trace!(from = self.phase.as_str(), to = phase.as_str(), "contact phase");
        self.phase = phase;
        self.trail.push(phase);
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
