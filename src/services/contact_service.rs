//! Contact form submission flow.
//!
//! States: `Idle -> Submitting -> {Succeeded, Failed} -> Idle`. A terminal
//! state reverts to `Idle` after [`REVERT_AFTER`] unless a new submission
//! supersedes it first. At most one relay call is in flight.

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use regex::Regex;
use tokio::task::JoinHandle;

use crate::config::EmailJsConfig;
use crate::error::{ContactError, DELIVERY_MESSAGE};
use crate::services::email_relay::{EmailRelay, TemplateParams};

/// How long a terminal status stays visible.
pub const REVERT_AFTER: Duration = Duration::from_millis(5000);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Returns whether `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// One of the four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in display order.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];
}

/// Values entered by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Creates a filled form.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Returns the value of `field`.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns whether every field is empty.
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Checks that all fields are non-blank and the email is well formed.
    pub fn validate(&self) -> Result<(), ContactError> {
        let all_present = ContactField::ALL
            .iter()
            .all(|f| !self.get(*f).trim().is_empty());

        if all_present && is_valid_email(self.email.trim()) {
            Ok(())
        } else {
            Err(ContactError::Validation)
        }
    }

    /// Builds the relay payload. Replies go back to the sender.
    pub fn to_params(&self, recipient: &str) -> TemplateParams {
        let email = self.email.trim().to_string();
        TemplateParams {
            from_name: self.name.trim().to_string(),
            from_email: email.clone(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            to_email: recipient.to_string(),
            reply_to: email,
        }
    }
}

/// Progress of the most recent submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    /// Returns whether this is `Succeeded` or `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded | SubmissionStatus::Failed(_))
    }

    /// Returns whether a relay call is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// Banner headline and detail for a terminal status.
    pub fn banner(&self) -> Option<(&'static str, &str)> {
        match self {
            SubmissionStatus::Succeeded => Some(("Message sent successfully!", "I'll respond soon.")),
            SubmissionStatus::Failed(reason) => Some(("Error", reason.as_str())),
            _ => None,
        }
    }
}

/// What a call to [`ContactService::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    Busy,
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The relay accepted the message.
    Sent,
    /// The submission failed with the given user-facing reason.
    Failed(String),
}

/// Read-only copy of the form state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSnapshot {
    pub form: ContactForm,
    pub status: SubmissionStatus,
    pub validation_error: Option<&'static str>,
}

impl ContactSnapshot {
    /// Returns whether the submit control is active.
    pub fn can_submit(&self) -> bool {
        !self.status.is_submitting()
    }
}

#[derive(Debug, Default)]
struct Inner {
    form: ContactForm,
    status: SubmissionStatus,
    validation_error: Option<&'static str>,
    // Bumped on every submission so a stale revert never fires.
    generation: u64,
    revert: Option<JoinHandle<()>>,
}

impl Inner {
    fn cancel_revert(&mut self) {
        if let Some(handle) = self.revert.take() {
            handle.abort();
        }
    }
}

/// Owns the contact form and drives submissions through a relay.
pub struct ContactService<R: EmailRelay> {
    relay: Arc<R>,
    config: EmailJsConfig,
    recipient: String,
    revert_after: Duration,
    inner: Arc<Mutex<Inner>>,
}

impl<R: EmailRelay + 'static> ContactService<R> {
    /// Creates a service delivering to `recipient`.
    pub fn new(relay: Arc<R>, config: EmailJsConfig, recipient: impl Into<String>) -> Self {
        Self {
            relay,
            config,
            recipient: recipient.into(),
            revert_after: REVERT_AFTER,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Overrides how long terminal states stay visible.
    pub fn with_revert_after(mut self, delay: Duration) -> Self {
        self.revert_after = delay;
        self
    }

    /// Returns the recipient address.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Updates one field. Allowed in every state.
    pub fn update_field(&self, field: ContactField, value: impl Into<String>) {
        self.lock().form.set(field, value);
    }

    /// Replaces the whole form.
    pub fn set_form(&self, form: ContactForm) {
        self.lock().form = form;
    }

    /// Returns the current status.
    pub fn status(&self) -> SubmissionStatus {
        self.lock().status.clone()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> ContactSnapshot {
        let inner = self.lock();
        ContactSnapshot {
            form: inner.form.clone(),
            status: inner.status.clone(),
            validation_error: inner.validation_error,
        }
    }

    /// Validates and relays the current form.
    ///
    /// Must run inside a tokio runtime. The relay call and the transition
    /// out of `Submitting` run on a spawned task, so dropping this future
    /// does not strand the form in `Submitting`.
    pub async fn submit(&self) -> SubmitOutcome {
        let (form, generation) = {
            let mut inner = self.lock();
            if inner.status.is_submitting() {
                tracing::debug!("submission already in flight");
                return SubmitOutcome::Busy;
            }

            inner.cancel_revert();
            inner.generation += 1;
            inner.status = SubmissionStatus::Idle;
            inner.validation_error = None;

            if let Err(err) = inner.form.validate() {
                inner.validation_error = Some(err.user_message());
                return SubmitOutcome::Invalid;
            }

            inner.status = SubmissionStatus::Submitting;
            (inner.form.clone(), inner.generation)
        };

        let relay = Arc::clone(&self.relay);
        let config = self.config.clone();
        let params = form.to_params(&self.recipient);
        let state = Arc::clone(&self.inner);
        let revert_after = self.revert_after;

        let delivery = tokio::spawn(async move {
            let result = deliver(relay.as_ref(), &config, &params).await;
            settle(&state, generation, result, revert_after)
        });

        match delivery.await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!("contact delivery task failed: {}", err);
                let reason = DELIVERY_MESSAGE.to_string();
                let mut inner = self.lock();
                if inner.generation == generation && inner.status.is_submitting() {
                    inner.status = SubmissionStatus::Failed(reason.clone());
                    schedule_revert(&self.inner, &mut inner, generation, revert_after);
                }
                SubmitOutcome::Failed(reason)
            }
        }
    }

    /// Cancels a pending auto-revert. Call on teardown.
    pub fn shutdown(&self) {
        self.lock().cancel_revert();
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn deliver<R: EmailRelay>(
    relay: &R,
    config: &EmailJsConfig,
    params: &TemplateParams,
) -> Result<(), ContactError> {
    let credentials = config.credentials()?;
    relay.send(&credentials, params).await?;
    Ok(())
}

/// Moves a finished submission to its terminal state and arms the revert.
fn settle(
    state: &Arc<Mutex<Inner>>,
    generation: u64,
    result: Result<(), ContactError>,
    revert_after: Duration,
) -> SubmitOutcome {
    let mut inner = state.lock().unwrap_or_else(PoisonError::into_inner);
    let outcome = match result {
        Ok(()) => {
            tracing::info!("contact message sent");
            inner.form.clear();
            inner.status = SubmissionStatus::Succeeded;
            SubmitOutcome::Sent
        }
        Err(err) => {
            tracing::warn!("contact message failed: {}", err);
            let reason = err.user_message().to_string();
            inner.status = SubmissionStatus::Failed(reason.clone());
            SubmitOutcome::Failed(reason)
        }
    };
    schedule_revert(state, &mut inner, generation, revert_after);
    outcome
}

fn schedule_revert(
    state: &Arc<Mutex<Inner>>,
    inner: &mut Inner,
    generation: u64,
    delay: Duration,
) {
    let state: Weak<Mutex<Inner>> = Arc::downgrade(state);

    inner.revert = Some(tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let Some(state) = state.upgrade() else {
            return;
        };
        let mut inner = state.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.generation == generation && inner.status.is_terminal() {
            inner.status = SubmissionStatus::Idle;
            inner.revert = None;
            tracing::debug!("contact status reverted to idle");
        }
    }));
}

impl<R: EmailRelay> Drop for ContactService<R> {
    fn drop(&mut self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.cancel_revert();
    }
}
