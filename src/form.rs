//! Contact form submission.
//!
//! [`Submitter`] is the button's state machine:
//!
//! ```text
//! Idle --begin--> Sending --finish(Ok)--> Sent   --restore--> Idle
//!                         --finish(Err)-> Failed --restore--> Idle
//! ```
//!
//! [`submit`] drives one pass through it against a [`Relay`] and a
//! [`FormView`]. The browser implementations live in `web::contact`; tests
//! use in-memory ones.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::future::Future;

use serde::Serialize;

use crate::error::RelayError;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent!";
pub const FAILED_LABEL: &str = "Failed";
pub const SENT_COLOR: &str = "#10b981";
pub const FAILED_COLOR: &str = "#ef4444";

pub const SENT_ALERT: &str = "Thank you! Your message has been sent successfully.";
pub const FAILED_ALERT: &str = "Failed to send message. Please try again later.";

/// Named field values, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// What the submit button should look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    /// Background colour override; `None` restores the stylesheet's
    pub color: Option<&'static str>,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
    Sent,
    Failed,
}

pub struct Submitter {
    phase: Phase,
    original_label: String,
    button: ButtonState,
}

impl Submitter {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            phase: Phase::Idle,
            button: ButtonState { label: label.clone(), color: None, disabled: false },
            original_label: label,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn button(&self) -> &ButtonState {
        &self.button
    }

    /// Start a submission. Rejected until the previous one has been restored.
    pub fn begin(&mut self) -> Result<&ButtonState, RelayError> {
        if self.phase != Phase::Idle {
            return Err(RelayError::Busy);
        }
        self.phase = Phase::Sending;
        self.button = ButtonState { label: SENDING_LABEL.into(), color: None, disabled: true };
        Ok(&self.button)
    }

    /// Record the relay's answer. The button stays disabled until `restore`.
    pub fn finish(&mut self, outcome: &Result<(), RelayError>) -> &ButtonState {
        let (phase, label, color) = match outcome {
            Ok(()) => (Phase::Sent, SENT_LABEL, SENT_COLOR),
            Err(_) => (Phase::Failed, FAILED_LABEL, FAILED_COLOR),
        };
        self.phase = phase;
        self.button = ButtonState { label: label.into(), color: Some(color), disabled: true };
        &self.button
    }

    /// Back to the original label and colour, ready for the next submit.
    pub fn restore(&mut self) -> &ButtonState {
        self.phase = Phase::Idle;
        self.button = ButtonState { label: self.original_label.clone(), color: None, disabled: false };
        &self.button
    }
}

/// Delivers form fields to whoever turns them into an email.
pub trait Relay {
    fn send(&self, fields: &FormFields) -> impl Future<Output = Result<(), RelayError>>;
}

/// The form as seen by the submit flow.
pub trait FormView {
    fn fields(&self) -> FormFields;
    fn show(&self, button: &ButtonState);
    fn alert(&self, message: &str);
    /// Clear every field
    fn reset(&self);
}

/// One full submission: send, report, wait out `delay()`, restore the button.
///
/// The delay starts once the relay has answered. Fields are only cleared on
/// success. No borrow of `submitter` is held across an await, so other
/// handlers may inspect it meanwhile.
pub async fn submit<R, V, F, D>(
    submitter: &RefCell<Submitter>,
    relay: &R,
    view: &V,
    delay: F,
) -> Result<(), RelayError>
where
    R: Relay,
    V: FormView,
    F: FnOnce() -> D,
    D: Future<Output = ()>,
{
    {
        let mut s = submitter.borrow_mut();
        match s.begin() {
            Ok(button) => view.show(button),
            Err(e) => {
                log::warn!("contact form: {e}");
                return Err(e);
            }
        }
    }

    let fields = view.fields();
    log::debug!("contact form: sending {} fields", fields.len());
    let outcome = relay.send(&fields).await;

    view.show(submitter.borrow_mut().finish(&outcome));
    match &outcome {
        Ok(()) => {
            view.alert(SENT_ALERT);
            view.reset();
        }
        Err(e) => {
            log::error!("contact form: {e}");
            view.alert(FAILED_ALERT);
        }
    }

    delay().await;
    view.show(submitter.borrow_mut().restore());
    outcome
}
