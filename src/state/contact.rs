//! Contact form state and submission status machine.
//!
//! DESIGN
//! ======
//! `Idle -> Sending -> {Success, Failure} -> Idle`. The network step lives in
//! `net::submit`; this module only owns transitions so every edge is testable
//! without a browser.
//!
//! A generation counter is bumped on each accepted submission. Reset tokens
//! handed out by `settle` carry the generation they were issued for, so a
//! reset scheduled by an earlier attempt can never clear a newer status.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

/// Placeholder shown while the request is in flight.
pub const SENDING_MESSAGE: &str = "Sending....";
/// Shown when the relay accepted the message.
pub const SUCCESS_MESSAGE: &str = "Message Sent Successfully! \u{2705}";
/// Shown for transport errors and unreadable responses.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
/// How long a terminal status stays visible before returning to idle.
pub const STATUS_RESET_AFTER: Duration = Duration::from_secs(5);

/// Values of the three contact form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    /// Mirror of the native `required` and `type="email"` checks.
    ///
    /// `required` only blocks an empty value, so whitespace-only fields pass.
    /// The email is checked after trimming, as the browser sanitizes it.
    ///
    /// # Errors
    ///
    /// Returns the first missing field, or `InvalidEmail` when the address
    /// is not shaped like `local@domain`.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !raw.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Transient message shown under the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Failure(String),
}

impl SubmissionStatus {
    /// Text rendered in the status line. `Idle` renders nothing.
    pub fn message(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Sending => SENDING_MESSAGE,
            Self::Success => SUCCESS_MESSAGE,
            Self::Failure(msg) => msg,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failure(_))
    }
}

/// Result of one relay round-trip, as seen by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The relay accepted the message.
    Delivered,
    /// The relay answered but refused; carries its human-readable reason.
    Rejected(String),
    /// The request failed or the response could not be read.
    Failed,
}

/// Why a submission was not started.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a submission is already in flight")]
    InFlight,
}

/// Handle for the deferred return to `Idle` after a terminal status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetToken(u64);

/// Contact form state owned by the `ContactForm` component.
#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub form: ContactFormInput,
    pub status: SubmissionStatus,
    generation: u64,
}

impl ContactState {
    /// Start a submission: validate, move to `Sending`, capture the fields.
    ///
    /// # Errors
    ///
    /// Refuses while another submission is in flight, or when the form would
    /// not have passed native validation. State is left untouched on error.
    pub fn begin(&mut self) -> Result<ContactFormInput, ContactError> {
        if self.status.is_sending() {
            return Err(ContactError::InFlight);
        }
        self.form.validate()?;
        self.generation = self.generation.wrapping_add(1);
        self.status = SubmissionStatus::Sending;
        Ok(self.form.clone())
    }

    /// Apply the relay outcome and hand back the token for the reset timer.
    pub fn settle(&mut self, outcome: SubmissionOutcome) -> ResetToken {
        self.status = match outcome {
            SubmissionOutcome::Delivered => {
                self.form = ContactFormInput::default();
                SubmissionStatus::Success
            }
            SubmissionOutcome::Rejected(message) => SubmissionStatus::Failure(message),
            SubmissionOutcome::Failed => SubmissionStatus::Failure(GENERIC_FAILURE_MESSAGE.to_owned()),
        };
        ResetToken(self.generation)
    }

    /// Return to `Idle` if `token` still belongs to the latest submission.
    ///
    /// Returns whether the status was cleared.
    pub fn expire(&mut self, token: ResetToken) -> bool {
        if token.0 != self.generation || !self.status.is_terminal() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}

/// Shared, mutable home of a `ContactState`.
///
/// `update_state` returns `None` once the backing storage is gone (for a signal,
/// when its owning component has been unmounted).
pub trait ContactStore {
    fn update_state<U>(&self, f: impl FnOnce(&mut ContactState) -> U) -> Option<U>;
}

impl ContactStore for RwSignal<ContactState> {
    fn update_state<U>(&self, f: impl FnOnce(&mut ContactState) -> U) -> Option<U> {
        self.try_update(f)
    }
}

impl ContactStore for Rc<RefCell<ContactState>> {
    fn update_state<U>(&self, f: impl FnOnce(&mut ContactState) -> U) -> Option<U> {
        Some(f(&mut self.borrow_mut()))
    }
}
