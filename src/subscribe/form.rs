use thiserror::Error;

use super::debounce::{DebounceTickets, Ticket};
use super::response::OutcomeEdge;
use super::validate::is_acceptable_email;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscribeError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Success,
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Applied,
    /// Hand the ticket to the debounced notifier, then call `settle`.
    Deferred(Ticket),
}

#[derive(Debug, Clone, Default)]
pub struct SubscribeForm {
    pub email: String,
    pub error: Option<SubscribeError>,
    pub touched: bool,
    pub submitting: bool,
    tickets: DebounceTickets,
    edge: OutcomeEdge,
}

impl SubscribeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field already showing an error is re-checked at once, otherwise the
    /// check waits for a pause in typing.
    pub fn on_change(&mut self, value: impl Into<String>) -> Validation {
        self.email = value.into();
        if self.error.is_some() {
            self.tickets.cancel();
            self.revalidate();
            Validation::Applied
        } else {
            Validation::Deferred(self.tickets.issue())
        }
    }

    pub fn settle(&mut self, ticket: Ticket) {
        if self.tickets.is_current(ticket) {
            self.revalidate();
        }
    }

    pub fn on_blur(&mut self) {
        self.touched = true;
        if !is_acceptable_email(&self.email) {
            self.error = Some(SubscribeError::InvalidEmail);
        }
    }

    /// On `Err` the caller must prevent the native form post.
    pub fn on_submit_attempt(&mut self) -> Result<(), SubscribeError> {
        self.tickets.cancel();
        if !is_acceptable_email(&self.email) {
            self.error = Some(SubscribeError::InvalidEmail);
            return Err(SubscribeError::InvalidEmail);
        }
        self.submitting = true;
        self.error = None;
        self.edge.rearm();
        Ok(())
    }

    pub fn outcome_changed(&self, observed: &Option<SubscribeOutcome>) -> bool {
        self.edge.is_new(observed)
    }

    pub fn observe(&mut self, observed: Option<SubscribeOutcome>) -> Option<SubscribeOutcome> {
        let outcome = self.edge.observe(observed)?;
        self.apply(outcome.clone());
        Some(outcome)
    }

    pub fn apply(&mut self, outcome: SubscribeOutcome) {
        self.tickets.cancel();
        match outcome {
            SubscribeOutcome::Success => {
                self.email.clear();
                self.error = None;
                self.touched = false;
                self.submitting = false;
            }
            SubscribeOutcome::Rejected(message) => {
                self.error = Some(SubscribeError::Rejected(message));
                self.submitting = false;
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.submitting {
            Phase::Submitting
        } else if self.email.is_empty() && self.error.is_none() {
            Phase::Idle
        } else {
            Phase::Editing
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.email.is_empty() && self.error.is_none()
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Subscribing..."
        } else {
            "Subscribe"
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    fn revalidate(&mut self) {
        self.error = if is_acceptable_email(&self.email) {
            None
        } else {
            Some(SubscribeError::InvalidEmail)
        };
    }
}
