use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw contact form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact fields that passed validation, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    name: String,
    email: String,
    message: String,
}

impl ValidContact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    EmptyName,
    #[error("Please enter your email")]
    EmptyEmail,
    #[error("Please enter a message")]
    EmptyMessage,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ValidContact, ContactError> {
        let field = |value: &str, err: ContactError| {
            let value = value.trim();
            if value.is_empty() {
                Err(err)
            } else {
                Ok(value.to_string())
            }
        };
        Ok(ValidContact {
            name: field(&self.name, ContactError::EmptyName)?,
            email: field(&self.email, ContactError::EmptyEmail)?,
            message: field(&self.message, ContactError::EmptyMessage)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

impl From<ContactError> for SubmissionOutcome {
    fn from(err: ContactError) -> Self {
        SubmissionOutcome::Failure(err.to_string())
    }
}

/// Where validated messages go. Transport and retries are the sink's concern.
pub trait ContactSink: Send + Sync {
    fn deliver(&self, contact: &ValidContact) -> SubmissionOutcome;
}

/// Sink handed to server functions through context.
#[derive(Clone)]
pub struct SharedSink(pub Arc<dyn ContactSink>);

/// Validates `form` and hands it to `sink`. Never retries.
pub fn submit(sink: &dyn ContactSink, form: &ContactForm) -> SubmissionOutcome {
    match form.validate() {
        Ok(contact) => sink.deliver(&contact),
        Err(err) => err.into(),
    }
}

/// Records messages in the server log.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[cfg(feature = "ssr")]
impl ContactSink for LogSink {
    fn deliver(&self, contact: &ValidContact) -> SubmissionOutcome {
        tracing::info!(
            name = contact.name(),
            email = contact.email(),
            length = contact.message().len(),
            "contact message received"
        );
        SubmissionOutcome::Success
    }
}
