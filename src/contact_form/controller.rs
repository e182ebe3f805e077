use serde::{Deserialize, Serialize};

use super::{DispatcherClient, DispatcherClientError};

/// Shown for every failed submission, whatever the cause.
pub const SUBMIT_FAILED_MESSAGE: &str = "אירעה שגיאה בשליחת הפנייה. אנא נסו שוב.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub idea: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Idea,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Editable, possibly showing the last error.
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// State of the contact form between renders.
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    error_message: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Idea => self.fields.idea = value,
        }
    }

    /// Moves to `Submitting` and hands out the fields to send.
    ///
    /// Returns `None` while a submission is in flight or already accepted.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.status != FormStatus::Idle {
            return None;
        }
        self.status = FormStatus::Submitting;
        self.error_message = None;
        Some(self.fields.clone())
    }

    /// Resolves the in-flight submission. Ignored if none is in flight.
    pub fn finish_submit(&mut self, outcome: Result<(), DispatcherClientError>) {
        if self.status != FormStatus::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = FormStatus::Submitted;
                self.fields = ContactFields::default();
            }
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Contact form submission failed");
                self.status = FormStatus::Idle;
                self.error_message = Some(SUBMIT_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub async fn submit(&mut self, client: &DispatcherClient) {
        let fields = match self.begin_submit() {
            Some(fields) => fields,
            None => return,
        };
        let outcome = client.send(&fields).await;
        self.finish_submit(outcome);
    }

    /// "Send another message": back to an empty, editable form.
    pub fn reset(&mut self) {
        if self.status != FormStatus::Submitted {
            return;
        }
        self.status = FormStatus::Idle;
        self.fields = ContactFields::default();
        self.error_message = None;
    }
}
