use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Element id of the input, also used in `data-error-for`.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }

    pub fn is_multiline(&self) -> bool {
        *self == Field::Message
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Message is required.")]
    MessageRequired,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::MessageRequired => Field::Message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    /// Every failing field is reported, at most one error per field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.push(FieldError::EmailInvalid);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::MessageRequired);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Form contents plus the simulated submission lifecycle. Nothing is sent
/// anywhere: a valid submit enters `sending`, the caller waits, then calls
/// [`ContactFormState::finish_sending`] and later
/// [`ContactFormState::hide_acknowledgment`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    errors: Vec<FieldError>,
    sending: bool,
    acknowledged: bool,
}

impl ContactFormState {
    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Clears previous errors and validates. Returns `true` when the form was
    /// accepted and is now sending.
    pub fn submit(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.errors.clear();
        match self.form.validate() {
            Ok(()) => {
                self.sending = true;
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    pub fn finish_sending(&mut self) {
        if !self.sending {
            return;
        }
        log::info!(
            "Form submitted: name={:?} email={:?} message={:?}",
            self.form.name,
            self.form.email,
            self.form.message
        );
        self.form = ContactForm::default();
        self.sending = false;
        self.acknowledged = true;
    }

    pub fn hide_acknowledgment(&mut self) {
        self.acknowledged = false;
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn submit_label(&self) -> &'static str {
        if self.sending {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
