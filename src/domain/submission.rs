use chrono::{DateTime, SecondsFormat, Utc};

use super::{Email, SubmitterName};

/// Raw field values as read from the page, before any validation.
#[derive(Debug)]
pub struct FormData {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField(FormField),
    #[error("Please enter a valid email address")]
    MalformedEmail,
}

impl ValidationError {
    /// Tag used in the `form_validation_error` analytics payload.
    pub fn field_tag(&self) -> &'static str {
        match self {
            ValidationError::MissingField(FormField::Name) => "name",
            ValidationError::MissingField(FormField::Email) => "email",
            ValidationError::MalformedEmail => "email_format",
        }
    }
}

#[derive(Debug)]
pub struct SubmissionInput {
    pub name: SubmitterName,
    pub email: Email,
}

impl TryFrom<FormData> for SubmissionInput {
    type Error = ValidationError;

    /// Validation order matters: both fields are checked for emptiness
    /// before the email shape, and the name wins when both are empty.
    fn try_from(value: FormData) -> Result<Self, Self::Error> {
        let name = SubmitterName::parse(value.name)
            .map_err(|_| ValidationError::MissingField(FormField::Name))?;
        let email = value.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField(FormField::Email));
        }
        let email =
            Email::parse(email.to_string()).map_err(|_| ValidationError::MalformedEmail)?;
        Ok(Self { name, email })
    }
}

/// The payload posted to the submission endpoint. Can only be built out of a
/// `SubmissionInput` that already passed validation.
#[derive(Debug)]
pub struct SubmissionRequest {
    name: SubmitterName,
    email: Email,
    timestamp: DateTime<Utc>,
}

impl SubmissionRequest {
    /// Consumes the validated input, stamping it with the current UTC time.
    pub fn new(input: SubmissionInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            timestamp: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn email(&self) -> &str {
        self.email.as_ref()
    }

    /// ISO-8601 with millisecond precision and a `Z` suffix, e.g.
    /// `2026-08-29T12:34:56.789Z`.
    pub fn timestamp(&self) -> String {
        self.timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
