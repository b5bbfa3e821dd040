use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Name,
    Email,
    Message,
    Phone,
    Attachment,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::Phone => "phone",
            Self::Attachment => "attachment",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Message)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum FormError {
    #[error("{} is required", .0.as_str())]
    MissingField(FormField),
}

/// Unsubmitted contact form contents.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: Option<String>,
    /// File name of the attachment the visitor picked, if any.
    pub attachment: Option<String>,
}

/// The payload handed to the form relay.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

impl FormDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
            FormField::Phone => self.phone.as_deref().unwrap_or_default(),
            FormField::Attachment => self.attachment.as_deref().unwrap_or_default(),
        }
    }

    /// Writes a field. Blank optional fields are stored as `None`.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
            FormField::Phone => self.phone = non_blank(value),
            FormField::Attachment => self.attachment = non_blank(value),
        }
    }

    pub fn submission(&self) -> Result<ContactSubmission, FormError> {
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            if self.value(field).trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            phone: self.phone.as_deref().and_then(|value| non_blank(value.to_string())),
            attachment: self.attachment.clone(),
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Sent => Some("Thank you for your message! I'll get back to you soon."),
            Self::Failed(reason) => Some(reason),
        }
    }
}
