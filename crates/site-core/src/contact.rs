//! Contact form model.
//!
//! The page collects a message and acknowledges it. Where the message goes
//! is up to the integrator: implement [`ContactSink`] to forward it.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! We'll get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subject {
    General,
    Sales,
    Support,
    Partnership,
    Demo,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::General,
        Subject::Sales,
        Subject::Support,
        Subject::Partnership,
        Subject::Demo,
        Subject::Other,
    ];

    /// Option value as submitted by the form.
    pub fn value(self) -> &'static str {
        match self {
            Subject::General => "general",
            Subject::Sales => "sales",
            Subject::Support => "support",
            Subject::Partnership => "partnership",
            Subject::Demo => "demo",
            Subject::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::General => "General Inquiry",
            Subject::Sales => "Sales",
            Subject::Support => "Technical Support",
            Subject::Partnership => "Partnership",
            Subject::Demo => "Request a Demo",
            Subject::Other => "Other",
        }
    }
}

impl FromStr for Subject {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.value() == s.trim())
            .ok_or_else(|| ParseError::unknown("subject", s))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Subject,
        Field::Message,
    ];

    /// The input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Company)
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ParseError::unknown("form field", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.name())]
    Missing(Field),
    #[error("`{0}` is not an email address")]
    InvalidEmail(String),
    #[error(transparent)]
    Subject(#[from] ParseError),
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

/// A validated submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub subject: Subject,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Required fields in form order, first failure wins.
    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        for field in Field::ALL {
            if field.is_required() && self.get(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }
        let company = self.company.trim();
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            subject: self.subject.parse()?,
            message: self.message.trim().to_string(),
        })
    }
}

/// The same loose check a browser applies to `type="email"`.
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Where validated messages go.
pub trait ContactSink {
    /// Returns the acknowledgement to show the sender.
    fn submit(&mut self, message: ContactMessage) -> Result<String, FormError>;
}

/// Accepts everything and forwards nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcknowledgeOnly;

impl ContactSink for AcknowledgeOnly {
    fn submit(&mut self, message: ContactMessage) -> Result<String, FormError> {
        log::info!(
            "[contact] message from {} about {}",
            message.name,
            message.subject.value()
        );
        Ok(ACKNOWLEDGEMENT.to_string())
    }
}
