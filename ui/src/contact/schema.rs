//! Contact form validation schema.
//!
//! The schema is a pure function of its rules, a translator and the submitted
//! values. It reports every failed rule, in rule order, as `(field, message)`
//! pairs; `check` collapses them to the first message per field.
//!
//! Messages are produced through a `Translate` function so tests (or another
//! UI layer) can validate without touching the global Fluent loader.

use once_cell::sync::Lazy;
use regex::Regex;

use super::form::{ContactField, FieldErrors, FieldValidationError, FormFieldValues};
use super::rules::ContactRules;
use crate::t;

// local@domain.tld: dot-separated local atoms, no whitespace, alphabetic TLD
// of two or more letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_%+\-]+(?:\.[A-Za-z0-9_%+\-]+)*@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email pattern compiles")
});

/// Every message the schema can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationMessage {
    NameRequired,
    NameTooLong,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
    MessageTooShort,
    MessageTooLong,
}

impl ValidationMessage {
    pub fn field(self) -> ContactField {
        match self {
            Self::NameRequired | Self::NameTooLong => ContactField::Name,
            Self::EmailRequired | Self::EmailInvalid => ContactField::Email,
            Self::MessageRequired | Self::MessageTooShort | Self::MessageTooLong => {
                ContactField::Message
            }
        }
    }

    /// Fluent message id.
    pub fn key(self) -> &'static str {
        match self {
            Self::NameRequired => "contact-error-name-required",
            Self::NameTooLong => "contact-error-name-too-long",
            Self::EmailRequired => "contact-error-email-required",
            Self::EmailInvalid => "contact-error-email-invalid",
            Self::MessageRequired => "contact-error-message-required",
            Self::MessageTooShort => "contact-error-message-too-short",
            Self::MessageTooLong => "contact-error-message-too-long",
        }
    }

    /// Message in the active locale.
    pub fn localized(self) -> String {
        match self {
            Self::NameRequired => t!("contact-error-name-required"),
            Self::NameTooLong => t!("contact-error-name-too-long"),
            Self::EmailRequired => t!("contact-error-email-required"),
            Self::EmailInvalid => t!("contact-error-email-invalid"),
            Self::MessageRequired => t!("contact-error-message-required"),
            Self::MessageTooShort => t!("contact-error-message-too-short"),
            Self::MessageTooLong => t!("contact-error-message-too-long"),
        }
    }
}

pub type Translate = fn(ValidationMessage) -> String;

#[derive(Debug, Clone, Copy)]
pub struct ContactSchema {
    rules: ContactRules,
    translate: Translate,
}

impl ContactSchema {
    pub fn new(rules: ContactRules, translate: Translate) -> Self {
        Self { rules, translate }
    }

    /// Embedded rules with messages from the active locale.
    pub fn localized() -> Self {
        crate::i18n::init();
        Self::new(ContactRules::embedded(), ValidationMessage::localized)
    }

    /// Every failed rule, in field then rule order.
    pub fn validate(&self, values: &FormFieldValues) -> Result<(), Vec<FieldValidationError>> {
        let mut failed = Vec::new();
        self.name_rules(&values.name, &mut failed);
        self.email_rules(&values.email, &mut failed);
        self.message_rules(&values.message, &mut failed);

        if failed.is_empty() {
            return Ok(());
        }
        Err(failed
            .into_iter()
            .map(|msg| FieldValidationError::new(msg.field(), (self.translate)(msg)))
            .collect())
    }

    /// `validate`, collapsed to the inline errors the form renders.
    pub fn check(&self, values: &FormFieldValues) -> Result<(), FieldErrors> {
        self.validate(values).map_err(FieldErrors::from_issues)
    }

    fn name_rules(&self, name: &str, failed: &mut Vec<ValidationMessage>) {
        let name = name.trim();
        if name.is_empty() {
            failed.push(ValidationMessage::NameRequired);
        }
        if name.chars().count() > self.rules.name_max_len {
            failed.push(ValidationMessage::NameTooLong);
        }
    }

    fn email_rules(&self, email: &str, failed: &mut Vec<ValidationMessage>) {
        let email = email.trim();
        if email.is_empty() {
            failed.push(ValidationMessage::EmailRequired);
        }
        if !is_valid_email(email) {
            failed.push(ValidationMessage::EmailInvalid);
        }
    }

    fn message_rules(&self, message: &str, failed: &mut Vec<ValidationMessage>) {
        let message = message.trim();
        let len = message.chars().count();
        if message.is_empty() {
            failed.push(ValidationMessage::MessageRequired);
        }
        if len < self.rules.message_min_len {
            failed.push(ValidationMessage::MessageTooShort);
        }
        if len > self.rules.message_max_len {
            failed.push(ValidationMessage::MessageTooLong);
        }
    }
}

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}
