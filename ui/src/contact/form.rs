//! Contact form model: submitted values, per-field errors and the two-state
//! submission lifecycle.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::schema::ContactSchema;

/// Raw values read from the form on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFieldValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFieldValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// The form's fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Field path as used for the input `name`/`id` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field failed one rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: ContactField,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: ContactField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Inline error messages keyed by field, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    /// Collapse schema issues, keeping the first message reported for each field.
    pub fn from_issues(issues: impl IntoIterator<Item = FieldValidationError>) -> Self {
        let mut map = BTreeMap::new();
        for issue in issues {
            map.entry(issue.field).or_insert(issue.message);
        }
        Self(map)
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    PendingInput,
    SubmittedSuccess,
}

/// Component-local state of the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub state: SubmissionState,
    pub errors: FieldErrors,
}

impl ContactFormState {
    /// Validate `values` and move to the resulting state. Errors are replaced
    /// wholesale on every attempt.
    pub fn submit(&mut self, values: &FormFieldValues, schema: &ContactSchema) -> SubmissionState {
        match schema.check(values) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.state = SubmissionState::SubmittedSuccess;
                // Nothing is delivered anywhere; only record that it happened.
                tracing::info!(
                    name_len = values.name.chars().count(),
                    message_len = values.message.chars().count(),
                    "contact form accepted"
                );
            }
            Err(errors) => {
                tracing::debug!(invalid_fields = errors.len(), "contact form rejected");
                self.errors = errors;
            }
        }
        self.state
    }

    /// `submit`, clearing `values` when the submission is accepted. Rejected
    /// values are left as typed so the user can correct them.
    pub fn submit_and_clear(
        &mut self,
        values: &mut FormFieldValues,
        schema: &ContactSchema,
    ) -> SubmissionState {
        let outcome = self.submit(values, schema);
        if outcome == SubmissionState::SubmittedSuccess {
            *values = FormFieldValues::default();
        }
        outcome
    }

    /// Leave the success view. Previous values are not restored.
    pub fn reset(&mut self) {
        self.state = SubmissionState::PendingInput;
        self.errors = FieldErrors::default();
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::SubmittedSuccess
    }
}
