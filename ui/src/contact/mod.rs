//! Contact section: form model, validation schema and the component.

mod form;
pub use form::{
    ContactField, ContactFormState, FieldErrors, FieldValidationError, FormFieldValues,
    SubmissionState,
};

mod rules;
pub use rules::{ContactRules, RulesError};

mod schema;
pub use schema::{is_valid_email, ContactSchema, Translate, ValidationMessage};

mod view;
pub use view::ContactSection;
