//! Length limits for the contact form, read from the embedded
//! `assets/config/contact-rules.json`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_RULES: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/config/contact-rules.json"
));

static EMBEDDED: Lazy<ContactRules> = Lazy::new(|| {
    ContactRules::from_json(EMBEDDED_RULES).unwrap_or_else(|err| {
        tracing::warn!(%err, "embedded contact rules rejected; using defaults");
        ContactRules::default()
    })
});

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("malformed contact rules: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("name_max_len must be at least 1")]
    ZeroNameLimit,
    #[error("message_min_len ({min}) exceeds message_max_len ({max})")]
    InvertedMessageBounds { min: usize, max: usize },
}

/// Character limits applied after the "required" checks. Missing keys take
/// their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRules {
    pub name_max_len: usize,
    pub message_min_len: usize,
    pub message_max_len: usize,
}

impl Default for ContactRules {
    fn default() -> Self {
        Self {
            name_max_len: 100,
            message_min_len: 1,
            message_max_len: 5000,
        }
    }
}

impl ContactRules {
    pub fn from_json(src: &str) -> Result<Self, RulesError> {
        let rules: Self = serde_json::from_str(src)?;
        rules.checked()
    }

    /// Rules shipped with the crate (defaults if the file is unusable).
    pub fn embedded() -> Self {
        *EMBEDDED
    }

    fn checked(self) -> Result<Self, RulesError> {
        if self.name_max_len == 0 {
            return Err(RulesError::ZeroNameLimit);
        }
        if self.message_min_len > self.message_max_len {
            return Err(RulesError::InvertedMessageBounds {
                min: self.message_min_len,
                max: self.message_max_len,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_rules_parse() {
        assert!(ContactRules::from_json(EMBEDDED_RULES).is_ok());
        assert_eq!(ContactRules::embedded(), ContactRules::default());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let rules = ContactRules::from_json(r#"{ "message_max_len": 20 }"#).unwrap();
        assert_eq!(rules.message_max_len, 20);
        assert_eq!(rules.name_max_len, ContactRules::default().name_max_len);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = ContactRules::from_json(r#"{ "message_min_len": 10, "message_max_len": 5 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            RulesError::InvertedMessageBounds { min: 10, max: 5 }
        ));
    }

    #[test]
    fn zero_name_limit_is_rejected() {
        let err = ContactRules::from_json(r#"{ "name_max_len": 0 }"#).unwrap_err();
        assert!(matches!(err, RulesError::ZeroNameLimit));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = ContactRules::from_json("not json").unwrap_err();
        assert!(matches!(err, RulesError::Parse(_)));
    }
}
