use secrecy::{ExposeSecret, Secret};

use super::ValidationError;
use std::hash::Hash;

/// Member email address, stored exactly as entered. Members may be added
/// without one, so any text including the empty string is accepted;
/// [`Email::validate`] is there for forms that want a syntax check.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Hash for Email {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

impl Eq for Email {}

impl Email {
    pub fn new(s: Secret<String>) -> Self {
        Self(s)
    }

    pub fn empty() -> Self {
        Self(Secret::new(String::new()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    /// Passes for the empty address and for syntactically valid ones.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let email = self.0.expose_secret();
        if email.is_empty() || validator::validate_email(email.as_str()) {
            Ok(())
        } else {
            Err(ValidationError::new("Invalid email address".to_string()))
        }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::empty()
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
