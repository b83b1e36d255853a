use super::ValidationError;
use serde::{Deserialize, Serialize};

/// First or last name of a member, stored exactly as entered. May be
/// empty, since a member can be added with just an email address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberName(String);

const MAX_NAME_LENGTH: usize = 255;

impl MemberName {
    pub fn new(name: String) -> Self {
        Self(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.0.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::new(
                "Max name length is 255 characters".to_string(),
            ));
        }
        Ok(())
    }
}

impl AsRef<String> for MemberName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_names_are_kept_verbatim() {
    let names = ["".to_string(), "  Alice ".to_string(), "a".repeat(300)];
    for name in names.iter() {
        assert_eq!(MemberName::new(name.to_owned()).as_ref(), name);
    }
    assert!(MemberName::default().is_empty());
    assert!(!MemberName::new(" ".to_string()).is_empty());
}

#[test]
fn test_validate_length() {
    assert!(MemberName::new("a".repeat(255)).validate().is_ok());
    let result = MemberName::new("a".repeat(256)).validate();
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max name length is 255 characters"
    );
}
