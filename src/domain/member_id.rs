use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identity of a team member. Immutable once assigned.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = id.trim().parse::<u64>().map_err(|e| {
            ValidationError::new(format!("Invalid member ID: {e}"))
        })?;
        Ok(Self(parsed))
    }

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl AsRef<u64> for MemberId {
    fn as_ref(&self) -> &u64 {
        &self.0
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_valid_ids() {
    let valid_ids = ["0", "1", "42", " 99999 "];
    for valid_id in valid_ids.iter() {
        let parsed = MemberId::parse(valid_id).expect(valid_id);
        assert_eq!(
            parsed.to_string(),
            valid_id.trim(),
            "ID does not match expected value"
        );
    }
}

#[test]
fn test_invalid_ids() {
    let invalid_id = "5e90ca28";
    let result = MemberId::parse(invalid_id);
    let error = result.expect_err(invalid_id);
    assert_eq!(
        error.as_ref(),
        "Invalid member ID: invalid digit found in string"
    );

    let error = MemberId::parse("").expect_err("empty id");
    assert_eq!(
        error.as_ref(),
        "Invalid member ID: cannot parse integer from empty string"
    );
}

#[test]
fn test_next_id() {
    assert_eq!(MemberId::new(7).next(), MemberId::new(8));
    assert_eq!(MemberId::new(u64::MAX).next(), MemberId::new(u64::MAX));
}
