use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::{Email, MemberId, MemberName, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MemberRecord", into = "MemberRecord")]
pub struct Member {
    pub id: MemberId,
    pub email: Email,
    pub first_name: MemberName,
    pub last_name: MemberName,
}

impl Member {
    pub fn new(
        id: MemberId,
        email: Email,
        first_name: MemberName,
        last_name: MemberName,
    ) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
        }
    }

    /// Builds a member from raw form input, keeping every field as given.
    pub fn from_input(
        id: MemberId,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Self {
        Self {
            id,
            email: Email::new(Secret::new(email.to_owned())),
            first_name: MemberName::new(first_name.to_owned()),
            last_name: MemberName::new(last_name.to_owned()),
        }
    }

    /// Optional form check: email syntax and name lengths. The store
    /// accepts members whether or not they pass.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.email.validate()?;
        self.first_name.validate()?;
        self.last_name.validate()
    }

    /// First name if set, otherwise the email address.
    pub fn display_name(&self) -> String {
        if self.first_name.is_empty() {
            self.email.as_ref().expose_secret().to_owned()
        } else {
            self.first_name.as_ref().to_owned()
        }
    }
}

/// Plain serialized form of a [`Member`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub id: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl From<Member> for MemberRecord {
    fn from(member: Member) -> Self {
        Self {
            id: *member.id.as_ref(),
            email: member.email.as_ref().expose_secret().to_owned(),
            first_name: member.first_name.as_ref().to_owned(),
            last_name: member.last_name.as_ref().to_owned(),
        }
    }
}

impl From<MemberRecord> for Member {
    fn from(record: MemberRecord) -> Self {
        Member::from_input(
            MemberId::new(record.id),
            &record.email,
            &record.first_name,
            &record.last_name,
        )
    }
}
