use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AuditLogEntry {
    pub fn new(
        user: impl Into<String>,
        action: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        Self::at(Utc::now(), user, action, details)
    }

    pub fn at(
        timestamp: DateTime<Utc>,
        user: impl Into<String>,
        action: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            user: user.into(),
            action: action.into(),
            details: details.filter(|d| !d.is_empty()),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
