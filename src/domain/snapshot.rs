use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AuditLogEntry, Member, Role};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    #[serde(default)]
    pub user_role: Role,
    #[serde(default)]
    pub members: Vec<Member>,
    /// Keyed by member ID.
    #[serde(default)]
    pub roles: BTreeMap<u64, Role>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    #[serde(default)]
    pub team: TeamSnapshot,
    #[serde(default)]
    pub audit_log: Vec<AuditLogEntry>,
    #[serde(default)]
    pub user: Option<Member>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_onboarded: bool,
}
