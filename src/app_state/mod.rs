use color_eyre::eyre::{Result, WrapErr};

use crate::domain::{AppSnapshot, Member, TeamStoreError};
use crate::services::{AuditLogStore, TeamStore, UserStore};
use crate::utils::constants::AUDIT_LOG_CAPACITY;

/// Root of the session state. Built once when the session starts and
/// handed to whatever needs it; there is no global instance.
pub struct AppState {
    team_store: TeamStore,
    audit_log_store: AuditLogStore,
    user_store: UserStore,
    is_authenticated: bool,
    is_onboarded: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            TeamStore::default(),
            AuditLogStore::with_capacity(*AUDIT_LOG_CAPACITY),
        )
    }
}

impl AppState {
    pub fn new(team_store: TeamStore, audit_log_store: AuditLogStore) -> Self {
        Self {
            team_store,
            audit_log_store,
            user_store: UserStore::default(),
            is_authenticated: false,
            is_onboarded: false,
        }
    }

    pub fn team_store(&self) -> &TeamStore {
        &self.team_store
    }

    pub fn team_store_mut(&mut self) -> &mut TeamStore {
        &mut self.team_store
    }

    pub fn audit_log_store(&self) -> &AuditLogStore {
        &self.audit_log_store
    }

    pub fn audit_log_store_mut(&mut self) -> &mut AuditLogStore {
        &mut self.audit_log_store
    }

    pub fn user_store(&self) -> &UserStore {
        &self.user_store
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn is_onboarded(&self) -> bool {
        self.is_onboarded
    }

    #[tracing::instrument(
        name = "Logging in",
        skip_all,
        fields(user_id = %user.id)
    )]
    pub fn login(&mut self, user: Member) {
        self.user_store.set_user(user);
        self.is_authenticated = true;
    }

    /// Clears every store back to its empty defaults. Team subscribers
    /// receive a single `Reset` event once everything is cleared.
    #[tracing::instrument(name = "Logging out", skip_all)]
    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.is_onboarded = false;
        self.user_store.clear();
        self.audit_log_store.clear();
        self.team_store.reset();
    }

    pub fn update_onboard_status(&mut self, status: bool) {
        self.is_onboarded = status;
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            team: self.team_store.snapshot(),
            audit_log: self.audit_log_store.logs().cloned().collect(),
            user: self.user_store.user().cloned(),
            is_authenticated: self.is_authenticated,
            is_onboarded: self.is_onboarded,
        }
    }

    /// Restores every store from `snapshot`. The team is validated first,
    /// so an inconsistent snapshot leaves the whole state untouched.
    #[tracing::instrument(name = "Applying app snapshot", skip_all)]
    pub fn apply_snapshot(
        &mut self,
        snapshot: AppSnapshot,
    ) -> Result<(), TeamStoreError> {
        self.team_store.apply_snapshot(snapshot.team)?;
        self.audit_log_store.replace(snapshot.audit_log);
        match snapshot.user {
            Some(user) => self.user_store.set_user(user),
            None => self.user_store.clear(),
        }
        self.is_authenticated = snapshot.is_authenticated;
        self.is_onboarded = snapshot.is_onboarded;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .wrap_err("failed to serialize app snapshot")
    }

    pub fn apply_json(&mut self, json: &str) -> Result<()> {
        let snapshot: AppSnapshot = serde_json::from_str(json)
            .wrap_err("failed to parse app snapshot")?;
        self.apply_snapshot(snapshot)
            .wrap_err("app snapshot is inconsistent")
    }

    /// Dumps the current snapshot at info level.
    pub fn log_snapshot(&self) {
        match self.to_json() {
            Ok(json) => tracing::info!("app state snapshot:\n{json}"),
            Err(e) => tracing::warn!(error = ?e, "could not render app state"),
        }
    }
}
