use std::collections::{HashSet, VecDeque};

use chrono::NaiveDate;

use crate::domain::AuditLogEntry;

pub const DEFAULT_AUDIT_LOG_CAPACITY: usize = 500;

/// Audit entries, newest first. Once `capacity` is reached the oldest
/// entry is dropped for every new one.
pub struct AuditLogStore {
    logs: VecDeque<AuditLogEntry>,
    capacity: usize,
}

impl Default for AuditLogStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_AUDIT_LOG_CAPACITY)
    }
}

impl AuditLogStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Records an entry stamped with the current time.
    pub fn add_log(
        &mut self,
        user: impl Into<String>,
        action: impl Into<String>,
        details: Option<String>,
    ) -> &AuditLogEntry {
        self.push_entry(AuditLogEntry::new(user, action, details))
    }

    pub fn push_entry(&mut self, entry: AuditLogEntry) -> &AuditLogEntry {
        if self.logs.len() == self.capacity {
            if let Some(dropped) = self.logs.pop_back() {
                tracing::trace!(
                    action = %dropped.action,
                    "audit log full, dropping oldest entry"
                );
            }
        }
        self.logs.push_front(entry);
        &self.logs[0]
    }

    pub fn logs(&self) -> impl Iterator<Item = &AuditLogEntry> {
        self.logs.iter()
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Distinct actions, newest first.
    pub fn action_types(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.logs
            .iter()
            .map(|entry| entry.action.as_str())
            .filter(|action| seen.insert(*action))
            .collect()
    }

    /// Entries matching `action` and falling on `date`. `None` matches
    /// anything.
    pub fn filter(
        &self,
        action: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Vec<&AuditLogEntry> {
        self.logs
            .iter()
            .filter(|entry| action.map_or(true, |a| entry.action == a))
            .filter(|entry| date.map_or(true, |d| entry.date() == d))
            .collect()
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }

    /// Replaces the log with `entries`, given newest first. Entries past
    /// capacity are dropped from the old end.
    pub fn replace(&mut self, entries: Vec<AuditLogEntry>) {
        self.logs = entries.into_iter().take(self.capacity).collect();
    }
}
