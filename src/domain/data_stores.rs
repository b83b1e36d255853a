use super::{Member, MemberId, Role};
use thiserror::Error;

/// Ordered member records, keyed by identity.
pub trait MemberRegistry {
    fn add(&mut self, member: Member) -> Result<(), TeamStoreError>;
    /// Removing an absent identity is a no-op and returns `None`.
    fn remove(&mut self, id: &MemberId) -> Option<Member>;
    fn get(&self, id: &MemberId) -> Option<&Member>;
    fn contains(&self, id: &MemberId) -> bool {
        self.get(id).is_some()
    }
    /// Members in insertion order.
    fn members(&self) -> &[Member];
    fn len(&self) -> usize {
        self.members().len()
    }
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn clear(&mut self);
}

/// Identity to role mapping. Lookups of unassigned identities yield the
/// default role, [`Role::Viewer`].
pub trait RoleAssignmentTable {
    fn set_role(&mut self, id: MemberId, role: Role);
    fn get_role(&self, id: &MemberId) -> Role;
    fn is_assigned(&self, id: &MemberId) -> bool;
    /// Idempotent.
    fn remove(&mut self, id: &MemberId);
    fn assignments(&self) -> Vec<(MemberId, Role)>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn clear(&mut self);
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TeamStoreError {
    #[error("Member with ID already exists: {0}")]
    DuplicateIdentity(MemberId),
    #[error("Member with ID not found: {0}")]
    UnknownMember(MemberId),
    #[error("Invalid role: {0:?}")]
    InvalidRole(String),
}
