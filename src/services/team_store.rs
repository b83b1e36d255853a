use std::collections::{BTreeMap, HashSet};

use uuid::Uuid;

use crate::domain::{
    has_permission, Capability, Member, MemberId, MemberRegistry, Role,
    RoleAssignmentTable, TeamEvent, TeamSnapshot, TeamStoreError,
};
use crate::services::data_stores::{HashmapRoleTable, VecMemberRegistry};

pub type MemberRegistryType = Box<dyn MemberRegistry>;
pub type RoleTableType = Box<dyn RoleAssignmentTable>;
pub type Subscriber = Box<dyn FnMut(&TeamEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl Default for SubscriptionId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AsRef<Uuid> for SubscriptionId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

/// Team roster for one session: the acting user's own role, the members,
/// and the role assigned to each member.
///
/// All mutation goes through these methods. Every operation either
/// commits fully or returns an error without touching state, and
/// subscribers are called synchronously after each committed change.
///
/// The store enforces consistency, not authorization. In particular
/// [`TeamStore::set_member_role`] does not check that the acting user holds
/// [`Capability::Manage`]; callers gate their controls with
/// [`TeamStore::has_permission`]. A boundary exposed to untrusted callers
/// needs its own check before delegating here.
pub struct TeamStore {
    user_role: Role,
    registry: MemberRegistryType,
    roles: RoleTableType,
    highest_member_id: Option<MemberId>,
    /// Identities removed this session. They may not come back until reset.
    retired_ids: HashSet<MemberId>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl Default for TeamStore {
    fn default() -> Self {
        Self::new(
            Box::new(VecMemberRegistry::default()),
            Box::new(HashmapRoleTable::default()),
        )
    }
}

impl TeamStore {
    /// Expects empty backing stores.
    pub fn new(registry: MemberRegistryType, roles: RoleTableType) -> Self {
        Self {
            user_role: Role::default(),
            registry,
            roles,
            highest_member_id: None,
            retired_ids: HashSet::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn user_role(&self) -> Role {
        self.user_role
    }

    #[tracing::instrument(name = "Setting session role", skip(self))]
    pub fn set_user_role(&mut self, role: Role) {
        let previous = self.user_role;
        self.user_role = role;
        self.notify(TeamEvent::UserRoleChanged {
            previous,
            current: role,
        });
    }

    #[tracing::instrument(
        name = "Adding team member",
        skip_all,
        fields(member_id = %member.id)
    )]
    pub fn add_member(&mut self, member: Member) -> Result<(), TeamStoreError> {
        let id = member.id;
        if self.retired_ids.contains(&id) {
            tracing::debug!("member ID was retired earlier in this session");
            return Err(TeamStoreError::DuplicateIdentity(id));
        }
        self.registry.add(member.clone())?;
        self.roles.set_role(id, Role::Viewer);
        self.highest_member_id = self.highest_member_id.max(Some(id));

        tracing::debug!("member added with default role");
        self.notify(TeamEvent::MemberAdded(member));
        Ok(())
    }

    /// Removes the member and its role assignment, and retires the
    /// identity for the rest of the session. Removing an unknown identity
    /// changes nothing and returns `None`.
    #[tracing::instrument(name = "Removing team member", skip(self))]
    pub fn remove_member(&mut self, id: MemberId) -> Option<Member> {
        let removed = self.registry.remove(&id);
        let had_role = self.roles.is_assigned(&id);
        self.roles.remove(&id);

        match removed {
            Some(member) => {
                self.retired_ids.insert(id);
                tracing::debug!(had_role, "member removed");
                self.notify(TeamEvent::MemberRemoved(member.clone()));
                Some(member)
            }
            None => {
                tracing::debug!("no member with this ID, nothing removed");
                None
            }
        }
    }

    #[tracing::instrument(name = "Setting member role", skip(self))]
    pub fn set_member_role(
        &mut self,
        id: MemberId,
        role: Role,
    ) -> Result<(), TeamStoreError> {
        if !self.registry.contains(&id) {
            return Err(TeamStoreError::UnknownMember(id));
        }

        let previous = self.roles.get_role(&id);
        self.roles.set_role(id, role);
        self.notify(TeamEvent::MemberRoleChanged {
            id,
            previous,
            current: role,
        });
        Ok(())
    }

    pub fn get_member_role(&self, id: MemberId) -> Role {
        self.roles.get_role(&id)
    }

    /// Checks the acting user's role, not any member's.
    pub fn has_permission(&self, capability: Capability) -> bool {
        has_permission(self.user_role, capability)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.registry.get(&id)
    }

    pub fn members(&self) -> &[Member] {
        self.registry.members()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// An identity never handed out or added earlier in this session,
    /// snapshots applied along the way included.
    pub fn next_member_id(&self) -> MemberId {
        match self.highest_member_id {
            Some(id) => id.next(),
            None => MemberId::new(1),
        }
    }

    /// Back to an empty roster with the acting role set to viewer. This
    /// starts a new session, so retired identities become usable again.
    /// Subscriptions survive the reset.
    #[tracing::instrument(name = "Resetting team store", skip_all)]
    pub fn reset(&mut self) {
        self.clear_state();
        self.highest_member_id = None;
        self.retired_ids.clear();
        self.notify(TeamEvent::Reset);
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&TeamEvent) + 'static,
    {
        let id = SubscriptionId::default();
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn snapshot(&self) -> TeamSnapshot {
        TeamSnapshot {
            user_role: self.user_role,
            members: self.registry.members().to_vec(),
            roles: self
                .roles
                .assignments()
                .into_iter()
                .map(|(id, role)| (*id.as_ref(), role))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    /// Replaces the whole team state within the current session. Members
    /// without an entry in `roles` get the default role, and current
    /// members missing from the snapshot are retired. Fails without
    /// changing anything if the snapshot repeats or revives a retired
    /// identity, or assigns a role to an identity that is not a member.
    /// Subscribers see a single `Reset` event.
    #[tracing::instrument(name = "Applying team snapshot", skip_all)]
    pub fn apply_snapshot(
        &mut self,
        snapshot: TeamSnapshot,
    ) -> Result<(), TeamStoreError> {
        self.validate_snapshot(&snapshot)?;

        let kept: HashSet<MemberId> =
            snapshot.members.iter().map(|m| m.id).collect();
        let dropped: Vec<MemberId> = self
            .registry
            .members()
            .iter()
            .map(|m| m.id)
            .filter(|id| !kept.contains(id))
            .collect();
        self.retired_ids.extend(dropped);

        self.clear_state();
        self.user_role = snapshot.user_role;
        for member in snapshot.members {
            let id = member.id;
            self.registry.add(member)?;
            self.roles.set_role(id, Role::Viewer);
            self.highest_member_id = self.highest_member_id.max(Some(id));
        }
        for (id, role) in snapshot.roles {
            self.roles.set_role(MemberId::new(id), role);
        }

        self.notify(TeamEvent::Reset);
        Ok(())
    }

    fn clear_state(&mut self) {
        self.registry.clear();
        self.roles.clear();
        self.user_role = Role::default();
    }

    fn validate_snapshot(
        &self,
        snapshot: &TeamSnapshot,
    ) -> Result<(), TeamStoreError> {
        let mut ids = HashSet::new();
        for member in &snapshot.members {
            if !ids.insert(member.id) || self.retired_ids.contains(&member.id)
            {
                return Err(TeamStoreError::DuplicateIdentity(member.id));
            }
        }

        match snapshot
            .roles
            .keys()
            .map(|id| MemberId::new(*id))
            .find(|id| !ids.contains(id))
        {
            Some(orphan) => Err(TeamStoreError::UnknownMember(orphan)),
            None => Ok(()),
        }
    }

    fn notify(&mut self, event: TeamEvent) {
        tracing::trace!(
            ?event,
            subscribers = self.subscribers.len(),
            "notifying subscribers"
        );
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }
}
