use crate::domain::{Member, MemberId, MemberRegistry, TeamStoreError};

/// Member registry backed by a `Vec`, which keeps insertion order for
/// display. Rosters are small, so lookups scan linearly.
#[derive(Default)]
pub struct VecMemberRegistry {
    members: Vec<Member>,
}

impl VecMemberRegistry {
    fn position(&self, id: &MemberId) -> Option<usize> {
        self.members.iter().position(|m| &m.id == id)
    }
}

impl MemberRegistry for VecMemberRegistry {
    fn add(&mut self, member: Member) -> Result<(), TeamStoreError> {
        if self.contains(&member.id) {
            return Err(TeamStoreError::DuplicateIdentity(member.id));
        }

        self.members.push(member);
        Ok(())
    }

    fn remove(&mut self, id: &MemberId) -> Option<Member> {
        let index = self.position(id)?;
        Some(self.members.remove(index))
    }

    fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    fn members(&self) -> &[Member] {
        &self.members
    }

    fn clear(&mut self) {
        self.members.clear();
    }
}
