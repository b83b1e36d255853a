use super::{Member, MemberId, Role};

/// Published to team store subscribers after a mutation commits.
#[derive(Debug, Clone, PartialEq)]
pub enum TeamEvent {
    UserRoleChanged { previous: Role, current: Role },
    MemberAdded(Member),
    MemberRemoved(Member),
    MemberRoleChanged {
        id: MemberId,
        previous: Role,
        current: Role,
    },
    Reset,
}
