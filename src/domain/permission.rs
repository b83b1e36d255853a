use super::{Capability, Role};

/// Permission policy.
///
/// | role    | view | edit | manage |
/// |---------|------|------|--------|
/// | admin   | yes  | yes  | yes    |
/// | manager | yes  | yes  | no     |
/// | viewer  | yes  | no   | no     |
pub fn has_permission(role: Role, capability: Capability) -> bool {
    match (role, capability) {
        (Role::Admin, _) => true,
        (Role::Manager, Capability::Manage) => false,
        (Role::Manager, _) => true,
        (Role::Viewer, Capability::View) => true,
        (Role::Viewer, _) => false,
    }
}

/// Same policy for untyped input, e.g. values read back from a cache.
/// Unknown roles or capabilities are denied.
pub fn is_permitted(role: &str, capability: &str) -> bool {
    match (role.parse::<Role>(), capability.parse::<Capability>()) {
        (Ok(role), Ok(capability)) => has_permission(role, capability),
        _ => false,
    }
}
