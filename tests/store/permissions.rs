use team_roster::domain::{has_permission, is_permitted};
use team_roster::{Capability, Role, TeamStore};

#[test]
fn policy_matches_table_for_every_combination() {
    let table = [
        ("admin", [true, true, true]),
        ("manager", [true, true, false]),
        ("viewer", [true, false, false]),
    ];

    for (role_text, expected) in table {
        let role: Role = role_text.parse().expect(role_text);
        let mut store = TeamStore::default();
        store.set_user_role(role);

        for (capability, allowed) in Capability::ALL.into_iter().zip(expected) {
            assert_eq!(has_permission(role, capability), allowed);
            assert_eq!(store.has_permission(capability), allowed);
            assert_eq!(is_permitted(role_text, capability.as_str()), allowed);
        }
    }
}

#[test]
fn unknown_roles_are_denied_everything() {
    let unknown = [
        "owner", "superuser", "", "ADMIN", "Admin", "Manager", "Viewer",
    ];
    for role in unknown {
        for capability in Capability::ALL {
            assert!(
                !is_permitted(role, capability.as_str()),
                "{role:?} should not be allowed to {capability}"
            );
        }
    }
}
