use std::{cell::RefCell, rc::Rc};

use crate::helpers::{member, SessionFixture};
use serde_json::{json, Value};
use team_roster::{domain::MemberId, AppState, Capability, Role, TeamEvent};
use test_context::test_context;

#[test_context(SessionFixture)]
#[test]
fn should_reset_everything_on_logout(ctx: &mut SessionFixture) {
    let state = &mut ctx.state;
    state
        .team_store_mut()
        .set_member_role(MemberId::new(1), Role::Admin)
        .unwrap();
    state.team_store_mut().remove_member(MemberId::new(2));
    state
        .team_store_mut()
        .add_member(member(4, "", "Dave", ""))
        .unwrap();
    state.audit_log_store_mut().add_log("Owner", "Added member", None);
    state.update_onboard_status(true);

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    state
        .team_store_mut()
        .subscribe(move |event| sink.borrow_mut().push(event.clone()));

    state.logout();

    let team = state.team_store();
    assert!(team.members().is_empty());
    assert!(team.snapshot().roles.is_empty());
    assert_eq!(team.user_role(), Role::Viewer);
    assert!(!team.has_permission(Capability::Edit));
    assert!(state.audit_log_store().is_empty());
    assert!(state.user_store().user().is_none());
    assert!(!state.is_authenticated());
    assert!(!state.is_onboarded());
    assert_eq!(*events.borrow(), vec![TeamEvent::Reset]);
}

#[test_context(SessionFixture)]
#[test]
fn should_hand_out_fresh_ids(ctx: &mut SessionFixture) {
    let team = ctx.state.team_store_mut();
    team.remove_member(MemberId::new(3));

    let id = team.next_member_id();
    assert_eq!(id, MemberId::new(4));
    team.add_member(member(*id.as_ref(), "dave@email.com", "Dave", ""))
        .unwrap();
    assert_eq!(team.next_member_id(), MemberId::new(5));
}

#[test_context(SessionFixture)]
#[test]
fn should_serialize_snapshot(ctx: &mut SessionFixture) {
    ctx.state
        .team_store_mut()
        .set_member_role(MemberId::new(2), Role::Manager)
        .unwrap();
    ctx.state
        .audit_log_store_mut()
        .add_log("Owner", "Changed role", Some("Bob to manager".into()));

    let schema = json!({
      "$schema": "http://json-schema.org/draft-07/schema#",
      "type": "object",
      "properties": {
        "team": {
          "type": "object",
          "properties": {
            "userRole": { "enum": ["admin", "manager", "viewer"] },
            "members": {
              "type": "array",
              "items": {
                "type": "object",
                "properties": {
                  "id": { "type": "integer", "minimum": 0 },
                  "email": { "type": "string" },
                  "firstName": { "type": "string", "maxLength": 255 },
                  "lastName": { "type": "string", "maxLength": 255 }
                },
                "required": ["id", "email", "firstName", "lastName"]
              }
            },
            "roles": {
              "type": "object",
              "additionalProperties": { "enum": ["admin", "manager", "viewer"] }
            }
          },
          "required": ["userRole", "members", "roles"]
        },
        "auditLog": { "type": "array" },
        "user": { "type": ["object", "null"] },
        "isAuthenticated": { "type": "boolean" },
        "isOnboarded": { "type": "boolean" }
      },
      "required": ["team", "auditLog", "user", "isAuthenticated", "isOnboarded"]
    });

    let json = ctx.state.to_json().expect("Failed to serialize state");
    let body: Value = serde_json::from_str(&json).unwrap();

    assert!(
        jsonschema::is_valid(&schema, &body),
        "snapshot does not match schema: {body}"
    );
    assert_eq!(body["team"]["roles"]["2"], "manager");
    assert_eq!(body["team"]["userRole"], "admin");
    assert_eq!(body["auditLog"][0]["details"], "Bob to manager");

    let mut restored = AppState::default();
    restored.apply_json(&json).expect("Failed to restore state");
    assert_eq!(restored.snapshot(), ctx.state.snapshot());
}

#[test_context(SessionFixture)]
#[test]
fn should_keep_state_when_snapshot_is_invalid(ctx: &mut SessionFixture) {
    let before = ctx.state.snapshot();
    let duplicate = json!({
        "team": {
            "members": [{ "id": 1 }, { "id": 1 }]
        }
    })
    .to_string();
    let orphan_role = json!({
        "team": {
            "members": [{ "id": 1 }],
            "roles": { "1": "admin", "9": "manager" }
        }
    })
    .to_string();

    assert!(ctx.state.apply_json(&duplicate).is_err());
    assert!(ctx.state.apply_json(&orphan_role).is_err());
    assert_eq!(ctx.state.snapshot(), before);
}

#[test]
fn should_restore_free_form_member_fields() {
    let json = json!({
        "team": {
            "members": [
                { "id": 1, "email": "bob", "firstName": "  Alice " },
                { "id": 2 }
            ]
        }
    })
    .to_string();

    let mut state = AppState::default();
    state.apply_json(&json).expect("Free-form fields should be accepted");

    let team = state.team_store();
    assert_eq!(team.len(), 2);
    assert_eq!(
        team.member(MemberId::new(1)).map(|m| m.display_name()),
        Some("  Alice ".to_owned())
    );

    let body: Value =
        serde_json::from_str(&state.to_json().unwrap()).unwrap();
    assert_eq!(body["team"]["members"][0]["email"], "bob");
    assert_eq!(body["team"]["members"][1]["email"], "");
}
