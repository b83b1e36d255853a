use color_eyre::eyre::Result;
use tracing::Level;

use team_roster::{
    domain::MemberId,
    utils::tracing::{init_tracing, log_error_chain},
    AppState, Capability, Member, Role, TeamEvent,
};

fn main() -> Result<()> {
    init_tracing()?;

    let mut state = AppState::default();
    state.team_store_mut().subscribe(|event: &TeamEvent| {
        tracing::info!(?event, "team changed");
    });

    state.login(Member::from_input(
        MemberId::new(1),
        "alice@email.com",
        "Alice",
        "Smith",
    ));
    state.update_onboard_status(true);
    state.team_store_mut().set_user_role(Role::Admin);

    for (email, first, last, role) in [
        ("alice@email.com", "Alice", "Smith", Role::Admin),
        ("bob@email.com", "Bob", "Jones", Role::Manager),
        ("carol@email.com", "Carol", "Lee", Role::Viewer),
    ] {
        let team = state.team_store_mut();
        let member =
            Member::from_input(team.next_member_id(), email, first, last);
        member.validate()?;
        let id = member.id;
        team.add_member(member)?;
        team.set_member_role(id, role)?;
    }

    if let Err(e) = state.team_store_mut().add_member(Member::from_input(
        MemberId::new(2),
        "bobby@email.com",
        "Bobby",
        "",
    )) {
        log_error_chain(&e, Level::WARN);
    }

    let team = state.team_store();
    if team.has_permission(Capability::Manage) {
        tracing::info!("acting user may manage the team");
    }
    let carol = team
        .members()
        .iter()
        .find(|m| m.first_name.as_ref() == "Carol");
    if let Some(carol) = carol.cloned() {
        state.team_store_mut().set_member_role(carol.id, Role::Manager)?;
        state.audit_log_store_mut().add_log(
            "Alice",
            "Changed role",
            Some(format!("{} to manager", carol.display_name())),
        );
    }

    state.log_snapshot();
    state.logout();
    state.log_snapshot();

    Ok(())
}
