use std::{cell::RefCell, rc::Rc};

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use quickcheck::Arbitrary;
use team_roster::{
    domain::MemberId, AppState, Member, Role, TeamEvent, TeamStore,
};
use test_context::TestContext;

pub struct TeamFixture {
    pub store: TeamStore,
    pub events: Rc<RefCell<Vec<TeamEvent>>>,
}

impl TestContext for TeamFixture {
    fn setup() -> Self {
        let mut store = TeamStore::default();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        Self { store, events }
    }

    fn teardown(self) {}
}

impl TeamFixture {
    pub fn event_count(&self) -> usize {
        self.events.borrow().len()
    }
}

pub struct SessionFixture {
    pub state: AppState,
}

impl TestContext for SessionFixture {
    fn setup() -> Self {
        let mut state = AppState::default();
        state.login(member(100, "owner@email.com", "Owner", ""));
        state.team_store_mut().set_user_role(Role::Admin);
        for (id, email, first, last) in [
            (1, "alice@email.com", "Alice", "Smith"),
            (2, "bob@email.com", "Bob", "Jones"),
            (3, "carol@email.com", "Carol", "Lee"),
        ] {
            state
                .team_store_mut()
                .add_member(member(id, email, first, last))
                .expect("Failed to seed member");
        }
        Self { state }
    }

    fn teardown(self) {}
}

pub fn member(id: u64, email: &str, first: &str, last: &str) -> Member {
    Member::from_input(MemberId::new(id), email, first, last)
}

#[derive(Debug, Clone)]
pub struct MemberFixture(pub Member);

impl quickcheck::Arbitrary for MemberFixture {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Self {
        let id = u64::arbitrary(g) % 64;
        let email: String = SafeEmail().fake_with_rng(g);
        let first: String = FirstName().fake_with_rng(g);
        let last: String = LastName().fake_with_rng(g);
        Self(member(id, &email, &first, &last))
    }
}
