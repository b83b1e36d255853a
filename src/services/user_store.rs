use crate::domain::Member;

/// Profile of the signed-in user, if any.
#[derive(Default)]
pub struct UserStore {
    user: Option<Member>,
}

impl UserStore {
    pub fn set_user(&mut self, user: Member) {
        self.user = Some(user);
    }

    pub fn user(&self) -> Option<&Member> {
        self.user.as_ref()
    }

    pub fn clear(&mut self) {
        self.user = None;
    }
}
