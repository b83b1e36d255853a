use std::collections::HashMap;

use crate::domain::{MemberId, Role, RoleAssignmentTable};

#[derive(Default)]
pub struct HashmapRoleTable {
    roles: HashMap<MemberId, Role>,
}

impl RoleAssignmentTable for HashmapRoleTable {
    fn set_role(&mut self, id: MemberId, role: Role) {
        self.roles.insert(id, role);
    }

    fn get_role(&self, id: &MemberId) -> Role {
        self.roles.get(id).copied().unwrap_or_default()
    }

    fn is_assigned(&self, id: &MemberId) -> bool {
        self.roles.contains_key(id)
    }

    fn remove(&mut self, id: &MemberId) {
        self.roles.remove(id);
    }

    fn assignments(&self) -> Vec<(MemberId, Role)> {
        let mut assignments: Vec<(MemberId, Role)> =
            self.roles.iter().map(|(id, role)| (*id, *role)).collect();
        assignments.sort_by_key(|(id, _)| *id);
        assignments
    }

    fn len(&self) -> usize {
        self.roles.len()
    }

    fn clear(&mut self) {
        self.roles.clear();
    }
}
