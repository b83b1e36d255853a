mod hashmap_role_table;
mod vec_member_registry;

pub use hashmap_role_table::*;
pub use vec_member_registry::*;
