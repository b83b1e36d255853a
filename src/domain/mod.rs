mod audit_log;
mod data_stores;
mod email;
mod error;
mod member;
mod member_id;
mod member_name;
mod permission;
mod role;
mod snapshot;
mod team_event;

pub use audit_log::*;
pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use member::*;
pub use member_id::*;
pub use member_name::*;
pub use permission::*;
pub use role::*;
pub use snapshot::*;
pub use team_event::*;
