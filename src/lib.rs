//! Team roster state for a mobile team-management front-end: members,
//! their roles, the permission policy, an audit log and the session root
//! that owns them.

pub mod app_state;
pub mod domain;
pub mod services;
pub mod utils;

pub use app_state::AppState;
pub use domain::{Capability, Member, MemberId, Role, TeamEvent, TeamStoreError};
pub use services::TeamStore;
