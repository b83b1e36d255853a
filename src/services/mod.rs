mod audit_log_store;
pub mod data_stores;
mod team_store;
mod user_store;

pub use audit_log_store::*;
pub use team_store::*;
pub use user_store::*;
