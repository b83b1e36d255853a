use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;

use crate::services::DEFAULT_AUDIT_LOG_CAPACITY;

lazy_static! {
    pub static ref LOG_FILTER: String =
        load_or_default(env::LOG_FILTER_ENV_VAR, DEFAULT_LOG_FILTER);
    pub static ref AUDIT_LOG_CAPACITY: usize = set_audit_log_capacity();
}

fn load_env() {
    dotenv().ok();
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

fn set_audit_log_capacity() -> usize {
    let raw = load_or_default(env::AUDIT_LOG_CAPACITY_ENV_VAR, "");
    parse_capacity(&raw).unwrap_or(DEFAULT_AUDIT_LOG_CAPACITY)
}

fn parse_capacity(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

pub mod env {
    pub const LOG_FILTER_ENV_VAR: &str = "TEAM_ROSTER_LOG";
    pub const AUDIT_LOG_CAPACITY_ENV_VAR: &str = "AUDIT_LOG_CAPACITY";
}

pub const DEFAULT_LOG_FILTER: &str = "team_roster=debug,info";

#[test]
fn test_parse_capacity() {
    assert_eq!(parse_capacity("250"), Some(250));
    assert_eq!(parse_capacity(" 10 "), Some(10));
    assert_eq!(parse_capacity("0"), None);
    assert_eq!(parse_capacity(""), None);
    assert_eq!(parse_capacity("lots"), None);
}
