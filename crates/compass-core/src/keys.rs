//! Object key conventions.
//!
//! Pure string functions. These define the canonical layout of records in
//! the Compass object store, whichever backend is configured.

use uuid::Uuid;

use crate::error::CoreError;

pub const QUESTIONS_PREFIX: &str = "questions/";

pub const USERS_PREFIX: &str = "users/";

pub const MENTOR_INTEREST_PREFIX: &str = "mentor-interest/";

pub fn question(id: Uuid) -> String {
    format!("questions/{id}.json")
}

pub fn user(id: &str) -> Result<String, CoreError> {
    Ok(format!("users/{}.json", segment(id)?))
}

pub fn compass_entry(sub: &str, date: &str) -> Result<String, CoreError> {
    Ok(format!("compass/{}/{}.json", segment(sub)?, segment(date)?))
}

pub fn compass_prefix(sub: &str) -> Result<String, CoreError> {
    Ok(format!("compass/{}/", segment(sub)?))
}

pub fn mentor_interest(id: Uuid) -> String {
    format!("mentor-interest/{id}.json")
}

/// Reject caller-supplied path segments that could escape their prefix.
fn segment(value: &str) -> Result<&str, CoreError> {
    if value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(['/', '\\'])
        || value.chars().any(char::is_control)
    {
        return Err(CoreError::InvalidId(value.to_string()));
    }
    Ok(value)
}
