//! Cache keys shared between queries and the mutations that invalidate them.

use crate::cache::QueryKey;

pub const COMPASS_VIEW: &str = "compassView";

/// The whole compass view family; invalidating it covers every day.
pub fn compass_view() -> QueryKey {
    QueryKey::new([COMPASS_VIEW])
}

pub fn compass_view_day(date: &str) -> QueryKey {
    QueryKey::new([COMPASS_VIEW, date])
}

pub fn users_all() -> QueryKey {
    QueryKey::new(["users", "all"])
}

pub fn mentor_questions(pillar: Option<&str>) -> QueryKey {
    match pillar {
        Some(pillar) => QueryKey::new(["mentorQuestions", pillar]),
        None => QueryKey::new(["mentorQuestions"]),
    }
}
