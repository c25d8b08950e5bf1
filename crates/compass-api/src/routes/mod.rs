pub mod compass_view;
pub mod generation;
pub mod health;
pub mod mentor_interest;
pub mod questions;
pub mod users;
