pub mod compass;
pub mod generation;
pub mod mentor;
pub mod question;
pub mod user;
