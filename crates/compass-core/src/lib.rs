//! compass-core
//!
//! Pure domain types, the input validation boundary, and object key
//! conventions. No I/O here; this is the shared vocabulary of Compass.

pub mod error;
pub mod keys;
pub mod models;
pub mod validation;
