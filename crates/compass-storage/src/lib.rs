//! compass-storage
//!
//! Record persistence on top of a flat object store. [`store::ObjectStore`]
//! is the seam: S3 in production, an in-memory map for tests and local runs.
//! The repository modules own the typed JSON records and the
//! last-line-of-defense checks on what may be written.

pub mod compass;
pub mod error;
pub mod memory;
pub mod mentor_interest;
pub mod questions;
pub mod records;
pub mod s3;
pub mod store;
pub mod users;
