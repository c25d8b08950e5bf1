//! compass-client
//!
//! Typed client for the Compass API, with the client-side state that sits
//! around it: a keyed query cache, mutation hooks that invalidate that
//! cache on success, and a notification sink for user-visible failures.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod mutation;
pub mod mutations;
pub mod notify;
pub mod queries;
pub mod query_keys;
