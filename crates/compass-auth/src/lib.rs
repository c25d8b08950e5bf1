//! compass-auth
//!
//! Bearer-token authentication: JWT issuance and validation.

pub mod error;
pub mod jwt;
