//! compass-bedrock
//!
//! Text generation for the compass view: prompt assembly, the
//! [`generator::Generator`] seam, and its Bedrock Converse implementation.

pub mod converse;
pub mod error;
pub mod generator;
pub mod prompts;
pub mod reflection;
