//! Error handling
//!
//! Defines error types and handling for the console session.

pub mod handlers;
pub mod types;

pub use types::*;
