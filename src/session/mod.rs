//! Interactive console session
//!
//! Owns the registry for the lifetime of one run and drives the menu loop.

pub mod handler;
pub mod input;

pub use handler::run_session;
pub use input::TokenReader;
