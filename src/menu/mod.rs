//! Console menu
//!
//! Parses menu selections and turns them into registry operations and messages.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::{CommandResult, CommandStatus, MenuChoice, parse_choice};
pub use handlers::{handle_audit, handle_exit, handle_invalid, handle_list_users, handle_register};
