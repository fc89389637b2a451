//! Error handlers
//!
//! Reports session errors and maps them to process exit codes.

use crate::error::types::SessionError;
use log::error;

/// Log a session error
pub fn handle_error(err: &SessionError) {
    error!("Credential registry error: {}", err);
}

/// Process exit code for a session error
pub fn exit_code(err: &SessionError) -> i32 {
    match err {
        SessionError::Io(_) => 1,
        SessionError::Config(_) => 2,
    }
}
