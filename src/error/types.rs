//! Error types
//!
//! The registry itself cannot fail; these cover the console session around it.

use std::fmt;
use std::io;

/// Errors raised while running the interactive session
#[derive(Debug)]
pub enum SessionError {
    Io(io::Error),
    Config(config::ConfigError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(e) => write!(f, "Console I/O error: {}", e),
            SessionError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(e) => Some(e),
            SessionError::Config(e) => Some(e),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(error: io::Error) -> Self {
        SessionError::Io(error)
    }
}

impl From<config::ConfigError> for SessionError {
    fn from(error: config::ConfigError) -> Self {
        SessionError::Config(error)
    }
}
