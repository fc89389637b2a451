//! Module `commands`
//!
//! Defines menu selections, their parsing, and the result structure
//! returned by menu handlers.

/// A selection made at the main menu.
#[derive(Debug, PartialEq)]
pub enum MenuChoice {
    Register,
    ListUsers,
    AuditWeak,
    Exit,
    Invalid(String), // Anything that is not one of the listed options
}

/// Represents the outcome status of handling a selection.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Warning,
    Failure(String),
    CloseSession,
}

/// Struct encapsulating the full result of a handled selection.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

/// Parses a single input token into a `MenuChoice`.
///
/// The token must be an integer; unknown numbers and non-numeric input
/// both yield `Invalid`.
pub fn parse_choice(token: &str) -> MenuChoice {
    let trimmed = token.trim();

    match trimmed.parse::<i64>() {
        Ok(1) => MenuChoice::Register,
        Ok(2) => MenuChoice::ListUsers,
        Ok(3) => MenuChoice::AuditWeak,
        Ok(4) => MenuChoice::Exit,
        _ => MenuChoice::Invalid(trimmed.to_string()),
    }
}
