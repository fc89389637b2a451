//! Console messages
//!
//! Menu text and the fixed messages printed by handlers.

pub const MENU: &str = "\n===== SECURE PASSWORD MANAGER =====\n\
1. Register user\n\
2. List users\n\
3. Audit weak passwords\n\
4. Exit\n\
Select an option: ";

pub const USERNAME_PROMPT: &str = "\nEnter username: ";
pub const PASSWORD_PROMPT: &str = "Enter password: ";

pub const STRONG_REGISTERED: &str = "Secure password registered successfully.";
pub const WEAK_REGISTERED: &str = "WARNING: weak password.";
pub const USERS_HEADER: &str = "\n--- REGISTERED USERS ---";
pub const NO_USERS: &str = "No users registered.";
pub const ALERTS_HEADER: &str = "\n--- SECURITY ALERTS ---";
pub const ALL_SECURE: &str = "All passwords are secure.";
pub const EXITING: &str = "Exiting...";
pub const INVALID_OPTION: &str = "Invalid option";

/// Format a numbered entry of the user listing (1-based)
pub fn format_user_line(position: usize, username: &str) -> String {
    format!("{}. {}", position, username)
}

/// Format a weak-password alert line
pub fn format_alert(username: &str) -> String {
    format!("User: {} -> WEAK PASSWORD", username)
}

/// Format a missing requirement under a weak-password warning
pub fn format_reason(reason: &str) -> String {
    format!("  - {}", reason)
}
