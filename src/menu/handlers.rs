//! Menu handlers
//!
//! Each handler performs one registry operation and builds the message
//! shown to the user. Handlers never print directly.

use crate::config::AppConfig;
use crate::menu::responses::{
    ALERTS_HEADER, ALL_SECURE, EXITING, INVALID_OPTION, NO_USERS, STRONG_REGISTERED,
    USERS_HEADER, WEAK_REGISTERED, format_alert, format_reason, format_user_line,
};
use crate::menu::{CommandResult, CommandStatus};
use crate::registry::{Registry, StrengthVerdict};
use log::{info, warn};

/// Registers the pair and reports its strength.
///
/// Weak passwords are stored as well; the result carries a `Warning` status
/// and, if enabled, one line per failed requirement.
pub fn handle_register(
    registry: &mut Registry,
    username: &str,
    password: &str,
    config: &AppConfig,
) -> CommandResult {
    let verdict = registry.register(username, password);
    info!("User '{}' registered ({} total)", username, registry.len());

    match verdict {
        StrengthVerdict::Strong => CommandResult {
            status: CommandStatus::Success,
            message: Some(STRONG_REGISTERED.into()),
        },
        StrengthVerdict::Weak => {
            let mut lines = vec![WEAK_REGISTERED.to_string()];
            if config.show_weakness_reasons {
                let report = registry.policy().assess(password);
                lines.extend(
                    report
                        .missing
                        .iter()
                        .map(|req| format_reason(&req.to_string())),
                );
            }
            CommandResult {
                status: CommandStatus::Warning,
                message: Some(lines.join("\n")),
            }
        }
    }
}

/// Lists registered usernames in registration order.
pub fn handle_list_users(registry: &Registry) -> CommandResult {
    let usernames = registry.list_usernames();

    let mut lines = vec![USERS_HEADER.to_string()];
    if usernames.is_empty() {
        lines.push(NO_USERS.to_string());
    } else {
        lines.extend(
            usernames
                .iter()
                .enumerate()
                .map(|(i, name)| format_user_line(i + 1, name)),
        );
    }

    CommandResult {
        status: CommandStatus::Success,
        message: Some(lines.join("\n")),
    }
}

/// Reports every user whose password is weak. Passwords are not echoed.
pub fn handle_audit(registry: &Registry) -> CommandResult {
    let weak = registry.audit_weak();

    let mut lines = vec![ALERTS_HEADER.to_string()];
    if weak.is_empty() {
        lines.push(ALL_SECURE.to_string());
    } else {
        warn!("{} weak password(s) found during audit", weak.len());
        lines.extend(weak.iter().map(|record| format_alert(&record.username)));
    }

    let status = if weak.is_empty() {
        CommandStatus::Success
    } else {
        CommandStatus::Warning
    };

    CommandResult {
        status,
        message: Some(lines.join("\n")),
    }
}

pub fn handle_exit() -> CommandResult {
    CommandResult {
        status: CommandStatus::CloseSession,
        message: Some(EXITING.into()),
    }
}

pub fn handle_invalid(input: &str) -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure(format!("Invalid menu selection: {}", input)),
        message: Some(INVALID_OPTION.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> AppConfig {
        AppConfig {
            show_weakness_reasons: false,
            ..AppConfig::default()
        }
    }

    #[test]
    fn register_strong_password() {
        let mut registry = Registry::new();
        let result = handle_register(&mut registry, "alice", "Secret1!", &AppConfig::default());

        assert_eq!(result.status, CommandStatus::Success);
        assert_eq!(result.message.as_deref(), Some(STRONG_REGISTERED));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_weak_password_still_stores_it() {
        let mut registry = Registry::new();
        let result = handle_register(&mut registry, "bob", "password", &quiet_config());

        assert_eq!(result.status, CommandStatus::Warning);
        assert_eq!(result.message.as_deref(), Some(WEAK_REGISTERED));
        assert_eq!(registry.list_usernames(), vec!["bob"]);
    }

    #[test]
    fn weak_registration_lists_reasons() {
        let mut registry = Registry::new();
        let result = handle_register(&mut registry, "carol", "Ab1", &AppConfig::default());
        let message = result.message.unwrap();

        assert!(message.starts_with(WEAK_REGISTERED));
        assert!(message.contains("  - At least 8 characters"));
        assert!(message.contains("  - At least one symbol"));
        assert!(!message.contains("uppercase"));
        assert!(!message.contains("lowercase"));
        assert!(!message.contains("digit"));
    }

    #[test]
    fn list_users_numbers_from_one() {
        let mut registry = Registry::new();
        registry.register("alice", "Secret1!");
        registry.register("bob", "password");

        let message = handle_list_users(&registry).message.unwrap();
        assert_eq!(message, format!("{}\n1. alice\n2. bob", USERS_HEADER));
    }

    #[test]
    fn list_users_when_empty() {
        let message = handle_list_users(&Registry::new()).message.unwrap();
        assert!(message.ends_with(NO_USERS));
    }

    #[test]
    fn audit_reports_weak_users_without_passwords() {
        let mut registry = Registry::new();
        registry.register("alice", "Secret1!");
        registry.register("bob", "password");

        let result = handle_audit(&registry);
        let message = result.message.unwrap();

        assert_eq!(result.status, CommandStatus::Warning);
        assert!(message.contains("User: bob -> WEAK PASSWORD"));
        assert!(!message.contains("alice"));
        assert!(!message.contains("password"));
    }

    #[test]
    fn audit_all_secure() {
        let mut registry = Registry::new();
        registry.register("alice", "Secret1!");

        let result = handle_audit(&registry);
        assert_eq!(result.status, CommandStatus::Success);
        assert!(result.message.unwrap().ends_with(ALL_SECURE));
    }

    #[test]
    fn exit_and_invalid() {
        assert_eq!(handle_exit().status, CommandStatus::CloseSession);

        let result = handle_invalid("9");
        assert!(matches!(result.status, CommandStatus::Failure(_)));
        assert_eq!(result.message.as_deref(), Some(INVALID_OPTION));
    }
}
