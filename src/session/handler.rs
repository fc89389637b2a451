use log::info;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use crate::config::AppConfig;
use crate::error::SessionError;
use crate::menu::responses::{MENU, PASSWORD_PROMPT, USERNAME_PROMPT};
use crate::menu::{
    CommandResult, CommandStatus, MenuChoice, handle_audit, handle_exit, handle_invalid,
    handle_list_users, handle_register, parse_choice,
};
use crate::registry::Registry;
use crate::session::TokenReader;

/// Runs the interactive menu until the user exits or the input ends.
///
/// - Reads whitespace-delimited tokens from `reader`.
/// - Dispatches each selection to its menu handler.
/// - Returns the registry built during the session.
pub async fn run_session<R, W>(
    reader: R,
    mut writer: W,
    config: &AppConfig,
) -> Result<Registry, SessionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut tokens = TokenReader::new(reader);
    let mut registry = Registry::with_policy(config.strength_policy());

    loop {
        write_prompt(&mut writer, MENU).await?;

        let Some(token) = tokens.next_token().await? else {
            info!("Input closed at main menu");
            break;
        };

        let choice = parse_choice(&token);
        info!("Menu selection: {:?}", choice);

        let result = match choice {
            MenuChoice::Register => {
                write_prompt(&mut writer, USERNAME_PROMPT).await?;
                let Some(username) = tokens.next_token().await? else {
                    info!("Input closed while reading username");
                    break;
                };

                write_prompt(&mut writer, PASSWORD_PROMPT).await?;
                let Some(password) = tokens.next_token().await? else {
                    info!("Input closed while reading password");
                    break;
                };

                handle_register(&mut registry, &username, &password, config)
            }
            MenuChoice::ListUsers => handle_list_users(&registry),
            MenuChoice::AuditWeak => handle_audit(&registry),
            MenuChoice::Exit => handle_exit(),
            MenuChoice::Invalid(input) => handle_invalid(&input),
        };

        let close = result.status == CommandStatus::CloseSession;
        write_result(&mut writer, result).await?;

        if close {
            info!("Session closed by user");
            break;
        }
    }

    writer.flush().await?;
    Ok(registry)
}

async fn write_prompt<W: AsyncWrite + Unpin>(writer: &mut W, prompt: &str) -> std::io::Result<()> {
    writer.write_all(prompt.as_bytes()).await?;
    writer.flush().await
}

async fn write_result<W: AsyncWrite + Unpin>(
    writer: &mut W,
    result: CommandResult,
) -> std::io::Result<()> {
    if let CommandStatus::Failure(reason) = &result.status {
        info!("{}", reason);
    }

    if let Some(msg) = result.message {
        writer.write_all(msg.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await
}
