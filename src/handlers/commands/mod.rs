//! Command handlers module
//!
//! One handler per moderation command. Each follows the same sequence:
//! authorize, validate inputs, resolve the target, compute the effect, call
//! the platform, reply. Any step may short-circuit into an error reply;
//! every invocation produces exactly one reply.

pub mod admin;
pub mod chat;
pub mod general;
pub mod moderation;

use teloxide::utils::command::BotCommands;
use tracing::{error, warn};

use crate::models::{CommandInvocation, Reply};
use crate::services::ServiceFactory;
use crate::utils::errors::{ChatWardenError, Result};

/// All available bot commands
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "ChatWarden commands:")]
pub enum Command {
    #[command(description = "Start the bot and show a greeting")]
    Start,
    #[command(description = "Show the admin command reference")]
    Help,
    #[command(description = "Mute a user, e.g. /mute 10m (reply to their message)")]
    Mute,
    #[command(description = "Unmute a user (reply to their message)")]
    Unmute,
    #[command(description = "Ban a user, e.g. /ban 1d; /ban 0 bans permanently (reply)")]
    Ban,
    #[command(description = "Unban a user by reply or by id")]
    Unban,
    #[command(description = "Kick a user out of the chat (reply to their message)")]
    Kick,
    #[command(description = "Close the chat so only admins can write")]
    Lock,
    #[command(description = "Reopen the chat for everyone")]
    Unlock,
    #[command(description = "Delete the last N messages, e.g. /clean 10")]
    Clean,
    #[command(description = "Show the chat rules")]
    Rules,
    #[command(description = "Report a problem to the admins")]
    Report,
    #[command(description = "List admins")]
    Admins,
    #[command(description = "Add an ordinary admin by id")]
    AddAdmin,
    #[command(description = "Remove an ordinary admin by id")]
    RemoveAdmin,
}

/// Main command dispatcher: routes an invocation to its handler and returns
/// the single reply to send back.
pub async fn handle_command(
    cmd: Command,
    services: &ServiceFactory,
    invocation: &CommandInvocation,
) -> Reply {
    match cmd {
        Command::Start => general::start(invocation).await,
        Command::Help => general::help(services, invocation).await,
        Command::Mute => moderation::mute(services, invocation).await,
        Command::Unmute => moderation::unmute(services, invocation).await,
        Command::Ban => moderation::ban(services, invocation).await,
        Command::Unban => moderation::unban(services, invocation).await,
        Command::Kick => moderation::kick(services, invocation).await,
        Command::Lock => chat::lock(services, invocation).await,
        Command::Unlock => chat::unlock(services, invocation).await,
        Command::Clean => chat::clean(services, invocation).await,
        Command::Rules => general::rules(services, invocation).await,
        Command::Report => general::report(services, invocation).await,
        Command::Admins => admin::list_admins(services, invocation).await,
        Command::AddAdmin => admin::add_admin(services, invocation).await,
        Command::RemoveAdmin => admin::remove_admin(services, invocation).await,
    }
}

/// Map a handler error onto the user-facing reply text.
pub(crate) fn error_reply(err: &ChatWardenError) -> Reply {
    if err.is_user_error() {
        warn!(error = %err, "Command rejected");
    } else {
        error!(error = %err, "Command failed");
    }

    let text = match err {
        ChatWardenError::Unauthorized(reason) => format!("⛔ {reason}"),
        ChatWardenError::TechnicalAdminImmutable { .. } => format!("⛔ {err}"),
        ChatWardenError::InvalidInput(reason) => format!("❗ {reason}"),
        ChatWardenError::NotFound(what) => format!("🔎 {what}"),
        ChatWardenError::AlreadyExists(what) => format!("ℹ️ {what}"),
        other => format!("⚠️ Command failed: {other}"),
    };
    Reply::new(text)
}

/// The replied-to user, or a validation error carrying `hint`.
pub(crate) fn reply_target(invocation: &CommandInvocation, hint: &str) -> Result<i64> {
    invocation
        .reply_target
        .ok_or_else(|| ChatWardenError::InvalidInput(hint.to_string()))
}

/// The first argument, or a validation error carrying `hint`.
pub(crate) fn first_arg<'a>(invocation: &'a CommandInvocation, hint: &str) -> Result<&'a str> {
    invocation
        .args
        .first()
        .map(String::as_str)
        .ok_or_else(|| ChatWardenError::InvalidInput(hint.to_string()))
}

/// The first argument parsed as a user id.
pub(crate) fn numeric_arg(invocation: &CommandInvocation, hint: &str) -> Result<i64> {
    let raw = first_arg(invocation, hint)?;
    raw.parse()
        .map_err(|_| ChatWardenError::InvalidInput(format!("user id must be a number, got {raw}")))
}
