//! General handlers: start, help, rules, report

use futures::future::join_all;
use teloxide::types::ChatId;
use tracing::{debug, info, warn};

use super::error_reply;
use crate::models::{CommandInvocation, Reply};
use crate::services::{AccessLevel, ServiceFactory};
use crate::utils::errors::{ChatWardenError, Result};

/// Handle /start — a plain greeting, open to everyone.
pub async fn start(invocation: &CommandInvocation) -> Reply {
    debug!(user_id = invocation.caller, "Greeting user");
    Reply::new("👋 Hi! I am the moderation bot of this chat.")
}

const HELP_TEXT: &str = "🛠 Admin commands:\n\
/mute <duration> — mute the replied-to user (e.g. /mute 10m)\n\
/unmute — lift a mute (reply)\n\
/ban <duration> — ban the replied-to user (e.g. /ban 1h, 0 = permanent)\n\
/unban <id> — unban by reply or by id\n\
/kick — kick the replied-to user\n\
/clean <N> — delete the last N messages\n\
/lock — close the chat (read-only)\n\
/unlock — reopen the chat\n\
/rules — show the chat rules\n\
/report <reason> — notify the admins\n\
/admins — list admins\n\
/addadmin <id> — add an admin (technical admins only)\n\
/removeadmin <id> — remove an admin (technical admins only)";

/// Handle /help — the admin command reference.
pub async fn help(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_help(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_help(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::Admin)
        .await?;
    Ok(Reply::new(HELP_TEXT))
}

/// Handle /rules — show the chat rules document, open to everyone.
pub async fn rules(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    debug!(user_id = invocation.caller, "Rules requested");
    match services.rules.rules_text().await {
        Ok(text) => Reply::new(text),
        Err(ChatWardenError::NotFound(_)) => Reply::new("📄 The rules document is not available."),
        Err(err) => error_reply(&err),
    }
}

/// Handle /report — notify every admin, open to everyone.
///
/// The fan-out is best-effort: one unreachable admin must not keep the rest
/// from being notified, and the reporter always gets the confirmation.
pub async fn report(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_report(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_report(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<Reply> {
    let reason = invocation.args.join(" ");
    if reason.is_empty() {
        return Err(ChatWardenError::InvalidInput(
            "usage: /report <reason>".to_string(),
        ));
    }

    let admins = services.registry.all_admin_ids().await;
    let notice = format!(
        "🚨 Report from user {} in chat {}:\n{}",
        invocation.caller, invocation.chat.0, reason
    );

    let sends = admins.iter().map(|admin_id| {
        let platform = services.platform.clone();
        let notice = notice.clone();
        let admin_id = *admin_id;
        async move {
            let outcome = platform.send_message(ChatId(admin_id), &notice).await;
            (admin_id, outcome)
        }
    });

    let mut delivered = 0usize;
    for (admin_id, outcome) in join_all(sends).await {
        match outcome {
            Ok(()) => delivered += 1,
            Err(err) => {
                warn!(admin_id = admin_id, error = %err, "Failed to notify admin about a report");
            }
        }
    }

    info!(
        reporter = invocation.caller,
        chat_id = ?invocation.chat,
        delivered = delivered,
        total = admins.len(),
        "Report routed to admins"
    );
    Ok(Reply::new("🚨 Report sent to the admins. Thank you!"))
}
