//! Chat-wide handlers: lock, unlock, clean

use tracing::{debug, info};

use super::{error_reply, first_arg};
use crate::models::{CommandInvocation, ModerationEffect, Reply};
use crate::platform::apply_effect;
use crate::services::{AccessLevel, ServiceFactory};
use crate::utils::errors::{ChatWardenError, Result};

/// Handle /lock — close the chat so only admins can write.
pub async fn lock(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_set_chat_open(services, invocation, false)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

/// Handle /unlock — reopen the chat for everyone.
pub async fn unlock(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_set_chat_open(services, invocation, true)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_set_chat_open(
    services: &ServiceFactory,
    invocation: &CommandInvocation,
    open: bool,
) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::Admin)
        .await?;

    apply_effect(
        services.platform.as_ref(),
        invocation.chat,
        ModerationEffect::SetChatOpen(open),
    )
    .await?;

    info!(
        admin_id = invocation.caller,
        chat_id = ?invocation.chat,
        open = open,
        "Chat lock state changed"
    );
    let text = if open {
        "🔓 Chat unlocked. Everyone can write again."
    } else {
        "🔒 Chat locked. Read-only for members."
    };
    Ok(Reply::new(text))
}

/// Handle /clean N — delete the last N messages.
///
/// The sweep is best-effort: a message that cannot be deleted (too old,
/// already gone) is skipped and the rest are still attempted. One id past N
/// is fetched so the /clean command message itself goes too.
pub async fn clean(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_clean(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_clean(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::Admin)
        .await?;

    let raw = first_arg(
        invocation,
        "specify how many messages to delete: /clean 10",
    )?;
    let count: u32 = raw.parse().map_err(|_| {
        ChatWardenError::InvalidInput(format!("message count must be a number, got {raw}"))
    })?;

    let ids = services
        .platform
        .recent_message_ids(invocation.chat, invocation.message, count + 1)
        .await?;

    let mut deleted = 0usize;
    for id in ids {
        match services.platform.delete_message(invocation.chat, id).await {
            Ok(()) => deleted += 1,
            Err(err) => {
                debug!(
                    chat_id = ?invocation.chat,
                    message_id = ?id,
                    error = %err,
                    "Skipping undeletable message"
                );
            }
        }
    }

    info!(
        admin_id = invocation.caller,
        chat_id = ?invocation.chat,
        requested = count,
        deleted = deleted,
        "Chat cleaned"
    );
    Ok(Reply::new(format!("🧼 Deleted {deleted} messages.")))
}
