//! Platform action port
//!
//! The moderation core talks to Telegram exclusively through this trait, so
//! handlers can be exercised against an in-memory implementation in tests.
//! Calls are never retried here; a failure is surfaced to the handler, which
//! reports it to the invoking user.

pub mod telegram;

pub use telegram::TelegramPlatform;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use teloxide::types::{ChatId, MessageId};

use crate::models::ModerationEffect;
use crate::utils::errors::Result;

/// Outbound platform operations used by the command handlers.
#[async_trait]
pub trait PlatformActions: Send + Sync {
    /// Allow or forbid a user to send messages, optionally until a deadline.
    async fn restrict(
        &self,
        chat: ChatId,
        user: i64,
        can_send: bool,
        until: Option<DateTime<Utc>>,
    ) -> Result<()>;

    /// Ban a user; `until = None` bans permanently.
    async fn ban_user(&self, chat: ChatId, user: i64, until: Option<DateTime<Utc>>) -> Result<()>;

    /// Lift a ban. With `only_if_banned` the call is a no-op for users that
    /// are not currently banned.
    async fn unban_user(&self, chat: ChatId, user: i64, only_if_banned: bool) -> Result<()>;

    /// Open or close the chat for non-admin members.
    async fn set_chat_open(&self, chat: ChatId, open: bool) -> Result<()>;

    /// Delete a single message.
    async fn delete_message(&self, chat: ChatId, message: MessageId) -> Result<()>;

    /// Send a plain text message.
    async fn send_message(&self, chat: ChatId, text: &str) -> Result<()>;

    /// Enumerate up to `limit` message ids ending at `newest`, newest first.
    async fn recent_message_ids(
        &self,
        chat: ChatId,
        newest: MessageId,
        limit: u32,
    ) -> Result<Vec<MessageId>>;
}

/// Apply a resolved moderation effect through the platform port.
pub async fn apply_effect(
    platform: &dyn PlatformActions,
    chat: ChatId,
    effect: ModerationEffect,
) -> Result<()> {
    match effect {
        ModerationEffect::Restrict { user, until } => {
            platform.restrict(chat, user, false, until).await
        }
        ModerationEffect::Lift { user } => platform.restrict(chat, user, true, None).await,
        ModerationEffect::Remove { user, until } => platform.ban_user(chat, user, until).await,
        ModerationEffect::Reinstate { user } => platform.unban_user(chat, user, true).await,
        ModerationEffect::SetChatOpen(open) => platform.set_chat_open(chat, open).await,
    }
}
