//! Telegram Bot API implementation of the platform port

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use teloxide::payloads::{BanChatMemberSetters, RestrictChatMemberSetters, UnbanChatMemberSetters};
use teloxide::prelude::*;
use teloxide::types::{ChatId, ChatPermissions, MessageId, UserId};
use tracing::debug;

use super::PlatformActions;
use crate::utils::errors::Result;

/// Production [`PlatformActions`] implementation backed by the Bot API.
#[derive(Clone)]
pub struct TelegramPlatform {
    bot: Bot,
}

impl TelegramPlatform {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn full_permissions() -> ChatPermissions {
        ChatPermissions::SEND_MESSAGES
            | ChatPermissions::SEND_MEDIA_MESSAGES
            | ChatPermissions::SEND_OTHER_MESSAGES
            | ChatPermissions::ADD_WEB_PAGE_PREVIEWS
    }
}

#[async_trait]
impl PlatformActions for TelegramPlatform {
    async fn restrict(
        &self,
        chat: ChatId,
        user: i64,
        can_send: bool,
        until: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let permissions = if can_send {
            Self::full_permissions()
        } else {
            ChatPermissions::empty()
        };

        let mut request = self
            .bot
            .restrict_chat_member(chat, UserId(user as u64), permissions);
        if let Some(until) = until {
            request = request.until_date(until);
        }
        request.await?;

        debug!(chat_id = ?chat, user_id = user, can_send = can_send, "Member restriction updated");
        Ok(())
    }

    async fn ban_user(&self, chat: ChatId, user: i64, until: Option<DateTime<Utc>>) -> Result<()> {
        let mut request = self.bot.ban_chat_member(chat, UserId(user as u64));
        if let Some(until) = until {
            request = request.until_date(until);
        }
        request.await?;

        debug!(chat_id = ?chat, user_id = user, permanent = until.is_none(), "Member banned");
        Ok(())
    }

    async fn unban_user(&self, chat: ChatId, user: i64, only_if_banned: bool) -> Result<()> {
        self.bot
            .unban_chat_member(chat, UserId(user as u64))
            .only_if_banned(only_if_banned)
            .await?;

        debug!(chat_id = ?chat, user_id = user, "Member unbanned");
        Ok(())
    }

    async fn set_chat_open(&self, chat: ChatId, open: bool) -> Result<()> {
        let permissions = if open {
            Self::full_permissions()
        } else {
            ChatPermissions::empty()
        };
        self.bot.set_chat_permissions(chat, permissions).await?;

        debug!(chat_id = ?chat, open = open, "Chat permissions updated");
        Ok(())
    }

    async fn delete_message(&self, chat: ChatId, message: MessageId) -> Result<()> {
        self.bot.delete_message(chat, message).await?;
        Ok(())
    }

    async fn send_message(&self, chat: ChatId, text: &str) -> Result<()> {
        self.bot.send_message(chat, text).await?;
        Ok(())
    }

    /// The Bot API has no history call; message ids in a group are assigned
    /// sequentially, so the sweep enumerates down from the anchoring message.
    /// Ids below 1 do not exist, which bounds the walk when the chat history
    /// is shorter than the requested window.
    async fn recent_message_ids(
        &self,
        _chat: ChatId,
        newest: MessageId,
        limit: u32,
    ) -> Result<Vec<MessageId>> {
        let ids = (0..limit as i32)
            .map(|offset| MessageId(newest.0 - offset))
            .take_while(|id| id.0 > 0)
            .collect();
        Ok(ids)
    }
}
