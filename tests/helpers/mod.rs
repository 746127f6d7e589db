//! Shared test helpers
//!
//! In-memory implementations of the injected ports, plus fixtures for
//! building services and invocation contexts.

#![allow(non_snake_case)]
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use teloxide::types::{ChatId, MessageId};
use tokio::sync::Mutex;

use ChatWarden::models::CommandInvocation;
use ChatWarden::platform::PlatformActions;
use ChatWarden::services::{AdminRegistry, ServiceFactory};
use ChatWarden::storage::{AdminStore, RulesProvider};
use ChatWarden::{ChatWardenError, Result};

pub const TECH_ADMIN: i64 = 1000;
pub const ORDINARY_ADMIN: i64 = 2000;
pub const MEMBER: i64 = 3000;
pub const CHAT: ChatId = ChatId(-100123);
pub const COMMAND_MESSAGE: MessageId = MessageId(500);

/// Every platform call a handler makes, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    Restrict {
        chat: ChatId,
        user: i64,
        can_send: bool,
        has_until: bool,
    },
    Ban {
        chat: ChatId,
        user: i64,
        until: Option<DateTime<Utc>>,
    },
    Unban {
        chat: ChatId,
        user: i64,
        only_if_banned: bool,
    },
    SetChatOpen {
        chat: ChatId,
        open: bool,
    },
    DeleteMessage {
        chat: ChatId,
        message: MessageId,
    },
    SendMessage {
        chat: ChatId,
        text: String,
    },
}

/// In-memory platform that records every call and fails where instructed.
/// Failed calls are recorded too, so tests can assert that a sweep still
/// attempted every target.
#[derive(Default)]
pub struct RecordingPlatform {
    pub calls: Mutex<Vec<PlatformCall>>,
    /// Message ids whose deletion fails.
    pub failing_deletes: Vec<i32>,
    /// Chat ids whose sends fail.
    pub failing_sends: Vec<i64>,
}

impl RecordingPlatform {
    pub async fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().await.clone()
    }

    fn outage() -> ChatWardenError {
        ChatWardenError::ServiceUnavailable("simulated outage".to_string())
    }
}

#[async_trait]
impl PlatformActions for RecordingPlatform {
    async fn restrict(
        &self,
        chat: ChatId,
        user: i64,
        can_send: bool,
        until: Option<DateTime<Utc>>,
    ) -> Result<()> {
        self.calls.lock().await.push(PlatformCall::Restrict {
            chat,
            user,
            can_send,
            has_until: until.is_some(),
        });
        Ok(())
    }

    async fn ban_user(&self, chat: ChatId, user: i64, until: Option<DateTime<Utc>>) -> Result<()> {
        self.calls
            .lock()
            .await
            .push(PlatformCall::Ban { chat, user, until });
        Ok(())
    }

    async fn unban_user(&self, chat: ChatId, user: i64, only_if_banned: bool) -> Result<()> {
        self.calls.lock().await.push(PlatformCall::Unban {
            chat,
            user,
            only_if_banned,
        });
        Ok(())
    }

    async fn set_chat_open(&self, chat: ChatId, open: bool) -> Result<()> {
        self.calls
            .lock()
            .await
            .push(PlatformCall::SetChatOpen { chat, open });
        Ok(())
    }

    async fn delete_message(&self, chat: ChatId, message: MessageId) -> Result<()> {
        self.calls
            .lock()
            .await
            .push(PlatformCall::DeleteMessage { chat, message });
        if self.failing_deletes.contains(&message.0) {
            return Err(Self::outage());
        }
        Ok(())
    }

    async fn send_message(&self, chat: ChatId, text: &str) -> Result<()> {
        self.calls.lock().await.push(PlatformCall::SendMessage {
            chat,
            text: text.to_string(),
        });
        if self.failing_sends.contains(&chat.0) {
            return Err(Self::outage());
        }
        Ok(())
    }

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

/// Admin store kept entirely in memory.
#[derive(Default)]
pub struct MemoryAdminStore {
    pub admins: Mutex<Vec<i64>>,
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn load(&self) -> Result<Vec<i64>> {
        Ok(self.admins.lock().await.clone())
    }

    async fn save(&self, admins: &[i64]) -> Result<()> {
        *self.admins.lock().await = admins.to_vec();
        Ok(())
    }
}

/// Rules provider backed by an optional static string.
pub struct StaticRules(pub Option<String>);

#[async_trait]
impl RulesProvider for StaticRules {
    async fn rules_text(&self) -> Result<String> {
        self.0
            .clone()
            .ok_or_else(|| ChatWardenError::NotFound("rules document".to_string()))
    }
}

/// Services wired to the given platform, with one technical admin
/// (`TECH_ADMIN`) and the given ordinary admins.
pub async fn services_with(
    platform: Arc<RecordingPlatform>,
    ordinary: Vec<i64>,
) -> ServiceFactory {
    let store = Arc::new(MemoryAdminStore {
        admins: Mutex::new(ordinary),
    });
    let registry = Arc::new(
        AdminRegistry::load(vec![TECH_ADMIN], store)
            .await
            .expect("registry load"),
    );
    ServiceFactory::new(
        registry,
        platform,
        Arc::new(StaticRules(Some("1. Be kind.".to_string()))),
    )
}

/// An invocation of a command in `CHAT`, anchored at `COMMAND_MESSAGE`.
pub fn invocation(caller: i64, reply_target: Option<i64>, args: &[&str]) -> CommandInvocation {
    CommandInvocation {
        caller,
        chat: CHAT,
        message: COMMAND_MESSAGE,
        reply_target,
        args: args.iter().map(|arg| arg.to_string()).collect(),
    }
}
