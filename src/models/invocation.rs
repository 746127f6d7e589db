//! Per-invocation command context

use teloxide::types::{ChatId, Message, MessageId};

use crate::utils::errors::{ChatWardenError, Result};

/// Immutable context for a single command invocation.
///
/// Built once from the incoming command message, handed read-only to the
/// handler, never persisted.
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    /// The user issuing the command.
    pub caller: i64,
    /// The chat the command was issued in.
    pub chat: ChatId,
    /// The command message itself; anchors the /clean sweep.
    pub message: MessageId,
    /// Author of the message the command replies to, if any.
    pub reply_target: Option<i64>,
    /// Whitespace-separated arguments following the command name.
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Build the invocation context from an incoming command message.
    pub fn from_message(msg: &Message) -> Result<Self> {
        let caller = msg
            .from
            .as_ref()
            .ok_or_else(|| ChatWardenError::InvalidInput("no user in message".to_string()))?
            .id
            .0 as i64;

        let reply_target = msg
            .reply_to_message()
            .and_then(|reply| reply.from.as_ref())
            .map(|user| user.id.0 as i64);

        let args = msg
            .text()
            .map(|text| {
                text.split_whitespace()
                    .skip(1)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            caller,
            chat: msg.chat.id,
            message: msg.id,
            reply_target,
            args,
        })
    }
}
