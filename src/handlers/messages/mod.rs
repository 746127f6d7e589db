//! Message handlers module
//!
//! Handles non-command chat events; currently greeting new members with the
//! chat rules.

use teloxide::{prelude::*, types::Message, Bot};
use tracing::debug;

use crate::services::ServiceFactory;
use crate::utils::errors::{ChatWardenError, Result};

/// Greet each new chat member and post the rules.
pub async fn handle_new_chat_member(
    bot: Bot,
    msg: Message,
    services: &ServiceFactory,
) -> Result<()> {
    let Some(new_members) = msg.new_chat_members() else {
        return Ok(());
    };

    for member in new_members {
        debug!(user_id = member.id.0, chat_id = ?msg.chat.id, "New member joined");

        bot.send_message(
            msg.chat.id,
            format!("👋 Welcome, {}!\n📜 The chat rules:", member.full_name()),
        )
        .await?;

        match services.rules.rules_text().await {
            Ok(text) => {
                bot.send_message(msg.chat.id, text).await?;
            }
            Err(ChatWardenError::NotFound(_)) => {
                bot.send_message(msg.chat.id, "📄 The rules document is not available.")
                    .await?;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}
