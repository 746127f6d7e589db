//! User moderation handlers: mute, unmute, ban, unban, kick

use chrono::{Duration, Utc};
use tracing::info;

use super::{error_reply, first_arg, numeric_arg, reply_target};
use crate::models::{CommandInvocation, ModerationEffect, Reply};
use crate::platform::apply_effect;
use crate::services::{AccessLevel, ServiceFactory};
use crate::utils::duration::parse_duration;
use crate::utils::errors::Result;

/// Handle /mute — restrict the replied-to user for the given duration.
pub async fn mute(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_mute(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_mute(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::Admin)
        .await?;

    let target = reply_target(
        invocation,
        "reply to a message of the user you want to mute",
    )?;
    let token = first_arg(invocation, "specify the mute duration, e.g. /mute 10m")?;
    let seconds = parse_duration(token)?;
    let until = Utc::now() + Duration::seconds(seconds as i64);

    apply_effect(
        services.platform.as_ref(),
        invocation.chat,
        ModerationEffect::Restrict {
            user: target,
            until: Some(until),
        },
    )
    .await?;

    info!(
        admin_id = invocation.caller,
        target_user_id = target,
        chat_id = ?invocation.chat,
        duration = token,
        "User muted"
    );
    Ok(Reply::new(format!("🔇 User muted for {token}.")))
}

/// Handle /unmute — restore the replied-to user's ability to write.
pub async fn unmute(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_unmute(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_unmute(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::Admin)
        .await?;

    let target = reply_target(
        invocation,
        "reply to a message of the user you want to unmute",
    )?;

    apply_effect(
        services.platform.as_ref(),
        invocation.chat,
        ModerationEffect::Lift { user: target },
    )
    .await?;

    info!(
        admin_id = invocation.caller,
        target_user_id = target,
        chat_id = ?invocation.chat,
        "User unmuted"
    );
    Ok(Reply::new("🔊 User unmuted."))
}

/// Handle /ban — remove the replied-to user for the given duration.
///
/// The literal argument `0` is a sentinel for a permanent ban: no expiry is
/// passed to the platform. It is handled here, not in the duration parser,
/// which only accepts `<value><unit>` tokens.
pub async fn ban(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_ban(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_ban(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::Admin)
        .await?;

    let target = reply_target(invocation, "reply to a message of the user you want to ban")?;
    let token = first_arg(
        invocation,
        "specify the ban duration, e.g. /ban 1d (0 = permanent)",
    )?;

    let until = if token == "0" {
        None
    } else {
        let seconds = parse_duration(token)?;
        Some(Utc::now() + Duration::seconds(seconds as i64))
    };

    apply_effect(
        services.platform.as_ref(),
        invocation.chat,
        ModerationEffect::Remove {
            user: target,
            until,
        },
    )
    .await?;

    info!(
        admin_id = invocation.caller,
        target_user_id = target,
        chat_id = ?invocation.chat,
        permanent = until.is_none(),
        "User banned"
    );
    let text = match until {
        Some(_) => format!("🚫 User banned for {token}."),
        None => "🚫 User banned permanently.".to_string(),
    };
    Ok(Reply::new(text))
}

/// Handle /unban — reinstate a user, addressed by reply or by explicit id.
///
/// Reinstating is idempotent: the platform call is a no-op for users that
/// are not currently banned, and that is not an error.
pub async fn unban(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_unban(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_unban(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::Admin)
        .await?;

    let target = match invocation.reply_target {
        Some(user) => user,
        None => numeric_arg(
            invocation,
            "reply to the user or specify their id: /unban <user_id>",
        )?,
    };

    apply_effect(
        services.platform.as_ref(),
        invocation.chat,
        ModerationEffect::Reinstate { user: target },
    )
    .await?;

    info!(
        admin_id = invocation.caller,
        target_user_id = target,
        chat_id = ?invocation.chat,
        "User unbanned"
    );
    Ok(Reply::new("✅ User unbanned."))
}

/// Handle /kick — a ban immediately followed by an unban, removing the user
/// once without leaving a persistent ban record.
pub async fn kick(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_kick(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_kick(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::Admin)
        .await?;

    let target = reply_target(
        invocation,
        "reply to a message of the user you want to kick",
    )?;

    apply_effect(
        services.platform.as_ref(),
        invocation.chat,
        ModerationEffect::Remove {
            user: target,
            until: Some(Utc::now()),
        },
    )
    .await?;
    apply_effect(
        services.platform.as_ref(),
        invocation.chat,
        ModerationEffect::Reinstate { user: target },
    )
    .await?;

    info!(
        admin_id = invocation.caller,
        target_user_id = target,
        chat_id = ?invocation.chat,
        "User kicked"
    );
    Ok(Reply::new("👢 User kicked from the chat."))
}
