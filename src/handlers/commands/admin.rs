//! Admin-management handlers: listing, adding and removing admins

use super::{error_reply, numeric_arg};
use crate::models::{CommandInvocation, Reply};
use crate::services::{AccessLevel, ServiceFactory};
use crate::utils::errors::Result;
use crate::utils::logging::log_admin_action;

/// Handle /admins — list the admin set.
///
/// Technical admins see the tier split; ordinary admins get the flat id
/// list.
pub async fn list_admins(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_list_admins(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_list_admins(
    services: &ServiceFactory,
    invocation: &CommandInvocation,
) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::Admin)
        .await?;

    let text = if services.registry.is_technical_admin(invocation.caller) {
        let (technical, ordinary) = services.registry.list_all().await;
        let mut lines = vec!["Chat admins:".to_string()];
        lines.extend(technical.iter().map(|id| format!("👑 {id}")));
        lines.extend(ordinary.iter().map(|id| format!("🔧 {id}")));
        lines.join("\n")
    } else {
        let ids = services.registry.all_admin_ids().await;
        let mut lines = vec!["Chat admins:".to_string()];
        lines.extend(ids.iter().map(|id| id.to_string()));
        lines.join("\n")
    };

    Ok(Reply::new(text))
}

/// Handle /addadmin <id> — grant ordinary-admin status.
pub async fn add_admin(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_add_admin(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_add_admin(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::TechnicalAdmin)
        .await?;

    let user_id = numeric_arg(invocation, "usage: /addadmin <user_id>")?;
    services.registry.add_ordinary(user_id).await?;

    log_admin_action(invocation.caller, "addadmin", Some(user_id), None);
    Ok(Reply::new(format!("✅ Admin added: {user_id}")))
}

/// Handle /removeadmin <id> — revoke ordinary-admin status.
///
/// Technical admins can never be removed this way, not even by another
/// technical admin.
pub async fn remove_admin(services: &ServiceFactory, invocation: &CommandInvocation) -> Reply {
    try_remove_admin(services, invocation)
        .await
        .unwrap_or_else(|err| error_reply(&err))
}

async fn try_remove_admin(
    services: &ServiceFactory,
    invocation: &CommandInvocation,
) -> Result<Reply> {
    services
        .authorizer
        .require(invocation.caller, AccessLevel::TechnicalAdmin)
        .await?;

    let user_id = numeric_arg(invocation, "usage: /removeadmin <user_id>")?;
    services.registry.remove_ordinary(user_id).await?;

    log_admin_action(invocation.caller, "removeadmin", Some(user_id), None);
    Ok(Reply::new(format!("❌ Admin removed: {user_id}")))
}
