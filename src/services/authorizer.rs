//! Command authorization gate
//!
//! Every command handler consults this gate before producing any effect, so
//! unauthorized invocations short-circuit into an error reply with no
//! platform call.

use std::sync::Arc;

use tracing::{debug, warn};

use super::registry::AdminRegistry;
use crate::utils::errors::{ChatWardenError, Result};

/// Authorization required to run a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// Anyone may invoke the command.
    Any,
    /// Technical or ordinary admins.
    Admin,
    /// Technical admins only.
    TechnicalAdmin,
}

/// Gate combining registry lookups with a per-command required level.
#[derive(Clone)]
pub struct CommandAuthorizer {
    registry: Arc<AdminRegistry>,
}

impl CommandAuthorizer {
    pub fn new(registry: Arc<AdminRegistry>) -> Self {
        Self { registry }
    }

    /// Pass or fail the caller against the required level.
    pub async fn require(&self, caller: i64, level: AccessLevel) -> Result<()> {
        let allowed = match level {
            AccessLevel::Any => true,
            AccessLevel::Admin => self.registry.is_admin(caller).await,
            AccessLevel::TechnicalAdmin => self.registry.is_technical_admin(caller),
        };

        if allowed {
            debug!(user_id = caller, level = ?level, "Authorization granted");
            Ok(())
        } else {
            warn!(user_id = caller, level = ?level, "Unauthorized command attempt");
            Err(ChatWardenError::Unauthorized(
                "this command is restricted to chat admins".to_string(),
            ))
        }
    }
}
