//! Services module
//!
//! This module contains the business logic shared by the command handlers

pub mod authorizer;
pub mod registry;

// Re-export commonly used services
pub use authorizer::{AccessLevel, CommandAuthorizer};
pub use registry::AdminRegistry;

use std::sync::Arc;

use crate::platform::PlatformActions;
use crate::storage::RulesProvider;

/// Bundle of collaborators every command handler receives.
#[derive(Clone)]
pub struct ServiceFactory {
    pub registry: Arc<AdminRegistry>,
    pub authorizer: CommandAuthorizer,
    pub platform: Arc<dyn PlatformActions>,
    pub rules: Arc<dyn RulesProvider>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(
        registry: Arc<AdminRegistry>,
        platform: Arc<dyn PlatformActions>,
        rules: Arc<dyn RulesProvider>,
    ) -> Self {
        let authorizer = CommandAuthorizer::new(registry.clone());
        Self {
            registry,
            authorizer,
            platform,
            rules,
        }
    }
}
