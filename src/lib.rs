//! ChatWarden Telegram Bot
//!
//! A Telegram moderation bot for group chats. This library provides a
//! two-tier admin model, human-friendly restriction durations and a uniform
//! command pipeline for mute/ban/kick/lock/clean/report moderation actions.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod models;
pub mod platform;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ChatWardenError, Result};

// Re-export main components for easy access
pub use platform::{PlatformActions, TelegramPlatform};
pub use services::{AccessLevel, AdminRegistry, CommandAuthorizer, ServiceFactory};
pub use storage::{AdminStore, JsonAdminStore, RulesProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
