//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for moderation and admin-management commands
//! - Message handlers for chat events such as member joins

pub mod commands;
pub mod messages;
