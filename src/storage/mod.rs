//! Durable storage module
//!
//! Injected collaborators for everything the bot keeps outside of memory:
//! the ordinary-admin list and the chat rules document.

pub mod admin_store;
pub mod rules;

pub use admin_store::{AdminStore, JsonAdminStore};
pub use rules::{FileRulesProvider, RulesProvider};
