//! Data models module
//!
//! This module contains the core data structures used throughout the
//! application

pub mod effect;
pub mod invocation;
pub mod reply;

// Re-export commonly used models
pub use effect::ModerationEffect;
pub use invocation::CommandInvocation;
pub use reply::Reply;
