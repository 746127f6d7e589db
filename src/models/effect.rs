//! Moderation effects

use chrono::{DateTime, Utc};

/// Resolved outcome of a moderation command, applied through
/// [`PlatformActions`](crate::platform::PlatformActions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationEffect {
    /// Forbid a user from sending messages, optionally until a deadline.
    Restrict {
        user: i64,
        until: Option<DateTime<Utc>>,
    },
    /// Restore a restricted user's ability to send messages.
    Lift { user: i64 },
    /// Remove a user from the chat, optionally until a deadline. `None`
    /// means a permanent ban.
    Remove {
        user: i64,
        until: Option<DateTime<Utc>>,
    },
    /// Lift a removal so the user may rejoin.
    Reinstate { user: i64 },
    /// Open or close the chat for non-admin members.
    SetChatOpen(bool),
}
