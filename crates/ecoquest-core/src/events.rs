use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Every effective state change in the store produces an event.
/// Screens poll (drain) events to know when to re-render; silent
/// no-ops such as re-completing a task emit nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StateEvent {
    /// A profile patch was applied.
    UserUpdated {
        at: DateTime<Utc>,
    },
    /// A task flipped from incomplete to complete.
    TaskCompleted {
        task_id: String,
        points_awarded: u32,
        total_points: u32,
        at: DateTime<Utc>,
    },
    /// The point total crossed a tier boundary.
    LevelChanged {
        from: Level,
        to: Level,
        at: DateTime<Utc>,
    },
    /// The task list was replaced with the seed list.
    TasksReset {
        at: DateTime<Utc>,
    },
    /// A badge flipped from locked to unlocked.
    BadgeUnlocked {
        badge_id: String,
        at: DateTime<Utc>,
    },
}
