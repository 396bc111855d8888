//! Daily eco task types and the seed task list.
//!
//! Tasks are created once at session start from the seed list and only
//! ever flip `completed` from false to true; the whole list is replaced
//! on a reset. There is no per-task deletion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of eco task for organizing the daily list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskCategory {
    Recycling,
    Water,
    Energy,
    Transport,
    Nature,
    Food,
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskCategory::Recycling => "Recycling",
            TaskCategory::Water => "Water",
            TaskCategory::Energy => "Energy",
            TaskCategory::Transport => "Transport",
            TaskCategory::Nature => "Nature",
            TaskCategory::Food => "Food",
        };
        write!(f, "{name}")
    }
}

/// A daily eco task with a fixed point reward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    pub title: String,
    pub points: u32,
    pub category: TaskCategory,
    pub completed: bool,
    /// Optional image reference for potential photo evidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Task {
    fn seed(id: &str, title: &str, points: u32, category: TaskCategory) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            points,
            category,
            completed: false,
            image: None,
        }
    }
}

/// The fixed seed list of daily tasks (105 points total).
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::seed("1", "Recycle 3+ items", 10, TaskCategory::Recycling),
        Task::seed("2", "Use a reusable bottle/cup", 5, TaskCategory::Nature),
        Task::seed("3", "Turn off lights when leaving", 5, TaskCategory::Energy),
        Task::seed("4", "Take a 5-minute shorter shower", 15, TaskCategory::Water),
        Task::seed("5", "Walk/bike instead of car", 20, TaskCategory::Transport),
        Task::seed("6", "Pick up 5 pieces of litter", 25, TaskCategory::Nature),
        Task::seed("7", "Eat one plant-based meal", 15, TaskCategory::Food),
        Task::seed("8", "Bring reusable bag shopping", 10, TaskCategory::Nature),
    ]
}
