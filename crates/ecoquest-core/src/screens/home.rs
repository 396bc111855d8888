//! Home screen: impact points, streak, level, and the daily task list.

use serde::Serialize;
use std::fmt::Write as _;

use crate::error::Result;
use crate::level::Level;
use crate::store::Session;
use crate::task::TaskCategory;

/// One task line on the home screen.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub category: TaskCategory,
    pub points: u32,
    pub completed: bool,
}

/// The home screen view-model.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub player: String,
    pub level: Level,
    pub points: u32,
    pub streak: u32,
    pub tasks: Vec<TaskRow>,
}

impl HomeView {
    /// Build from a provisioned session.
    pub fn build(session: &Session) -> Result<Self> {
        let state = session.store()?.state();
        Ok(Self {
            player: state.user.name.clone(),
            level: state.user.level,
            points: state.user.points,
            streak: state.user.streak,
            tasks: state
                .tasks
                .iter()
                .map(|t| TaskRow {
                    id: t.id.clone(),
                    title: t.title.clone(),
                    category: t.category,
                    points: t.points,
                    completed: t.completed,
                })
                .collect(),
        })
    }

    /// Render as terminal text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "EcoQuest \u{1F331}");
        let _ = writeln!(out, "Welcome back, {}! ({})", self.player, self.level);
        let _ = writeln!(out);
        let _ = writeln!(out, "Total Impact Points: {}", self.points);
        let _ = writeln!(out, "\u{1F525} {} Day Streak", self.streak);
        let _ = writeln!(out);
        let _ = writeln!(out, "Daily Eco Tasks");
        for task in &self.tasks {
            let mark = if task.completed { "x" } else { " " };
            let _ = writeln!(
                out,
                "  [{mark}] {:<2} {:<32} {} \u{2022} {} pts",
                task.id, task.title, task.category, task.points
            );
        }
        out
    }
}
