//! Profile screen: player identity, stats, and the badge grid.
//!
//! Pure read/display; no mutation triggers live here.

use serde::Serialize;
use std::fmt::Write as _;

use crate::error::Result;
use crate::level::Level;
use crate::store::Session;

/// One badge card in the grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BadgeCard {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub unlocked: bool,
}

/// The profile screen view-model.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    /// Avatar placeholder: first character of the player name.
    pub initial: String,
    pub name: String,
    pub grade: String,
    pub group: String,
    pub level: Level,
    pub points: u32,
    pub streak: u32,
    pub badges: Vec<BadgeCard>,
}

impl ProfileView {
    /// Build from a provisioned session.
    pub fn build(session: &Session) -> Result<Self> {
        let user = session.store()?.user();
        Ok(Self {
            initial: user.name.chars().next().map(String::from).unwrap_or_default(),
            name: user.name.clone(),
            grade: user.grade.clone(),
            group: user.group.clone(),
            level: user.level,
            points: user.points,
            streak: user.streak,
            badges: user
                .badges
                .iter()
                .map(|b| BadgeCard {
                    id: b.id.clone(),
                    name: b.name.clone(),
                    icon: b.icon.clone(),
                    description: b.description.clone(),
                    unlocked: b.unlocked,
                })
                .collect(),
        })
    }

    /// Render as terminal text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "({})", self.initial);
        let _ = writeln!(out, "{}", self.name);
        let _ = writeln!(out, "{} \u{2022} {}", self.grade, self.group);
        let _ = writeln!(out, "{}", self.level);
        let _ = writeln!(out);
        let _ = writeln!(out, "Stats");
        let _ = writeln!(out, "  Points: {}", self.points);
        let _ = writeln!(out, "  Day Streak: {}", self.streak);
        let _ = writeln!(out);
        let _ = writeln!(out, "Badges");
        for badge in &self.badges {
            let state = if badge.unlocked { "unlocked" } else { "locked" };
            let _ = writeln!(out, "  {} {:<16} ({state})", badge.icon, badge.name);
        }
        out
    }
}
