//! Player record and the typed partial-update patch.
//!
//! Points, level, and badges never move through `UserPatch`; they only
//! change via their dedicated store operations so the points/level
//! consistency invariant cannot be broken by a profile edit.

use serde::{Deserialize, Serialize};

use crate::badge::{seed_badges, Badge};
use crate::level::Level;

/// The player record held by the state store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub grade: String,
    /// Community or school the player belongs to
    pub group: String,
    pub interests: Vec<String>,
    pub points: u32,
    /// Consecutive-day activity counter; carried in the model but not
    /// advanced by any operation in this scope.
    pub streak: u32,
    pub badges: Vec<Badge>,
    /// Derived from `points`; kept in sync by the store.
    pub level: Level,
}

impl User {
    /// The seed player created at session start.
    pub fn seed() -> Self {
        Self {
            name: "Eco Warrior".to_string(),
            grade: "10th".to_string(),
            group: "Green High School".to_string(),
            interests: Vec::new(),
            points: 0,
            streak: 0,
            badges: seed_badges(),
            level: Level::Seed,
        }
    }

    /// Apply a profile patch. Returns true if any field was set.
    pub fn apply(&mut self, patch: &UserPatch) -> bool {
        let mut changed = false;
        if let Some(name) = &patch.name {
            self.name = name.clone();
            changed = true;
        }
        if let Some(grade) = &patch.grade {
            self.grade = grade.clone();
            changed = true;
        }
        if let Some(group) = &patch.group {
            self.group = group.clone();
            changed = true;
        }
        if let Some(interests) = &patch.interests {
            self.interests = interests.clone();
            changed = true;
        }
        if let Some(streak) = patch.streak {
            self.streak = streak;
            changed = true;
        }
        changed
    }
}

/// Typed partial update for the player profile.
///
/// Enumerates exactly the fields that are legally partial-updatable;
/// there is no dynamic merge path into points, level, or badges.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn interests(mut self, interests: Vec<String>) -> Self {
        self.interests = Some(interests);
        self
    }

    pub fn streak(mut self, streak: u32) -> Self {
        self.streak = Some(streak);
        self
    }

    /// True when no field is set; applying an empty patch is a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.grade.is_none()
            && self.group.is_none()
            && self.interests.is_none()
            && self.streak.is_none()
    }
}
