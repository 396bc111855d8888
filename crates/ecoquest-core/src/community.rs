//! Community data: the hard-coded leaderboard and weekly challenges.
//!
//! There is no server-side leaderboard in this scope. The live player's
//! point total is merged into a fixed list under the "You" entry and the
//! list is re-sorted locally. Scope tabs (Friends/School/City) are
//! presentational only: every scope currently shows the same community
//! list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Leaderboard scope tab.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardScope {
    Friends,
    School,
    City,
}

impl LeaderboardScope {
    pub const ALL: [LeaderboardScope; 3] = [
        LeaderboardScope::Friends,
        LeaderboardScope::School,
        LeaderboardScope::City,
    ];
}

impl Default for LeaderboardScope {
    fn default() -> Self {
        LeaderboardScope::School
    }
}

impl fmt::Display for LeaderboardScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeaderboardScope::Friends => "Friends",
            LeaderboardScope::School => "School",
            LeaderboardScope::City => "City",
        };
        write!(f, "{name}")
    }
}

impl FromStr for LeaderboardScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "friends" => Ok(LeaderboardScope::Friends),
            "school" => Ok(LeaderboardScope::School),
            "city" => Ok(LeaderboardScope::City),
            other => Err(format!(
                "unknown leaderboard scope '{other}' (expected friends, school, or city)"
            )),
        }
    }
}

/// A seed leaderboard row. The `you` row carries the live point total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub points: u32,
    pub you: bool,
}

/// A leaderboard row after merging and sorting, rank assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub points: u32,
    pub you: bool,
}

/// The hard-coded community leaderboard, in seed order.
pub fn seed_leaderboard() -> Vec<LeaderboardEntry> {
    fn entry(id: &str, name: &str, points: u32, you: bool) -> LeaderboardEntry {
        LeaderboardEntry {
            id: id.to_string(),
            name: name.to_string(),
            points,
            you,
        }
    }
    vec![
        entry("1", "Sarah J.", 1250, false),
        entry("2", "Mike T.", 1100, false),
        entry("3", "Emma W.", 980, false),
        entry("4", "You", 0, true),
        entry("5", "Alex R.", 850, false),
    ]
}

/// Merge the live point total into the seed list, sort descending by
/// points (stable, so ties keep seed order) and assign 1-based ranks.
pub fn ranked_leaderboard(scope: LeaderboardScope, user_points: u32) -> Vec<RankedEntry> {
    let _ = scope; // presentational only, see module docs
    let mut entries = seed_leaderboard();
    for entry in &mut entries {
        if entry.you {
            entry.points = user_points;
        }
    }
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| RankedEntry {
            rank: i + 1,
            name: e.name,
            points: e.points,
            you: e.you,
        })
        .collect()
}

/// A weekly community challenge card. Static in this scope: counts and
/// progress come from seed data and there is no join/leave operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub participants: u32,
    /// Completion fraction in [0, 1]
    pub progress: f64,
}

/// The hard-coded weekly challenges.
pub fn seed_challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: "1".to_string(),
            title: "Zero-Waste Week".to_string(),
            description: "Create no trash for a whole week!".to_string(),
            participants: 120,
            progress: 0.4,
        },
        Challenge {
            id: "2".to_string(),
            title: "Bike-to-School".to_string(),
            description: "Bike to school 3 times this week.".to_string(),
            participants: 85,
            progress: 0.7,
        },
    ]
}
