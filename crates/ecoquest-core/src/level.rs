//! Level tiers derived from cumulative impact points.
//!
//! A level is a pure function of the player's point total. Points never
//! decrease in this scope, so the tier progression is monotone:
//! Seed -> Sapling -> Tree -> Forest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player level tier.
///
/// Thresholds are inclusive on the lower bound:
/// Seed [0,50), Sapling [50,200), Tree [200,500), Forest [500,inf).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Seed,
    Sapling,
    Tree,
    Forest,
}

impl Level {
    /// Derive the tier for a point total.
    pub fn from_points(points: u32) -> Self {
        if points >= 500 {
            Level::Forest
        } else if points >= 200 {
            Level::Tree
        } else if points >= 50 {
            Level::Sapling
        } else {
            Level::Seed
        }
    }

    /// Minimum point total for this tier.
    pub fn min_points(&self) -> u32 {
        match self {
            Level::Seed => 0,
            Level::Sapling => 50,
            Level::Tree => 200,
            Level::Forest => 500,
        }
    }

    /// The tier after this one, if any.
    pub fn next(&self) -> Option<Level> {
        match self {
            Level::Seed => Some(Level::Sapling),
            Level::Sapling => Some(Level::Tree),
            Level::Tree => Some(Level::Forest),
            Level::Forest => None,
        }
    }

    /// Tier name without the icon.
    pub fn title(&self) -> &'static str {
        match self {
            Level::Seed => "Seed",
            Level::Sapling => "Sapling",
            Level::Tree => "Tree",
            Level::Forest => "Forest",
        }
    }

    /// Icon glyph shown next to the tier name.
    pub fn icon(&self) -> &'static str {
        match self {
            Level::Seed => "\u{1F331}",
            Level::Sapling => "\u{1F33F}",
            Level::Tree => "\u{1F333}",
            Level::Forest => "\u{1F332}",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Seed
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title(), self.icon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_values() {
        let expected = [
            (0, Level::Seed),
            (49, Level::Seed),
            (50, Level::Sapling),
            (199, Level::Sapling),
            (200, Level::Tree),
            (499, Level::Tree),
            (500, Level::Forest),
        ];
        for (points, level) in expected {
            assert_eq!(Level::from_points(points), level, "points = {points}");
        }
    }

    #[test]
    fn display_includes_icon() {
        assert_eq!(Level::Seed.to_string(), "Seed \u{1F331}");
        assert_eq!(Level::Forest.to_string(), "Forest \u{1F332}");
    }

    #[test]
    fn next_walks_the_tiers() {
        assert_eq!(Level::Seed.next(), Some(Level::Sapling));
        assert_eq!(Level::Sapling.next(), Some(Level::Tree));
        assert_eq!(Level::Tree.next(), Some(Level::Forest));
        assert_eq!(Level::Forest.next(), None);
    }

    proptest! {
        #[test]
        fn monotone_in_points(a in 0u32..10_000, b in 0u32..10_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Level::from_points(lo) <= Level::from_points(hi));
        }

        #[test]
        fn consistent_with_min_points(points in 0u32..10_000) {
            let level = Level::from_points(points);
            prop_assert!(points >= level.min_points());
            if let Some(next) = level.next() {
                prop_assert!(points < next.min_points());
            }
        }
    }
}
