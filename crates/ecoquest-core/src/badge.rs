//! Achievement badges and the seed badge list.

use serde::{Deserialize, Serialize};

/// A persistent achievement flag with a one-way unlock transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub name: String,
    /// Icon glyph shown on the badge card
    pub icon: String,
    pub description: String,
    pub unlocked: bool,
}

impl Badge {
    fn seed(id: &str, name: &str, icon: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            unlocked: false,
        }
    }
}

/// The fixed seed list of badges, all locked.
pub fn seed_badges() -> Vec<Badge> {
    vec![
        Badge::seed(
            "water-saver",
            "Water Saver",
            "\u{1F4A7}",
            "Save 100 gallons of water",
        ),
        Badge::seed(
            "zero-waste",
            "Zero-Waste Hero",
            "\u{267B}\u{FE0F}",
            "Complete 10 recycling tasks",
        ),
        Badge::seed(
            "energy-star",
            "Energy Star",
            "\u{26A1}",
            "Save energy for 7 days straight",
        ),
    ]
}
