//! Player profile commands for the CLI.

use clap::Subcommand;
use ecoquest_core::{Config, UserPatch};

use super::open_session;

#[derive(Subcommand)]
pub enum UserAction {
    /// Show the player profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update profile fields (also saved as config overrides)
    Update {
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New grade
        #[arg(long)]
        grade: Option<String>,
        /// New community/school group
        #[arg(long)]
        group: Option<String>,
        /// Comma-separated interests
        #[arg(long)]
        interests: Option<String>,
    },
}

pub fn run(action: UserAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;

    match action {
        UserAction::Show { json } => {
            let user = session.store()?.user();
            if json {
                println!("{}", serde_json::to_string_pretty(user)?);
            } else {
                println!("{} ({})", user.name, user.level);
                println!("{} \u{2022} {}", user.grade, user.group);
                println!("Points: {}  Streak: {}", user.points, user.streak);
                if !user.interests.is_empty() {
                    println!("Interests: {}", user.interests.join(", "));
                }
            }
        }
        UserAction::Update {
            name,
            grade,
            group,
            interests,
        } => {
            let interests: Option<Vec<String>> = interests
                .map(|s| s.split(',').map(|i| i.trim().to_string()).collect());

            let mut patch = UserPatch::new();
            patch.name = name;
            patch.grade = grade;
            patch.group = group;
            patch.interests = interests;

            if patch.is_empty() {
                println!("nothing to update");
                return Ok(());
            }

            session.store_mut()?.update_user(patch.clone());

            // Persist the override so future sessions seed from it.
            let mut config = Config::load()?;
            if let Some(name) = &patch.name {
                config.player.name = name.clone();
            }
            if let Some(grade) = &patch.grade {
                config.player.grade = grade.clone();
            }
            if let Some(group) = &patch.group {
                config.player.group = group.clone();
            }
            if let Some(interests) = &patch.interests {
                config.player.interests = interests.clone();
            }
            config.save()?;

            let user = session.store()?.user();
            println!("Profile updated: {} ({} \u{2022} {})", user.name, user.grade, user.group);
        }
    }
    Ok(())
}
