//! Badge commands for the CLI.

use clap::Subcommand;

use super::open_session;

#[derive(Subcommand)]
pub enum BadgeAction {
    /// List badges and their lock state
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Unlock a badge by id
    Unlock {
        /// Badge id, e.g. water-saver
        id: String,
    },
}

pub fn run(action: BadgeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;

    match action {
        BadgeAction::List { json } => {
            let badges = &session.store()?.user().badges;
            if json {
                println!("{}", serde_json::to_string_pretty(badges)?);
            } else {
                for badge in badges {
                    let state = if badge.unlocked { "unlocked" } else { "locked" };
                    println!(
                        "{} {:<16} {:<10} {}",
                        badge.icon, badge.name, state, badge.description
                    );
                }
            }
        }
        BadgeAction::Unlock { id } => {
            session.store_mut()?.unlock_badge(&id);
            let badges = &session.store()?.user().badges;
            match badges.iter().find(|b| b.id == id) {
                Some(badge) => println!("{} {} unlocked", badge.icon, badge.name),
                None => println!("no badge with id '{id}' (nothing changed)"),
            }
        }
    }
    Ok(())
}
