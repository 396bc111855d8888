//! Task commands for the CLI.

use clap::Subcommand;
use ecoquest_core::HomeView;

use super::open_session;

#[derive(Subcommand)]
pub enum TaskAction {
    /// List daily tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Complete one or more tasks by id and show the result
    Complete {
        /// Task ids, e.g. 1 4 6
        ids: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reset all tasks to incomplete (points are kept)
    Reset,
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;

    match action {
        TaskAction::List { json } => {
            let view = HomeView::build(&session)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view.tasks)?);
            } else {
                for task in &view.tasks {
                    let mark = if task.completed { "x" } else { " " };
                    println!(
                        "[{mark}] {:<2} {:<32} {} \u{2022} {} pts",
                        task.id, task.title, task.category, task.points
                    );
                }
            }
        }
        TaskAction::Complete { ids, json } => {
            {
                let store = session.store_mut()?;
                for id in &ids {
                    store.complete_task(id);
                }
            }
            let view = HomeView::build(&session)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", view.render());
                let events = session.store_mut()?.drain_events();
                println!("{} event(s) applied", events.len());
            }
        }
        TaskAction::Reset => {
            session.store_mut()?.reset_tasks();
            let view = HomeView::build(&session)?;
            println!(
                "Tasks reset. Lifetime points kept: {} ({})",
                view.points, view.level
            );
        }
    }
    Ok(())
}
