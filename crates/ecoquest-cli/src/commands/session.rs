//! Interactive session: one provisioning scope, many mutations.
//!
//! This is where the mutation -> re-render cycle is visible: completing
//! a task and then asking for a screen shows the updated state, and
//! `events` drains the pending event queue.

use std::io::{self, BufRead, Write};

use ecoquest_core::{CommunityView, HomeView, LeaderboardScope, ProfileView, UserPatch};

use super::open_session;

const HELP: &str = "\
commands:
  home                     render the home screen
  community [scope]        render the community screen (friends|school|city)
  profile                  render the profile screen
  complete <id> [<id>...]  complete tasks
  reset                    reset tasks (points are kept)
  unlock <badge-id>        unlock a badge
  name <new name>          rename the player
  events                   drain and print pending events
  help                     show this help
  quit                     exit";

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    let mut scope = LeaderboardScope::default();

    println!("EcoQuest interactive session (state lives until exit)");
    println!("{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = tokens.split_first() else {
            continue;
        };

        match cmd {
            "home" => print!("{}", HomeView::build(&session)?.render()),
            "community" => {
                if let Some(arg) = args.first() {
                    match arg.parse() {
                        Ok(parsed) => scope = parsed,
                        Err(e) => {
                            println!("{e}");
                            continue;
                        }
                    }
                }
                print!("{}", CommunityView::build(&session, scope)?.render());
            }
            "profile" => print!("{}", ProfileView::build(&session)?.render()),
            "complete" => {
                if args.is_empty() {
                    println!("usage: complete <id> [<id>...]");
                    continue;
                }
                let store = session.store_mut()?;
                for id in args {
                    store.complete_task(id);
                }
                let user = session.store()?.user();
                println!("total: {} pts ({})", user.points, user.level);
            }
            "reset" => {
                session.store_mut()?.reset_tasks();
                println!("tasks reset");
            }
            "unlock" => match args.first() {
                Some(id) => {
                    session.store_mut()?.unlock_badge(id);
                    println!("ok");
                }
                None => println!("usage: unlock <badge-id>"),
            },
            "name" => {
                if args.is_empty() {
                    println!("usage: name <new name>");
                    continue;
                }
                let name = args.join(" ");
                session.store_mut()?.update_user(UserPatch::new().name(name));
                println!("ok");
            }
            "events" => {
                let events = session.store_mut()?.drain_events();
                if events.is_empty() {
                    println!("no pending events");
                } else {
                    println!("{}", serde_json::to_string_pretty(&events)?);
                }
            }
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}' (try 'help')"),
        }
    }
    Ok(())
}
