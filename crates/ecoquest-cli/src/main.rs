use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "ecoquest-cli", version, about = "EcoQuest CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Home screen: impact points and daily tasks
    Home {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Community screen: leaderboard and weekly challenges
    Community {
        /// Leaderboard scope tab: friends, school, or city
        #[arg(long, default_value = "school")]
        scope: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Profile screen: stats and badges
    Profile {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Badge management
    Badge {
        #[command(subcommand)]
        action: commands::badge::BadgeAction,
    },
    /// Player profile management
    User {
        #[command(subcommand)]
        action: commands::user::UserAction,
    },
    /// Interactive session (mutations live until exit)
    Session,
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Home { json } => commands::screen::run_home(json),
        Commands::Community { scope, json } => commands::screen::run_community(&scope, json),
        Commands::Profile { json } => commands::screen::run_profile(json),
        Commands::Task { action } => commands::task::run(action),
        Commands::Badge { action } => commands::badge::run(action),
        Commands::User { action } => commands::user::run(action),
        Commands::Session => commands::session::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "ecoquest-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
