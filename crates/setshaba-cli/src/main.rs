#![forbid(unsafe_code)]

mod cmd;
mod config;
mod output;

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "setshaba: community issue reporting and tracking portal",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "List and filter community issues")]
    Issues(cmd::issues::IssuesArgs),

    #[command(about = "Report a new issue")]
    Report(cmd::report::ReportArgs),

    #[command(about = "Update an issue's status or progress")]
    Update(cmd::update::UpdateArgs),

    #[command(about = "Citizen home view: stats, urgent issues, latest updates")]
    Home,

    #[command(about = "Admin dashboard: aggregate stats and urgent issues")]
    Dashboard,

    #[command(about = "List community events")]
    Events,

    #[command(about = "List citizen feedback, or submit your own")]
    Feedback(cmd::feedback::FeedbackArgs),

    #[command(about = "List municipal announcements")]
    Announcements,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let user = config::load_user_config()?;
    let mode = config::resolve_output(cli.json, user.output, env::var("SETSHABA_FORMAT").ok());
    tracing::debug!(?mode, "output mode resolved");

    // One session: seed once, mutate through the store for the rest of the
    // run. Durable persistence is out of scope.
    let now = Utc::now();
    let mut state = setshaba_core::seed::seed_state(now);

    match cli.command {
        Commands::Issues(args) => cmd::issues::run(&state, &args, mode),
        Commands::Report(args) => cmd::report::run(&mut state, args, mode, now),
        Commands::Update(args) => cmd::update::run(&mut state, &args, mode),
        Commands::Home => cmd::home::run(&state, mode),
        Commands::Dashboard => cmd::dashboard::run(&mut state, mode, now),
        Commands::Events => cmd::events::run(&state, mode, now),
        Commands::Feedback(args) => cmd::feedback::run(&mut state, args, mode, now),
        Commands::Announcements => cmd::announcements::run(&state, mode),
    }
}
