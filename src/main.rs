use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;

#[derive(Parser)]
#[command(name = "runway")]
#[command(version, about = "Four-lane project tracking board")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a runway workspace in the current directory
    Init,
    /// Add a new project (starts parked)
    Add {
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Strategic goal this project serves
        #[arg(long)]
        goal: Option<String>,
        /// Display color, e.g. "#ff8800"
        #[arg(long)]
        color: Option<String>,
    },
    /// Render the four-lane board
    Board,
    /// Show lane counts, capacity usage, and insights
    Status,
    /// Print the advisor's current hints
    Insights,
    /// Move a project to a lane (parked, queued, active, archived)
    Move { project: String, lane: String },
    /// Move a project into the active lane
    Promote { project: String },
    /// Take an active project back to parked
    Demote { project: String },
    /// Toggle a project between parked and queued
    Queue { project: String },
    /// Archive a project
    Archive { project: String },
    /// Restore an archived project to parked
    Restore { project: String },
    /// Delete a project permanently
    Remove {
        project: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// View or validate configuration
    Config {
        /// Only report configuration warnings
        #[arg(long)]
        validate: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "runway=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUNWAY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let project_dir = match &cli.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init => cmd::cmd_init(&project_dir),
        Commands::Add {
            name,
            description,
            goal,
            color,
        } => cmd::cmd_add(&project_dir, &name, &description, goal, color),
        Commands::Board => cmd::cmd_board(&project_dir),
        Commands::Status => cmd::cmd_status(&project_dir),
        Commands::Insights => cmd::cmd_insights(&project_dir),
        Commands::Move { project, lane } => cmd::cmd_move(&project_dir, &project, &lane),
        Commands::Promote { project } => cmd::cmd_promote(&project_dir, &project),
        Commands::Demote { project } => cmd::cmd_demote(&project_dir, &project),
        Commands::Queue { project } => cmd::cmd_queue(&project_dir, &project),
        Commands::Archive { project } => cmd::cmd_archive(&project_dir, &project),
        Commands::Restore { project } => cmd::cmd_restore(&project_dir, &project),
        Commands::Remove { project, force } => cmd::cmd_remove(&project_dir, &project, force),
        Commands::Config { validate } => cmd::cmd_config(&project_dir, validate),
    }
}
