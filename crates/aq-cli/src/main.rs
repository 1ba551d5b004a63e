//! CLI frontend for Adventure Quest.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aq",
    about = "Adventure Quest: a choose-your-own-adventure story engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the story in the terminal UI
    Play {
        /// Story document (JSON); defaults to the built-in adventure
        #[arg(short, long)]
        story: Option<PathBuf>,
    },

    /// Run the scene graph integrity checks
    Check {
        /// Story document (JSON); defaults to the built-in adventure
        #[arg(short, long)]
        story: Option<PathBuf>,
    },

    /// List all scenes
    Scenes {
        /// Story document (JSON); defaults to the built-in adventure
        #[arg(short, long)]
        story: Option<PathBuf>,
    },

    /// Show one scene and its choices
    Show {
        /// Scene ID
        id: String,

        /// Story document (JSON); defaults to the built-in adventure
        #[arg(short, long)]
        story: Option<PathBuf>,
    },

    /// Display every choice as an edge between scenes
    Graph {
        /// Story document (JSON); defaults to the built-in adventure
        #[arg(short, long)]
        story: Option<PathBuf>,
    },

    /// Register a player and apply a sequence of choices non-interactively
    Walk {
        /// Player name
        #[arg(long)]
        name: String,

        /// Player age
        #[arg(long)]
        age: String,

        /// Choices to apply, by label or 1-based number
        choices: Vec<String>,

        /// Story document (JSON); defaults to the built-in adventure
        #[arg(short, long)]
        story: Option<PathBuf>,
    },

    /// Write the story as a JSON document
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Story document (JSON); defaults to the built-in adventure
        #[arg(short, long)]
        story: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { story } => commands::play::run(story.as_deref()),
        Commands::Check { story } => commands::check::run(story.as_deref()),
        Commands::Scenes { story } => commands::scenes::run(story.as_deref()),
        Commands::Show { id, story } => commands::show::run(story.as_deref(), &id),
        Commands::Graph { story } => commands::graph::run(story.as_deref()),
        Commands::Walk {
            name,
            age,
            choices,
            story,
        } => commands::walk::run(story.as_deref(), &name, &age, &choices),
        Commands::Export { output, story } => {
            commands::export::run(story.as_deref(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
