//! Standalone TUI binary for Adventure Quest.

use std::path::PathBuf;
use std::process;

use aq_tui::app::App;
use aq_tui::config::{DEFAULT_FADE, TuiConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "aq-tui", about = "Play Adventure Quest in the terminal", version)]
struct Args {
    /// Story document (JSON) to play instead of the built-in adventure
    #[arg(long)]
    story: Option<PathBuf>,

    /// Fade length after each choice, in milliseconds (0 disables)
    #[arg(long, default_value_t = DEFAULT_FADE.as_millis() as u64)]
    fade_ms: u64,

    /// Hide illustration references
    #[arg(long)]
    no_illustrations: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file
        && let Err(e) = aq_tui::logging::init(path)
    {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let graph = match aq_tui::loader::load_story(args.story.as_deref()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let config = TuiConfig::default()
        .with_fade_ms(args.fade_ms)
        .with_illustrations(!args.no_illustrations);

    if let Err(e) = aq_tui::terminal::run(App::new(graph, config)) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
