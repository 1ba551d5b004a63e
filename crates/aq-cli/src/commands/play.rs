//! Launch the aq-tui standalone binary.

use std::path::Path;

/// Launch the aq-tui standalone binary.
pub fn run(story: Option<&Path>) -> Result<(), String> {
    let mut command = std::process::Command::new("aq-tui");
    if let Some(path) = story {
        command.arg("--story").arg(path);
    }

    match command.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("aq-tui exited with {s}")),
        Err(_) => {
            Err("aq-tui binary not found. Install with: cargo install --path crates/aq-tui".into())
        }
    }
}
