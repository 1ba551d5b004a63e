use std::path::Path;

pub fn run(story: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let graph = super::load_story(story)?;
    let json = graph.to_json().map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            println!("  Exported {} scenes to {}", graph.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
