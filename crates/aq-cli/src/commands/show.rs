use std::path::Path;

use colored::Colorize;

pub fn run(story: Option<&Path>, id: &str) -> Result<(), String> {
    let graph = super::load_story(story)?;
    let scene = graph.get_scene(id).map_err(|e| e.to_string())?;

    println!(
        "  {} [{}]",
        scene.id.as_str().bold(),
        super::scene_kind(&graph, scene).dimmed()
    );
    println!();
    println!("  {}", scene.text);
    if let Some(image) = &scene.image {
        println!("  {}", image.dimmed());
    }
    println!();

    for (i, choice) in scene.choices.iter().enumerate() {
        println!(
            "  [{}] {} --> {}",
            i + 1,
            choice.text,
            choice.next_scene.as_str().cyan()
        );
    }

    Ok(())
}
