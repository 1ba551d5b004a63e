use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(story: Option<&Path>) -> Result<(), String> {
    let graph = super::load_story(story)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Kind", "Choices", "Text"]);

    for scene in graph.scenes() {
        let text = if scene.text.chars().count() > 60 {
            format!("{}...", scene.text.chars().take(57).collect::<String>())
        } else {
            scene.text.clone()
        };

        table.add_row(vec![
            scene.id.to_string(),
            super::scene_kind(&graph, scene).to_string(),
            scene.choices.len().to_string(),
            text,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} scenes", graph.len());

    Ok(())
}
