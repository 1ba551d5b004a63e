use std::path::Path;

pub fn run(story: Option<&Path>) -> Result<(), String> {
    let graph = super::load_story(story)?;

    println!("  Scene graph for the {}", super::story_name(story));
    println!();

    for (scene, choice) in graph.edges() {
        println!(
            "  [{}] --{}--> [{}]",
            scene.id, choice.text, choice.next_scene
        );
    }

    println!();
    println!(
        "  {} scenes, {} choices",
        graph.len(),
        graph.edge_count()
    );
    let hubs: Vec<&str> = graph.hubs().into_iter().map(|s| s.id.as_str()).collect();
    let endings: Vec<&str> = graph.endings().into_iter().map(|s| s.id.as_str()).collect();
    println!("  start: {}", graph.start());
    println!("  hubs: {}", hubs.join(", "));
    println!("  endings: {}", endings.join(", "));

    Ok(())
}
