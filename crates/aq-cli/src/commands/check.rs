use std::path::Path;

pub fn run(story: Option<&Path>) -> Result<(), String> {
    let graph = super::load_story(story)?;

    let issues = graph.check();
    if !issues.is_empty() {
        super::print_issues(&issues);
        return Err("story failed its integrity check".into());
    }

    println!("  All checks passed for the {}.", super::story_name(story));
    println!(
        "  {} scenes, {} choices, {} endings",
        graph.len(),
        graph.edge_count(),
        graph.endings().len()
    );

    Ok(())
}
