use std::path::Path;

use aq_fiction::{MatchKind, Registration, Session};
use colored::Colorize;

pub fn run(story: Option<&Path>, name: &str, age: &str, choices: &[String]) -> Result<(), String> {
    let graph = super::load_story(story)?;

    let player = Registration::new(name, age).submit().map_err(|errors| {
        if let Some(e) = &errors.name {
            eprintln!("  name: {e}");
        }
        if let Some(e) = &errors.age {
            eprintln!("  age: {e}");
        }
        "registration rejected".to_string()
    })?;

    let mut session = Session::new(graph);
    session.start(player);

    for input in choices {
        let at = session.current_id().clone();
        let (index, kind) = session
            .resolve(input)
            .map_err(|e| format!("at scene \"{at}\": {e}"))?;

        if kind == MatchKind::Fuzzy {
            let scene = session.current_scene().map_err(|e| e.to_string())?;
            if let Some(choice) = scene.choices.get(index) {
                println!("  \"{input}\" matched \"{}\" at {at}", choice.text);
            }
        }

        session
            .choose(index)
            .map_err(|e| format!("at scene \"{at}\": {e}"))?;
    }

    if let Some(welcome) = session.welcome() {
        println!("  {}", welcome.bold());
    }
    println!();

    let scene = session.current_scene().map_err(|e| e.to_string())?;
    let marker = if session.is_terminal() {
        " (ending)".yellow().to_string()
    } else {
        String::new()
    };
    println!("  {}{marker}", scene.id.as_str().bold());
    println!("  {}", scene.text);
    for (i, choice) in scene.choices.iter().enumerate() {
        println!("    [{}] {}", i + 1, choice.text);
    }
    println!();

    println!("  Moves Made: {}", session.moves());
    if !session.history().is_empty() {
        println!("  Choice History:");
        for label in session.history_labels() {
            println!("    {label}");
        }
    }

    Ok(())
}
