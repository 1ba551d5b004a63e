use crate::graph::SceneGraph;
use crate::scene::{Choice, Scene, SceneId};

/// ID of the scene every session starts at.
pub const START: &str = "start";
/// Ending reached by staying with the fairies.
pub const END_FAIRY: &str = "end-fairy";
/// Ending reached by taking the treasure.
pub const END_TREASURE: &str = "end-treasure";
/// Ending reached at the mountain peak.
pub const END_PEACE: &str = "end-peace";

/// Label of the choice every ending offers.
pub const PLAY_AGAIN: &str = "Play Again";

const IMG: &str = "https://images.unsplash.com";

fn image(photo: &str, width: u32) -> String {
    format!("{IMG}/photo-{photo}?auto=format&fit=crop&q=80&w={width}")
}

fn backdrop(photo: &str) -> String {
    image(photo, 2000)
}

fn thumbnail(photo: &str) -> String {
    image(photo, 500)
}

fn ending(id: &str, text: &str, photo: &str) -> Scene {
    Scene::new(id, text)
        .with_image(backdrop(photo))
        .with_choice(Choice::new(PLAY_AGAIN, START))
}

impl SceneGraph {
    /// The built-in adventure: a crossroads hub, three paths, three endings.
    pub fn adventure() -> Self {
        let scenes = vec![
            Scene::new(START, "Welcome to the Adventure!")
                .with_image(backdrop("1518562180175-34a163b1a9a6"))
                .with_choice(Choice::new("Begin Journey", "crossroads")),
            Scene::new(
                "crossroads",
                "You find yourself at a mysterious crossroads. Three paths lie before you.",
            )
            .with_image(backdrop("1542273917363-3b1817f69a2d"))
            .with_choice(
                Choice::new("Take the misty forest path", "forest")
                    .with_image(thumbnail("1511497584788-876760111969")),
            )
            .with_choice(
                Choice::new("Enter the ancient ruins", "ruins")
                    .with_image(thumbnail("1549893072-4bc678117f45")),
            )
            .with_choice(
                Choice::new("Follow the mountain trail", "mountain")
                    .with_image(thumbnail("1464822759023-fed622ff2c3b")),
            ),
            Scene::new(
                "forest",
                "The forest is dense and magical. You hear strange whispers.",
            )
            .with_image(backdrop("1511497584788-876760111969"))
            .with_choice(Choice::new("Follow the whispers", "fairy"))
            .with_choice(Choice::new("Return to crossroads", "crossroads")),
            Scene::new("ruins", "Ancient stones tell tales of forgotten civilizations.")
                .with_image(backdrop("1549893072-4bc678117f45"))
                .with_choice(Choice::new("Explore deeper", "treasure"))
                .with_choice(Choice::new("Return to crossroads", "crossroads")),
            Scene::new(
                "mountain",
                "The air gets thinner as you climb the mountain path.",
            )
            .with_image(backdrop("1464822759023-fed622ff2c3b"))
            .with_choice(Choice::new("Climb to the peak", "peak"))
            .with_choice(Choice::new("Return to crossroads", "crossroads")),
            Scene::new(
                "fairy",
                "You discover a fairy grove! The magical beings offer you eternal happiness in their realm.",
            )
            .with_image(backdrop("1520813792240-56fc4a3765a7"))
            .with_choice(Choice::new("Accept and end your journey", END_FAIRY))
            .with_choice(Choice::new("Return to the forest", "forest")),
            Scene::new(
                "treasure",
                "You've found an ancient treasure chamber filled with gold!",
            )
            .with_image(backdrop("1589656966895-2f33e7653819"))
            .with_choice(Choice::new(
                "Take the treasure and end your journey",
                END_TREASURE,
            ))
            .with_choice(Choice::new("Return to the ruins", "ruins")),
            Scene::new(
                "peak",
                "From the mountain peak, you can see all the realms. You feel at peace.",
            )
            .with_image(backdrop("1483728642387-6c3bdd6c93e5"))
            .with_choice(Choice::new("Embrace peace and end your journey", END_PEACE))
            .with_choice(Choice::new("Return to the mountain path", "mountain")),
            ending(
                END_FAIRY,
                "You chose to stay in the fairy realm, living in eternal bliss and magic.",
                "1639628735078-ed2f038a193e",
            ),
            ending(
                END_TREASURE,
                "With the ancient treasure, you become the wealthiest person in all the realms.",
                "1512428813834-c702c7702b78",
            ),
            ending(
                END_PEACE,
                "You found inner peace and wisdom atop the mountain, becoming a legendary sage.",
                "1682686580003-22d3d65399a8",
            ),
        ];

        // The table above is covered by `adventure_is_well_formed`.
        SceneGraph::assemble(SceneId::from(START), scenes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adventure_is_well_formed() {
        let graph = SceneGraph::adventure();
        let issues = graph.check();
        assert!(issues.is_empty(), "{issues:?}");
        assert_eq!(graph.len(), 11);
    }

    #[test]
    fn every_destination_resolves() {
        let graph = SceneGraph::adventure();
        for (scene, choice) in graph.edges() {
            assert!(
                graph.get_scene(choice.next_scene.as_str()).is_ok(),
                "{} -> {}",
                scene.id,
                choice.next_scene
            );
        }
    }

    #[test]
    fn three_endings_and_a_hub() {
        let graph = SceneGraph::adventure();
        let endings: Vec<&str> = graph.endings().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(endings, [END_FAIRY, END_TREASURE, END_PEACE]);

        let crossroads = graph.get_scene("crossroads").unwrap();
        assert_eq!(crossroads.choices.len(), 3);
        assert!(graph.hubs().iter().any(|s| s.id == "crossroads"));
    }

    #[test]
    fn endings_only_offer_play_again() {
        let graph = SceneGraph::adventure();
        for ending in graph.endings() {
            assert_eq!(ending.choices.len(), 1);
            assert_eq!(ending.choices[0].text, PLAY_AGAIN);
            assert_eq!(ending.choices[0].next_scene, START);
        }
    }

    #[test]
    fn every_scene_is_reachable() {
        let graph = SceneGraph::adventure();
        assert_eq!(graph.reachable_from(START).len(), graph.len());
    }

    #[test]
    fn crossroads_choices_carry_thumbnails() {
        let graph = SceneGraph::adventure();
        let crossroads = graph.get_scene("crossroads").unwrap();
        let forest = &crossroads.choices[0];
        assert_eq!(forest.text, "Take the misty forest path");
        insta::assert_snapshot!(
            forest.image.as_deref().unwrap_or_default(),
            @"https://images.unsplash.com/photo-1511497584788-876760111969?auto=format&fit=crop&q=80&w=500"
        );
    }
}
