//! Integration tests for the `aq` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn aq() -> Command {
    Command::cargo_bin("aq").unwrap()
}

/// A story whose only choice points at a scene that does not exist.
fn broken_story() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("story.json"),
        r#"{
  "start": "start",
  "scenes": [
    {
      "id": "start",
      "text": "A door.",
      "choices": [{ "text": "Open it", "next_scene": "hall" }]
    }
  ]
}"#,
    )
    .unwrap();
    dir
}

// -- check --

#[test]
fn check_builtin_story() {
    aq().arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("11 scenes"))
        .stdout(predicate::str::contains("3 endings"));
}

#[test]
fn check_reports_dangling_choice() {
    let dir = broken_story();
    aq().args(["check", "--story"])
        .arg(dir.path().join("story.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("hall"))
        .stderr(predicate::str::contains("integrity check"));
}

#[test]
fn check_missing_file_fails() {
    aq().args(["check", "--story", "/nonexistent/story.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn check_malformed_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("story.json");
    fs::write(&path, "{ not json").unwrap();
    aq().arg("check")
        .arg("--story")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// -- scenes / show / graph --

#[test]
fn scenes_lists_every_scene() {
    aq().arg("scenes")
        .assert()
        .success()
        .stdout(predicate::str::contains("crossroads"))
        .stdout(predicate::str::contains("end-peace"))
        .stdout(predicate::str::contains("hub"))
        .stdout(predicate::str::contains("11 scenes"));
}

#[test]
fn show_scene_numbers_choices() {
    aq().args(["show", "crossroads"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mysterious crossroads"))
        .stdout(predicate::str::contains("[1] Take the misty forest path"))
        .stdout(predicate::str::contains("[3] Follow the mountain trail"));
}

#[test]
fn show_unknown_scene_fails() {
    aq().args(["show", "dungeon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scene"));
}

#[test]
fn graph_lists_edges() {
    aq().arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("[start] --Begin Journey--> [crossroads]"))
        .stdout(predicate::str::contains("[end-fairy] --Play Again--> [start]"))
        .stdout(predicate::str::contains("hubs: crossroads"));
}

// -- walk --

#[test]
fn walk_to_fairy_ending() {
    aq().args([
        "walk",
        "--name",
        "Guru",
        "--age",
        "30",
        "Begin Journey",
        "Take the misty forest path",
        "Follow the whispers",
        "Accept and end your journey",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Welcome, Guru!"))
    .stdout(predicate::str::contains("end-fairy"))
    .stdout(predicate::str::contains("Moves Made: 4"))
    .stdout(predicate::str::contains("4. Accept and end your journey"));
}

#[test]
fn walk_accepts_numbers_and_loose_labels() {
    aq().args([
        "walk", "--name", "Guru", "--age", "30", "1", "enter the ancient ruin",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "\"enter the ancient ruin\" matched \"Enter the ancient ruins\" at crossroads",
    ))
    .stdout(predicate::str::contains("Ancient stones"))
    .stdout(predicate::str::contains("Moves Made: 2"));
}

#[test]
fn walk_play_again_clears_progress() {
    aq().args([
        "walk",
        "--name",
        "Guru",
        "--age",
        "30",
        "1",
        "3",
        "1",
        "1",
        "Play Again",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Moves Made: 0"))
    .stdout(predicate::str::contains("Choice History").not());
}

#[test]
fn walk_rejects_young_player() {
    aq().args(["walk", "--name", "Guru", "--age", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 years old"))
        .stderr(predicate::str::contains("name:").not());
}

#[test]
fn walk_reports_both_fields() {
    aq().args(["walk", "--name", "R2D2", "--age", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name: Please use only letters"))
        .stderr(predicate::str::contains("age: Please enter a valid age"));
}

#[test]
fn walk_unknown_choice_fails() {
    aq().args(["walk", "--name", "Guru", "--age", "30", "Fly away"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at scene \"start\""));
}

#[test]
fn walk_refuses_label_from_another_scene() {
    aq().args([
        "walk",
        "--name",
        "Guru",
        "--age",
        "30",
        "1",
        "1",
        "Return to the ruins",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "at scene \"forest\": no choice matches \"Return to the ruins\"",
    ))
    .stdout(predicate::str::contains("Moves Made").not());
}

#[test]
fn walk_exact_labels_are_not_reported_as_matches() {
    aq().args(["walk", "--name", "Guru", "--age", "30", "Begin Journey"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matched").not());
}

// -- export --

#[test]
fn export_to_stdout() {
    aq().arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"start\": \"start\""))
        .stdout(predicate::str::contains("\"next_scene\": \"crossroads\""));
}

#[test]
fn export_round_trips_through_check() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("adventure.json");

    aq().args(["export", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 11 scenes"));

    assert!(path.exists());

    aq().args(["check", "--story"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}
