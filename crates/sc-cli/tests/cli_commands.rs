//! Integration tests for the sc-cli command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A catalog with one show whose graph has an edge to an undeclared
/// character.
fn dangling_catalog() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
  "shows": [
    {
      "title": "Dark",
      "genre": "Mystery",
      "ratings": [
        { "source": "Douban", "score": "9.0" },
        { "source": "IMDb", "score": "8.7" }
      ],
      "summary": "Time travel in a small town.",
      "characters": [{ "name": "Jonas" }, { "name": "Martha" }],
      "relationships": [
        { "source": "Jonas", "target": "Martha", "label": "sweethearts" },
        { "source": "Jonas", "target": "Adam", "label": "future self" }
      ],
      "seasons": [
        { "label": "Season 1", "episodes": ["E01 Secrets - Mikkel disappears."] }
      ],
      "quiz": [
        {
          "prompt": "Where is the passage?",
          "options": ["The cave", "The school"],
          "answer": "The cave"
        }
      ]
    }
  ]
}
"#,
    )
    .unwrap();
    (dir, path)
}

fn series() -> Command {
    Command::cargo_bin("series").unwrap()
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_builtin_catalog() {
    series()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Stranger Things")
                .and(predicate::str::contains("Game of Thrones"))
                .and(predicate::str::contains("Breaking Bad"))
                .and(predicate::str::contains("3 shows")),
        );
}

#[test]
fn list_fails_on_missing_catalog() {
    series()
        .args(["--catalog", "/nonexistent/catalog.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot read"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_prints_all_sections() {
    series()
        .args(["show", "breaking bad"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Breaking Bad (绝命毒师)")
                .and(predicate::str::contains("Douban: 9.6 | IMDb: 9.5"))
                .and(predicate::str::contains(
                    "[Walter White] --partners--> [Jesse Pinkman]",
                ))
                .and(predicate::str::contains("E16 Felina"))
                .and(predicate::str::contains("Quiz (question 1 of 4)")),
        );
}

#[test]
fn show_single_section() {
    series()
        .args(["show", "Stranger Things", "--section", "quiz"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("What is Eleven's favourite food?")
                .and(predicate::str::contains("Relationships").not()),
        );
}

#[test]
fn show_unknown_section() {
    series()
        .args(["show", "Stranger Things", "--section", "cast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown section"));
}

#[test]
fn show_fails_unknown_title() {
    series()
        .args(["show", "The Wire"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("show not found: \"The Wire\""));
}

#[test]
fn show_renders_graph_error_inline() {
    let (_dir, path) = dangling_catalog();
    series()
        .args(["--catalog", path.to_str().unwrap(), "show", "Dark"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unavailable: relationship \"future self\"")
                .and(predicate::str::contains("E01 Secrets"))
                .and(predicate::str::contains("Genre: Mystery")),
        );
}

// ---------------------------------------------------------------------------
// graph
// ---------------------------------------------------------------------------

#[test]
fn graph_lists_relationships() {
    series()
        .args(["graph", "Game of Thrones"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Relationship graph for 'Game of Thrones'")
                .and(predicate::str::contains("[Arya] --sisters--> [Sansa]"))
                .and(predicate::str::contains("7 characters, 7 relationships")),
        );
}

#[test]
fn graph_focused_character() {
    series()
        .args(["graph", "Breaking Bad", "--focus", "mike ehrmantraut"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Graph for: Mike Ehrmantraut")
                .and(predicate::str::contains("<-- enforcer --- [Gus Fring]")),
        );
}

#[test]
fn graph_focused_unknown_character() {
    series()
        .args(["graph", "Breaking Bad", "--focus", "Tuco"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character not found"));
}

#[test]
fn graph_fails_on_dangling_edge() {
    let (_dir, path) = dangling_catalog();
    series()
        .args(["--catalog", path.to_str().unwrap(), "graph", "Dark"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown character \"Adam\""));
}

// ---------------------------------------------------------------------------
// episodes
// ---------------------------------------------------------------------------

#[test]
fn episodes_single_season() {
    series()
        .args(["episodes", "Breaking Bad", "--season", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Season 5")
                .and(predicate::str::contains("(16 episodes)"))
                .and(predicate::str::contains("Season 4").not()),
        );
}

#[test]
fn episodes_unknown_season() {
    series()
        .args(["episodes", "Breaking Bad", "--season", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("season not found"));
}

// ---------------------------------------------------------------------------
// quiz
// ---------------------------------------------------------------------------

#[test]
fn quiz_plays_to_completion() {
    series()
        .args(["quiz", "Breaking Bad"])
        .write_stdin("1\n2\ngus fring\n4\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Correct!")
                .and(predicate::str::contains(
                    "Wrong, the answer was Chemistry teacher",
                ))
                .and(predicate::str::contains("Quiz complete: 2 / 4")),
        );
}

#[test]
fn quiz_rejects_unknown_option_and_restarts() {
    series()
        .args(["quiz", "Game of Thrones"])
        .write_stdin("Hodor\nrestart\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"Hodor\" is not one of the options")
                .and(predicate::str::contains("Quiz (question 1 of 4)")),
        );
}

#[test]
fn quiz_rejects_number_that_is_also_option_text() {
    // Question 4 of Game of Thrones has the options 3, 2, 4, 1.
    series()
        .args(["quiz", "Game of Thrones"])
        .write_stdin("1\n1\n1\n3\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("did you mean option 1 ('3') or option 3 ('4')?")
                .and(predicate::str::contains("Wrong, the answer was 3").not())
                .and(predicate::str::contains("Quiz complete: 4 / 4")),
        );
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_json_valid_output() {
    let output = series()
        .args(["export", "Stranger Things", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(json["banner"]["title"], "Stranger Things");
    assert_eq!(json["episodes"].as_array().unwrap().len(), 4);
}

#[test]
fn export_markdown() {
    series()
        .args(["export", "Game of Thrones", "md"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Game of Thrones")
                .and(predicate::str::contains("## Relationships"))
                .and(predicate::str::contains("### Season 8")),
        );
}

#[test]
fn export_html_embeds_placeholders() {
    let assets = TempDir::new().unwrap();
    series()
        .args([
            "--assets",
            assets.path().to_str().unwrap(),
            "export",
            "Breaking Bad",
            "html",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<!DOCTYPE html")
                .and(predicate::str::contains("<title>Breaking Bad</title>"))
                .and(predicate::str::contains("data:image/svg+xml;base64,")),
        )
        .stderr(predicate::str::contains("posters/breaking_bad.jpg"));
}

#[test]
fn export_to_file() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("export.json");
    series()
        .args([
            "export",
            "Breaking Bad",
            "json",
            "-o",
            out_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&out_file).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid JSON in file");
    assert_eq!(json["quiz"]["Question"]["total"], 4);
}

#[test]
fn export_unsupported_format() {
    series()
        .args(["export", "Breaking Bad", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_builtin_catalog() {
    series()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_reports_issues_without_failing() {
    let (_dir, path) = dangling_catalog();
    series()
        .args(["--catalog", path.to_str().unwrap(), "check"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("undeclared character \"Adam\"")
                .and(predicate::str::contains("1 issues found")),
        );
}

// ---------------------------------------------------------------------------
// probe
// ---------------------------------------------------------------------------

#[test]
fn probe_timeout_defaults_to_library_constant() {
    series()
        .args(["probe", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[default: 5]"));
}

#[test]
fn probe_reports_unreachable_url() {
    series()
        .args(["probe", "http://127.0.0.1:9/poster.jpg", "--timeout", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("failed:").and(predicate::str::contains("0/1 reachable")),
        );
}
