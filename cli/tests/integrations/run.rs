use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PUZZLE: &str = r#"{
  "id": 1,
  "cards": [
    { "colors": ["green"] },
    { "colors": ["green"] },
    { "colors": ["red"] },
    { "colors": ["gold"] },
    { "colors": ["blue"] },
    { "colors": [] },
    { "colors": ["blue"] },
    { "colors": [] }
  ],
  "dice": [
    { "type": "color", "value": "green" },
    { "type": "operator", "value": "∪", "flag": "required" },
    { "type": "color", "value": "gold" }
  ],
  "goal": 3,
  "solution": { "bottomRow": "green ∪ gold", "hasRestriction": false },
  "solutionCount": 2,
  "shortestSolution": 3,
  "longestSolution": 3
}"#;

fn puzzle_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("puzzle.json");
    fs::write(&path, PUZZLE).unwrap();
    path
}

fn onset() -> Command {
    Command::cargo_bin("onset").unwrap()
}

#[test]
fn test_cli_generate_prints_records() {
    let output = onset()
        .args(["generate", "--count", "2", "--seed", "7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert!(!records.is_empty());
    for record in records {
        assert_eq!(record["cards"].as_array().unwrap().len(), 8);
        assert!(record["solution"]["bottomRow"].is_string());
        assert!(record["solutionCount"].as_u64().unwrap() >= 1);
    }
}

#[test]
fn test_cli_generate_is_replayable_with_seed() {
    let run = || {
        onset()
            .args(["generate", "--count", "2", "--seed", "11"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_cli_generate_encoded_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("encoded.json");

    onset()
        .args(["generate", "--seed", "3", "--encode", "--output"])
        .arg(&out)
        .assert()
        .success();

    let records: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    for record in records.as_array().unwrap() {
        assert!(record["cards"].is_string());
        assert!(record["dice"].is_string());
        assert!(record["solution"].is_string());
    }
}

#[test]
fn test_cli_generate_rejects_inverted_goal_window() {
    onset()
        .args(["generate", "--min-goal", "5", "--max-goal", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--min-goal"));
}

#[test]
fn test_cli_solve_shows_statistics() {
    let temp_dir = TempDir::new().unwrap();
    let file = puzzle_file(&temp_dir);

    onset()
        .arg("solve")
        .arg(&file)
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Puzzle 1"))
        .stdout(predicate::str::contains("Solutions"))
        .stdout(predicate::str::contains("green ∪ gold"))
        .stdout(predicate::str::contains("gold ∪ green"))
        .stdout(predicate::str::contains("∪ (required)"));
}

#[test]
fn test_cli_solve_verify() {
    let temp_dir = TempDir::new().unwrap();
    let file = puzzle_file(&temp_dir);

    onset()
        .arg("solve")
        .arg(&file)
        .arg("--verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("Puzzle 1: record verified"));
}

#[test]
fn test_cli_solve_verify_detects_wrong_goal() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("wrong.json");
    fs::write(&file, PUZZLE.replace("\"goal\": 3", "\"goal\": 4")).unwrap();

    onset()
        .arg("solve")
        .arg(&file)
        .arg("--verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("goal is 4"));
}

#[test]
fn test_cli_solve_unknown_id() {
    let temp_dir = TempDir::new().unwrap();
    let file = puzzle_file(&temp_dir);

    onset()
        .arg("solve")
        .arg(&file)
        .args(["--id", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_eval_set_name_row() {
    let temp_dir = TempDir::new().unwrap();
    let file = puzzle_file(&temp_dir);

    onset()
        .arg("eval")
        .arg(&file)
        .arg("green ∪ gold")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 8 cards matched (goal reached)"));
}

#[test]
fn test_cli_eval_ascii_aliases() {
    let temp_dir = TempDir::new().unwrap();
    let file = puzzle_file(&temp_dir);

    onset()
        .arg("eval")
        .arg(&file)
        .arg("blue'")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 of 8 cards matched"));
}

#[test]
fn test_cli_eval_failed_restriction() {
    let temp_dir = TempDir::new().unwrap();
    let file = puzzle_file(&temp_dir);

    onset()
        .arg("eval")
        .arg(&file)
        .arg("U ⊆ red | green")
        .assert()
        .success()
        .stdout(predicate::str::contains("No result"));
}

#[test]
fn test_cli_eval_syntax_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = puzzle_file(&temp_dir);

    onset()
        .arg("eval")
        .arg(&file)
        .arg("red ∪")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Syntax error"))
        .stderr(predicate::str::contains("hint"));
}

#[test]
fn test_cli_eval_unknown_color() {
    let temp_dir = TempDir::new().unwrap();
    let file = puzzle_file(&temp_dir);

    onset()
        .arg("eval")
        .arg(&file)
        .arg("purple")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_cli_encode_decode_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let file = puzzle_file(&temp_dir);
    let encoded = temp_dir.path().join("encoded.json");
    let decoded = temp_dir.path().join("decoded.json");

    onset()
        .arg("encode")
        .arg(&file)
        .arg("--output")
        .arg(&encoded)
        .assert()
        .success();
    assert!(!fs::read_to_string(&encoded).unwrap().contains("green"));

    onset()
        .arg("decode")
        .arg(&encoded)
        .arg("--output")
        .arg(&decoded)
        .assert()
        .success();

    let original: Value = serde_json::from_str(PUZZLE).unwrap();
    let restored: Value = serde_json::from_str(&fs::read_to_string(&decoded).unwrap()).unwrap();
    assert_eq!(restored, Value::Array(vec![original]));
}

#[test]
fn test_cli_solve_reads_encoded_records() {
    let temp_dir = TempDir::new().unwrap();
    let file = puzzle_file(&temp_dir);
    let encoded = temp_dir.path().join("encoded.json");

    onset()
        .arg("encode")
        .arg(&file)
        .arg("--output")
        .arg(&encoded)
        .assert()
        .success();

    onset()
        .arg("solve")
        .arg(&encoded)
        .assert()
        .success()
        .stdout(predicate::str::contains("Puzzle 1"));
}

#[test]
fn test_cli_missing_file() {
    onset()
        .args(["solve", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}
