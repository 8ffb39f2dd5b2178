//! End-to-end runs of the `suggestset` binary.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const CANDIDATES: &str = r#"
{"word": "four", "score": 10}
{"word": "thr", "score": 20}
{"word": "fivee", "score": 15}
{"word": "tw", "score": 20, "kind": "completion", "partialCommitIndex": 1}
{"word": "", "score": 99}
{"word": "nope", "score": -1, "prediction": true}
"#;

fn write_input(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write input");
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_suggestset"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run suggestset")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_scores_subcommand() {
    let input = write_input(CANDIDATES);
    let output = run(&["scores", input.path().to_str().unwrap(), "--capacity", "3"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "20\n20\n15\n");
}

#[test]
fn test_rank_json_output() {
    let input = write_input(CANDIDATES);
    let output = run(&[
        "rank",
        input.path().to_str().unwrap(),
        "--capacity",
        "3",
        "--weight",
        "0.5",
        "--json",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let candidates = json["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 3);
    // "tw" (20, 2 code points) outranks "thr" (20, 3)
    assert_eq!(candidates[0]["codePoints"], serde_json::json!([116, 119]));
    assert_eq!(candidates[0]["kind"], "completion");
    assert_eq!(candidates[0]["partialCommitIndex"], 1);
    assert_eq!(candidates[1]["score"], 20);
    assert_eq!(candidates[2]["score"], 15);
    assert_eq!(json["weight"], 0.5);
}

#[test]
fn test_rank_table_output() {
    let input = write_input(CANDIDATES);
    let output = run(&["rank", input.path().to_str().unwrap(), "--capacity", "2"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("SUGGESTIONS"));
    assert!(text.contains("2 of 2 retained"));
    assert!(text.contains("tw"));
    assert!(!text.contains("fivee"));
}

#[test]
fn test_config_file_with_flag_override() {
    let input = write_input(CANDIDATES);
    let config = write_input(r#"{"capacity": 1, "weight": 2.0}"#);
    let output = run(&[
        "scores",
        input.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
        "--capacity",
        "2",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "20\n20\n");
}

#[test]
fn test_json_array_input() {
    let input = write_input(r#"[{"codePoints": [97], "score": 3}, {"word": "b", "score": 7}]"#);
    let output = run(&["scores", input.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "7\n3\n");
}

#[test]
fn test_bad_input_fails() {
    let input = write_input("{\"score\": 1}\n");
    let output = run(&["scores", input.path().to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_zero_capacity_rejected() {
    let input = write_input(CANDIDATES);
    let output = run(&["scores", input.path().to_str().unwrap(), "--capacity", "0"]);
    assert!(!output.status.success());
}

#[test]
fn test_largest_capacity_keeps_everything() {
    let input = write_input(CANDIDATES);
    let capacity = usize::MAX.to_string();
    let output = run(&["scores", input.path().to_str().unwrap(), "--capacity", &capacity]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "20\n20\n15\n10\n");
}

#[test]
fn test_flags_reach_json_output() {
    // Exact-match bit plus an unknown low bit that gets dropped
    let input = write_input(r#"{"word": "ok", "score": 5, "kind": "typed", "flags": 1073741825}"#);
    let output = run(&["rank", input.path().to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["candidates"][0]["flags"], 0x4000_0000u32);
    assert_eq!(json["candidates"][0]["kind"], "typed");
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_scores_match_sequential() {
    let input = write_input(CANDIDATES);
    let path = input.path().to_str().unwrap();

    let parallel = run(&["scores", path, "--capacity", "3", "--parallel"]);
    assert!(parallel.status.success());
    assert_eq!(stdout(&parallel), "20\n20\n15\n");

    let sequential = run(&["scores", path, "--capacity", "3"]);
    assert_eq!(stdout(&parallel), stdout(&sequential));
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_rank_keeps_weight() {
    let input = write_input(CANDIDATES);
    let output = run(&[
        "rank",
        input.path().to_str().unwrap(),
        "--parallel",
        "--weight",
        "0.25",
        "--json",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["candidates"].as_array().unwrap().len(), 4);
    assert_eq!(json["weight"], 0.25);
}
