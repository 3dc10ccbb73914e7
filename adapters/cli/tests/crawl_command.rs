use std::{fs, process::Command};

const LEVEL: &str = "\u{1F9F1}\u{1F9F1}\u{1F9F1}\u{1F9F1}\n\
\u{1F9F1}\u{1F9D9}\u{1F48E}\u{1F9F1}\n\
\n\
\u{1F9F1}\u{1F9F1}\u{1F9F1}\u{1F9F1}\n";

#[test]
fn crawl_writes_graph_for_level_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let level = dir.path().join("level.txt");
    let output = dir.path().join("graph.json");
    fs::write(&level, LEVEL).expect("write level");

    let status = Command::new(env!("CARGO_BIN_EXE_wizard-maze"))
        .arg("--level")
        .arg(&level)
        .arg("--output")
        .arg(&output)
        .status()
        .expect("failed to run wizard-maze");
    assert!(status.success(), "crawl should succeed");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("graph written"))
            .expect("valid json");
    let screens = json["screens"].as_object().expect("screens map");
    assert!(screens.contains_key(json["root"].as_str().expect("root hash")));
}

#[test]
fn crawl_fails_when_limit_is_exceeded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("graph.json");

    let status = Command::new(env!("CARGO_BIN_EXE_wizard-maze"))
        .args(["--max-screens", "1", "--output"])
        .arg(&output)
        .status()
        .expect("failed to run wizard-maze");

    assert!(!status.success(), "overflow should fail the command");
    assert!(!output.exists(), "no graph is written after an overflow");
}
