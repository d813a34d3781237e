use crate::support::{create_draft, marginalia_in};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Show command tests
// ============================================================================

#[test]
fn test_show_prints_draft_markdown() {
    let dir = tempdir().unwrap();
    let filename = create_draft(
        dir.path(),
        "https://x.com/shown",
        &[("Quoted words", "My note")],
        &[],
    );

    marginalia_in(dir.path())
        .args(["show", &filename])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("## Highlight 1\n> Quoted words"))
        .stdout(predicate::str::contains("My note"));
}

#[test]
fn test_show_json_parses_highlights() {
    let dir = tempdir().unwrap();
    let filename = create_draft(
        dir.path(),
        "https://x.com/shown",
        &[("first", "one"), ("second", "")],
        &["rust"],
    );

    let output = marginalia_in(dir.path())
        .args(["--format", "json", "show", &filename])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["filename"], filename.as_str());
    assert_eq!(json["metadata"]["source_url"], "https://x.com/shown");
    assert_eq!(json["metadata"]["draft"], true);
    assert_eq!(json["highlights"][0]["quote"], "first");
    assert_eq!(json["highlights"][0]["commentary"], "one");
    assert_eq!(json["highlights"][1]["quote"], "second");
    assert_eq!(json["highlights"][1]["commentary"], "");
}

#[test]
fn test_show_missing_draft() {
    let dir = tempdir().unwrap();
    marginalia_in(dir.path())
        .args(["show", "2024-01-01-missing.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("draft not found"));
}

#[test]
fn test_show_rejects_path_traversal() {
    let dir = tempdir().unwrap();
    let output = marginalia_in(dir.path())
        .args(["--format", "json", "show", "../secret.md"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "invalid_filename");
}
