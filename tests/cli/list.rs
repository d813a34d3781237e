use crate::support::{create_draft, draft_path, marginalia_in};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// List command tests
// ============================================================================

fn write_draft(root: &std::path::Path, filename: &str, created_at: &str, source: &str) {
    let path = draft_path(root, filename);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        path,
        format!(
            "---\nsource_url: {}\ncreated_at: '{}'\ntags:\n- rust\ndraft: true\n---\n\n## Highlight 1\n> q\n",
            source, created_at
        ),
    )
    .unwrap();
}

#[test]
fn test_list_empty() {
    let dir = tempdir().unwrap();
    marginalia_in(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No drafts found"));
}

#[test]
fn test_list_empty_quiet() {
    let dir = tempdir().unwrap();
    marginalia_in(dir.path())
        .args(["list", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_shows_drafts() {
    let dir = tempdir().unwrap();
    let filename = create_draft(
        dir.path(),
        "https://x.com/listed-post",
        &[("quote", "")],
        &["rust", "notes"],
    );

    marginalia_in(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(filename.as_str()))
        .stdout(predicate::str::contains("https://x.com/listed-post"))
        .stdout(predicate::str::contains("[rust,notes]"));
}

#[test]
fn test_list_newest_first() {
    let dir = tempdir().unwrap();
    write_draft(dir.path(), "2024-01-01-old.md", "2024-01-01T08:00:00.000000", "https://x.com/old");
    write_draft(dir.path(), "2024-03-01-new.md", "2024-03-01T08:00:00.000000", "https://x.com/new");
    write_draft(dir.path(), "2024-02-01-mid.md", "2024-02-01T08:00:00.000000", "https://x.com/mid");

    let output = marginalia_in(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["filename"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["2024-03-01-new.md", "2024-02-01-mid.md", "2024-01-01-old.md"]
    );
    assert_eq!(json[0]["source_url"], "https://x.com/new");
    assert_eq!(json[0]["created_at"], "2024-03-01T08:00:00.000000");
    assert_eq!(json[0]["tags"][0], "rust");
}

#[test]
fn test_list_filters_by_tag() {
    let dir = tempdir().unwrap();
    create_draft(dir.path(), "https://x.com/tagged", &[("q", "")], &["keep"]);
    create_draft(dir.path(), "https://x.com/other", &[("q", "")], &["skip"]);

    marginalia_in(dir.path())
        .args(["list", "--tag", "keep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tagged"))
        .stdout(predicate::str::contains("other").not());
}

#[test]
fn test_list_skips_unreadable_drafts() {
    let dir = tempdir().unwrap();
    let good = create_draft(dir.path(), "https://x.com/good", &[("q", "")], &[]);
    fs::write(draft_path(dir.path(), "broken.md"), "---\ntags: [oops\n---\n").unwrap();
    fs::write(draft_path(dir.path(), "readme.txt"), "ignored").unwrap();

    marginalia_in(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(good.as_str()))
        .stdout(predicate::str::contains("broken.md").not())
        .stdout(predicate::str::contains("readme.txt").not());
}
