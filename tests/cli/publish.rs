use crate::support::{create_draft, draft_path, marginalia_in, post_path, read_post};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Publish command tests
// ============================================================================

#[test]
fn test_publish_writes_post_and_removes_draft() {
    let dir = tempdir().unwrap();
    let filename = create_draft(
        dir.path(),
        "https://example.com/articles/rust-ownership",
        &[("Ownership is a set of rules", "Borrowing finally clicked")],
        &["rust"],
    );

    marginalia_in(dir.path())
        .args(["publish", &filename])
        .assert()
        .success()
        .stdout(predicate::str::contains("Published"));

    assert!(!draft_path(dir.path(), &filename).exists());

    let post = read_post(dir.path(), &filename);
    assert!(post.contains("title: Rust Ownership"));
    assert!(post.contains("draft: false"));
    assert!(post.contains("- rust"));
    assert!(post.contains("source: https://example.com/articles/rust-ownership"));
    assert!(post.contains("-08:00"));
    assert!(post.contains("## Key Insight 1\n\n> Ownership is a set of rules\n\n**My thoughts:** Borrowing finally clicked"));
    assert!(post.contains(
        "---\n\n**Source:** [https://example.com/articles/rust-ownership](https://example.com/articles/rust-ownership)"
    ));
}

#[test]
fn test_publish_keep_draft() {
    let dir = tempdir().unwrap();
    let filename = create_draft(dir.path(), "https://x.com/kept", &[("q", "c")], &[]);

    marginalia_in(dir.path())
        .args(["publish", &filename, "--keep-draft"])
        .assert()
        .success();

    assert!(draft_path(dir.path(), &filename).exists());
    assert!(post_path(dir.path(), &filename).exists());
}

#[test]
fn test_publish_title_override() {
    let dir = tempdir().unwrap();
    let filename = create_draft(dir.path(), "https://x.com/a/b", &[("q", "")], &[]);

    marginalia_in(dir.path())
        .args(["publish", &filename, "--title", "Hand Picked"])
        .assert()
        .success();

    assert!(read_post(dir.path(), &filename).contains("title: Hand Picked"));
}

#[test]
fn test_publish_json_reports_overwrite() {
    let dir = tempdir().unwrap();
    let filename = create_draft(dir.path(), "https://x.com/twice", &[("q", "")], &[]);

    let first = marginalia_in(dir.path())
        .args(["--format", "json", "publish", &filename, "--keep-draft"])
        .output()
        .unwrap();
    assert!(first.status.success());
    let json: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["filename"], filename.as_str());
    assert_eq!(json["overwritten"], false);
    assert_eq!(json["draft_removed"], false);

    let second = marginalia_in(dir.path())
        .args(["--format", "json", "publish", &filename, "--title", "Again"])
        .output()
        .unwrap();
    assert!(second.status.success());
    let json: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(json["overwritten"], true);
    assert_eq!(json["draft_removed"], true);

    assert!(read_post(dir.path(), &filename).contains("title: Again"));
}

#[test]
fn test_publish_missing_draft() {
    let dir = tempdir().unwrap();
    marginalia_in(dir.path())
        .args(["publish", "2024-01-01-missing.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("draft not found"));
    assert!(!dir.path().join("content").exists());
}

#[test]
fn test_publish_hand_written_draft() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("drafts")).unwrap();
    fs::write(
        draft_path(dir.path(), "manual.md"),
        "---\nsource_url: https://x.com/manual\ncreated_at: '2024-01-15T10:30:00.123456'\ntags: []\ndraft: true\n---\n\n## Highlight 1\n> line one\n> line two\n\nFirst thought\n*Second* thought with a [link](https://x.com)\n\n## Highlight 2\n> another\n",
    )
    .unwrap();

    marginalia_in(dir.path())
        .args(["publish", "manual.md"])
        .assert()
        .success();

    let post = read_post(dir.path(), "manual.md");
    assert!(post.contains("date: 2024-01-15T10:30:00-08:00") || post.contains("date: '2024-01-15T10:30:00-08:00'"));
    assert!(post.contains("description: Second thought with a link"));
    assert!(post.contains("> line one\n> line two"));
    assert!(post.contains("\n---\n\n## Key Insight 2\n\n> another"));
}

#[test]
fn test_publish_to_configured_posts_dir() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("marginalia.toml"),
        "posts_dir = \"site/content/notes\"\n",
    )
    .unwrap();
    let filename = create_draft(dir.path(), "https://x.com/configured", &[("q", "")], &[]);

    marginalia_in(dir.path())
        .args(["publish", &filename])
        .assert()
        .success();

    assert!(dir
        .path()
        .join("site/content/notes")
        .join(&filename)
        .is_file());
}
