use crate::support::{create_draft, marginalia_in, post_path};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Preview command tests
// ============================================================================

#[test]
fn test_preview_renders_without_writing() {
    let dir = tempdir().unwrap();
    let filename = create_draft(
        dir.path(),
        "https://x.com/preview-me",
        &[("quoted", "thinking")],
        &[],
    );

    marginalia_in(dir.path())
        .args(["preview", &filename])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Preview Me"))
        .stdout(predicate::str::contains("**My thoughts:** thinking"));

    assert!(!post_path(dir.path(), &filename).exists());
}

#[test]
fn test_preview_json() {
    let dir = tempdir().unwrap();
    let filename = create_draft(dir.path(), "https://x.com/json", &[("q", "")], &["a"]);

    let output = marginalia_in(dir.path())
        .args(["--format", "json", "preview", &filename, "--title", "Custom"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["frontmatter"]["title"], "Custom");
    assert_eq!(json["frontmatter"]["draft"], false);
    assert_eq!(json["frontmatter"]["tags"][0], "a");
    assert_eq!(json["frontmatter"]["params"]["source"], "https://x.com/json");
    assert_eq!(json["frontmatter"]["description"], "---");
    assert!(json["body"]
        .as_str()
        .unwrap()
        .starts_with("## Key Insight 1\n\n> q"));
}
