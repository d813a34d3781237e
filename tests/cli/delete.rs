use crate::support::{create_draft, draft_path, marginalia_in};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Delete command tests
// ============================================================================

#[test]
fn test_delete_removes_draft() {
    let dir = tempdir().unwrap();
    let filename = create_draft(dir.path(), "https://x.com/doomed", &[("q", "")], &[]);

    marginalia_in(dir.path())
        .args(["delete", &filename])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    assert!(!draft_path(dir.path(), &filename).exists());
}

#[test]
fn test_delete_missing_draft_as_json() {
    let dir = tempdir().unwrap();
    let output = marginalia_in(dir.path())
        .args(["--format", "json", "delete", "2024-01-01-none.md"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "not_found");
    assert_eq!(err["error"]["code"], 3);
}
