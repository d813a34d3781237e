use crate::support::marginalia_in;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_writes_config_and_dirs() {
    let dir = tempdir().unwrap();
    marginalia_in(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized marginalia"));

    let config = fs::read_to_string(dir.path().join("marginalia.toml")).unwrap();
    assert!(config.contains("drafts_dir = \"drafts\""));
    assert!(config.contains("posts_dir = \"content/posts\""));
    assert!(dir.path().join("drafts").is_dir());
    assert!(dir.path().join("content/posts").is_dir());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("marginalia.toml"), "drafts_dir = \"inbox\"\n").unwrap();

    marginalia_in(dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
    assert_eq!(
        fs::read_to_string(dir.path().join("marginalia.toml")).unwrap(),
        "drafts_dir = \"inbox\"\n"
    );

    marginalia_in(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(dir.path().join("marginalia.toml"))
        .unwrap()
        .contains("drafts_dir = \"drafts\""));
}
