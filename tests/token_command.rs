//! Integration tests for the `set-token` and `remove-token` subcommands.
#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use predicates::prelude::*;

use common::TestEnv;

#[test]
fn remove_token_creates_empty_secret() {
    let env = TestEnv::new();

    env.axype()
        .arg("remove-token")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed token!"));

    assert_eq!(std::fs::read_to_string(env.secret_path()).unwrap(), "");
}

#[test]
fn remove_token_clears_existing_token() {
    let env = TestEnv::new();
    env.store_token("abc123");

    env.axype().arg("remove-token").assert().success();

    assert_eq!(std::fs::read_to_string(env.secret_path()).unwrap(), "");
}

#[test]
fn config_dir_from_environment() {
    let env = TestEnv::new();
    let alt = env.root().join("alt");
    let mut cmd = assert_cmd::Command::cargo_bin("axype").unwrap();

    cmd.current_dir(env.root())
        .env("AXYPE_CONFIG_DIR", &alt)
        .arg("remove-token")
        .assert()
        .success();

    assert!(alt.join("secret").is_file());
}

#[test]
fn set_token_alias_is_accepted() {
    let env = TestEnv::new();
    env.axype()
        .args(["st", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("token"));
}
