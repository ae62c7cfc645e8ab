//! Integration tests for the `postboard` CLI binary.
//!
//! Argument parsing, help output, shell completions, the session gate, and
//! error handling run without a network. The end-to-end cases point the
//! binary at a wiremock server through a temporary config file.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `postboard` binary with env isolation.
///
/// Clears all `POSTBOARD_*` env vars and points the config file into
/// `config_dir` so tests never touch the user's real configuration.
fn postboard_cmd(config_dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("postboard");
    cmd.env("HOME", "/tmp/postboard-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/postboard-cli-test-nonexistent")
        .env("POSTBOARD_CONFIG", config_file(config_dir))
        .env("NO_COLOR", "1")
        .env_remove("POSTBOARD_API_URL")
        .env_remove("POSTBOARD_OUTPUT")
        .env_remove("POSTBOARD_TIMEOUT")
        .env_remove("POSTBOARD_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

fn config_file(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}

/// Write a config that is logged in and points at `url`.
fn logged_in_config(url: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_file(dir.path()),
        format!("[api]\nurl = \"{url}\"\ntimeout = 5\n\n[session]\nauthenticated = true\n"),
    )
    .unwrap();
    dir
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn post_json(id: u64, title: &str, user_id: u64) -> serde_json::Value {
    json!({ "id": id, "title": title, "body": format!("{title} body"), "userId": user_id })
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let dir = tempfile::tempdir().unwrap();
    let output = postboard_cmd(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("posts")
                .and(predicate::str::contains("login"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn test_version_flag() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("postboard"));
}

#[test]
fn test_posts_subcommands_exist() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .args(["posts", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("patch"))
                .and(predicate::str::contains("delete")),
        );
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Argument errors ─────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let output = postboard_cmd(dir.path()).arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let dir = tempfile::tempdir().unwrap();
    let output = postboard_cmd(dir.path())
        .args(["--output", "invalid", "posts", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

// ── Session gate ────────────────────────────────────────────────────

#[test]
fn test_posts_require_login() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .args(["posts", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_login_rejects_wrong_password() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .args(["login", "--username", "admin", "--password", "wrong"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid username or password"));
    assert!(!config_file(dir.path()).exists());
}

#[test]
fn test_login_then_logout_toggles_session() {
    let dir = tempfile::tempdir().unwrap();

    postboard_cmd(dir.path())
        .args(["login", "--username", "admin"])
        .env("POSTBOARD_PASSWORD", "admin")
        .assert()
        .success();
    let saved = std::fs::read_to_string(config_file(dir.path())).unwrap();
    assert!(saved.contains("authenticated = true"), "config was:\n{saved}");

    postboard_cmd(dir.path()).arg("logout").assert().success();
    let saved = std::fs::read_to_string(config_file(dir.path())).unwrap();
    assert!(saved.contains("authenticated = false"), "config was:\n{saved}");
}

#[test]
fn test_login_leaves_unparseable_config_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let broken = "[api]\nurl = \"http://my.host:8080/posts\"\ntimeout = \"thirty\"\n";
    std::fs::write(config_file(dir.path()), broken).unwrap();

    postboard_cmd(dir.path())
        .args(["login", "--username", "admin"])
        .env("POSTBOARD_PASSWORD", "admin")
        .assert()
        .failure();

    let saved = std::fs::read_to_string(config_file(dir.path())).unwrap();
    assert_eq!(saved, broken);
}

#[test]
fn test_login_does_not_persist_env_overrides() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_file(dir.path()),
        "[api]\nurl = \"http://my.host:8080/posts\"\n",
    )
    .unwrap();

    postboard_cmd(dir.path())
        .args(["login", "--username", "admin"])
        .env("POSTBOARD_PASSWORD", "admin")
        .env("POSTBOARD_API_URL", "http://temporary.example/posts")
        .assert()
        .success();

    let saved = std::fs::read_to_string(config_file(dir.path())).unwrap();
    assert!(saved.contains("http://my.host:8080/posts"), "config was:\n{saved}");
    assert!(!saved.contains("temporary.example"), "config was:\n{saved}");
    assert!(saved.contains("authenticated = true"), "config was:\n{saved}");
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_path_honors_override() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_no_config() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jsonplaceholder.typicode.com"));
}

#[test]
fn test_config_set_url_validates() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .args(["config", "set-url", "not a url"])
        .assert()
        .failure();

    postboard_cmd(dir.path())
        .args(["config", "set-url", "http://localhost:3000/posts"])
        .assert()
        .success();
    let saved = std::fs::read_to_string(config_file(dir.path())).unwrap();
    assert!(saved.contains("http://localhost:3000/posts"));
}

#[test]
fn test_config_set_url_does_not_persist_env_timeout() {
    let dir = tempfile::tempdir().unwrap();
    postboard_cmd(dir.path())
        .args(["config", "set-url", "http://localhost:3000/posts"])
        .env("POSTBOARD_API_TIMEOUT", "99")
        .assert()
        .success();

    let saved = std::fs::read_to_string(config_file(dir.path())).unwrap();
    assert!(saved.contains("timeout = 30"), "config was:\n{saved}");
}

// ── Posts commands ──────────────────────────────────────────────────

#[test]
fn test_create_validates_before_request() {
    // Nothing listens on port 9; validation must fail first.
    let dir = logged_in_config("http://127.0.0.1:9/posts");
    postboard_cmd(dir.path())
        .args(["posts", "create", "--title", "ab", "--body", "a long enough body"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("title"));
}

#[test]
fn test_delete_without_yes_is_refused_non_interactively() {
    let dir = logged_in_config("http://127.0.0.1:9/posts");
    postboard_cmd(dir.path())
        .args(["posts", "delete", "1"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_posts_list_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            post_json(1, "alpha", 1),
            post_json(2, "beta", 2),
            post_json(3, "gamma", 1),
        ])))
        .mount(&server)
        .await;

    let dir = logged_in_config(&format!("{}/posts", server.uri()));

    postboard_cmd(dir.path())
        .args(["--output", "plain", "posts", "list"])
        .assert()
        .success()
        .stdout("3\n2\n1\n");

    postboard_cmd(dir.path())
        .args(["-o", "plain", "posts", "list", "--user", "1", "--order", "asc"])
        .assert()
        .success()
        .stdout("1\n3\n");

    postboard_cmd(dir.path())
        .args(["-o", "json-compact", "posts", "list", "--search", "BET"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"userId\":2").and(predicate::str::contains("beta")));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_posts_get_not_found_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let dir = logged_in_config(&format!("{}/posts", server.uri()));

    postboard_cmd(dir.path())
        .args(["posts", "get", "42"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Post 42 not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_posts_delete_with_yes() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/posts/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = logged_in_config(&format!("{}/posts", server.uri()));

    postboard_cmd(dir.path())
        .args(["--yes", "posts", "delete", "7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Post 7 deleted"));
}
