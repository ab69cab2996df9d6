#![allow(deprecated)]

use std::fs;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The binary with a clean environment: no inherited server, token, env
/// file or config file.
fn gomematic_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("gomematic-cli"));
    cmd.env_remove("GOMEMATIC_SERVER")
        .env_remove("GOMEMATIC_TOKEN")
        .env_remove("GOMEMATIC_ENV_FILE")
        .env_remove("GOMEMATIC_DEBUG")
        .env("GOMEMATIC_CONFIG", home.path().join("missing.json"))
        .env("NO_COLOR", "1");
    cmd
}

fn fetched_user() -> serde_json::Value {
    serde_json::json!({
        "id": "42",
        "slug": "jdoe",
        "username": "jdoe",
        "email": "jdoe@example.com",
        "active": true,
        "admin": false
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_team_create_posts_once() {
    let home = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/teams"))
        .and(body_json(serde_json::json!({ "name": "Ops" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "1", "slug": "ops", "name": "Ops"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    gomematic_cmd(&home)
        .args(["-s", &mock_server.uri(), "team", "create", "--name", "Ops"])
        .assert()
        .success()
        .stdout("")
        .stderr("successfully created\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_user_update_without_changes_skips_write() {
    let home = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fetched_user()))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fetched_user()))
        .expect(0)
        .mount(&mock_server)
        .await;

    gomematic_cmd(&home)
        .args(["-s", &mock_server.uri(), "user", "update", "--id", "42"])
        .assert()
        .success()
        .stderr("nothing to update...\n");

    // Supplying the current value is not a change either.
    gomematic_cmd(&home)
        .args([
            "-s",
            &mock_server.uri(),
            "user",
            "update",
            "--id",
            "42",
            "--email",
            "jdoe@example.com",
            "--active",
        ])
        .assert()
        .success()
        .stderr("nothing to update...\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_user_update_puts_changed_record() {
    let home = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/jdoe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fetched_user()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fetched_user()))
        .expect(1)
        .mount(&mock_server)
        .await;

    gomematic_cmd(&home)
        .args(["-s", &mock_server.uri(), "user", "update", "--id", "jdoe", "--admin"])
        .assert()
        .success()
        .stderr("successfully updated\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_password_change_for_local_address() {
    let home = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "1",
            "slug": "admin",
            "username": "admin",
            "email": "admin@localhost"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    gomematic_cmd(&home)
        .args(["-s", &mock_server.uri(), "user", "update", "--id", "admin", "--password", "n3w"])
        .assert()
        .success()
        .stderr("successfully updated\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_update_never_reaches_server() {
    let home = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fetched_user()))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fetched_user()))
        .expect(0)
        .mount(&mock_server)
        .await;

    gomematic_cmd(&home)
        .args(["-s", &mock_server.uri(), "user", "update", "--id", "42", "--email", "nope"])
        .assert()
        .code(2)
        .stderr("error: failed to validate record:\n\nemail: is not a valid email address\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_missing_team() {
    let home = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/ghost-team"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({ "message": "team not found" })),
        )
        .mount(&mock_server)
        .await;

    gomematic_cmd(&home)
        .args(["-s", &mock_server.uri(), "team", "show", "--id", "ghost-team"])
        .assert()
        .code(2)
        .stdout("")
        .stderr("error: team not found\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_renders_record() {
    let home = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/ops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "1",
            "slug": "ops",
            "name": "Ops",
            "created_at": "2024-03-01T12:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    gomematic_cmd(&home)
        .args(["-s", &mock_server.uri(), "team", "show", "--id", "ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slug: ops"))
        .stdout(predicate::str::contains("Name: Ops"));

    gomematic_cmd(&home)
        .args([
            "-s",
            &mock_server.uri(),
            "team",
            "show",
            "--id",
            "ops",
            "--format",
            "{{ name }}/{{ slug }}",
        ])
        .assert()
        .success()
        .stdout("Ops/ops\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_list() {
    let home = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/jdoe/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    gomematic_cmd(&home)
        .args(["-s", &mock_server.uri(), "user", "team", "ls", "-i", "jdoe"])
        .assert()
        .success()
        .stdout("")
        .stderr("empty result\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_membership_mutation_reports_server_message() {
    let home = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/jdoe/teams"))
        .and(body_json(serde_json::json!({ "team": "ops", "perm": "admin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "successfully updated permissions"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    gomematic_cmd(&home)
        .args([
            "-s",
            &mock_server.uri(),
            "user",
            "team",
            "perm",
            "-i",
            "jdoe",
            "-t",
            "ops",
            "--perm",
            "admin",
        ])
        .assert()
        .success()
        .stderr("successfully updated permissions\n");
}

#[test]
fn test_unreachable_server() {
    let home = TempDir::new().unwrap();

    gomematic_cmd(&home)
        .args(["-s", "http://127.0.0.1:1", "team", "list"])
        .assert()
        .code(2)
        .stderr(
            predicate::eq("error: connection to server had been refused\n")
                .or(predicate::eq("error: failed to connect to the server\n")),
        );
}

#[test]
fn test_missing_server_is_config_error() {
    let home = TempDir::new().unwrap();

    gomematic_cmd(&home)
        .args(["-s", "", "team", "list"])
        .assert()
        .code(1)
        .stderr("error: you must provide the server address.\n");

    gomematic_cmd(&home)
        .args(["-s", "ftp://example.com", "team", "list"])
        .assert()
        .code(1)
        .stderr("error: invalid server address, bad format?.\n");
}

#[test]
fn test_create_requires_fields() {
    let home = TempDir::new().unwrap();

    // Nothing is sent, so the default server does not need to exist.
    gomematic_cmd(&home)
        .args(["user", "create", "--username", "jdoe"])
        .assert()
        .code(2)
        .stderr("error: you must provide an email\n");
}

#[test]
fn test_usage_error_exits_with_one() {
    let home = TempDir::new().unwrap();

    gomematic_cmd(&home)
        .args(["team", "frobnicate"])
        .assert()
        .code(1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_env_file_and_config_file() {
    let home = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/profile/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "abc123"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let env_file = home.path().join("gomematic.env");
    fs::write(
        &env_file,
        format!("GOMEMATIC_SERVER={}\nGOMEMATIC_TOKEN=secret\n", mock_server.uri()),
    )
    .unwrap();

    gomematic_cmd(&home)
        .env("GOMEMATIC_ENV_FILE", &env_file)
        .args(["profile", "token"])
        .assert()
        .success()
        .stdout("Token: abc123\n\n");

    let config_file = home.path().join("config.json");
    fs::write(
        &config_file,
        serde_json::json!({ "server": mock_server.uri() }).to_string(),
    )
    .unwrap();

    gomematic_cmd(&home)
        .env("GOMEMATIC_CONFIG", &config_file)
        .args(["profile", "token", "--format", "{{ token }}"])
        .assert()
        .success()
        .stdout("abc123\n");
}

#[test]
fn test_malformed_config_file() {
    let home = TempDir::new().unwrap();
    let config_file = home.path().join("config.json");
    fs::write(&config_file, "{ not json").unwrap();

    gomematic_cmd(&home)
        .env("GOMEMATIC_CONFIG", &config_file)
        .args(["team", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: failed to parse config file"));
}
