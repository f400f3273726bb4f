use assert_cmd::Command;
use predicates::prelude::*;
use skystack_config::{ENV_DOMAIN_NAME, ENV_IMAGE_REPOSITORY};

fn sky() -> Command {
    let mut cmd = Command::cargo_bin("sky").unwrap();
    // Start from a clean slate so the ambient environment can't leak in
    cmd.env_remove(ENV_DOMAIN_NAME).env_remove(ENV_IMAGE_REPOSITORY);
    cmd
}

fn configured_sky() -> Command {
    let mut cmd = sky();
    cmd.env(ENV_DOMAIN_NAME, "example.com")
        .env(ENV_IMAGE_REPOSITORY, "acme/api");
    cmd
}

#[test]
fn test_cli_help() {
    sky().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("synth"))
        .stdout(predicate::str::contains("outputs"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn test_cli_version() {
    sky().arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skystack"));
}

#[test]
fn test_synth_lists_every_resource() {
    configured_sky()
        .arg("synth")
        .assert()
        .success()
        .stdout(predicate::str::contains("api-example.example.com"))
        .stdout(predicate::str::contains("network"))
        .stdout(predicate::str::contains("cluster"))
        .stdout(predicate::str::contains("certificate"))
        .stdout(predicate::str::contains("dns-record"))
        .stdout(predicate::str::contains("8 to create, 0 to update, 0 to delete, 0 unchanged"))
        .stdout(predicate::str::contains("https://api-example.example.com"));
}

#[test]
fn test_synth_json_dumps_the_graph() {
    configured_sky()
        .arg("synth")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"service\""))
        .stdout(predicate::str::contains("\"path\": \"/alive\""))
        .stdout(predicate::str::contains("\"ttl_seconds\": 60"));
}

#[test]
fn test_synth_without_config_fails() {
    sky().arg("synth")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SKYSTACK_DOMAIN_NAME"));
}

#[test]
fn test_synth_without_repository_fails() {
    let mut cmd = sky();
    cmd.env(ENV_DOMAIN_NAME, "example.com");
    cmd.arg("synth")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SKYSTACK_IMAGE_REPOSITORY"));
}

#[test]
fn test_outputs_prints_the_api_url() {
    configured_sky()
        .arg("outputs")
        .assert()
        .success()
        .stdout(predicate::str::contains("api-url"))
        .stdout(predicate::str::contains("https://api-example.example.com"));
}

#[test]
fn test_invalid_command() {
    sky().arg("provision").assert().failure();
}
