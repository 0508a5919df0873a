use assert_cmd::Command;
use predicates::prelude::*;

fn pdd(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pdd").unwrap();
    cmd.env_remove("PDD_TOKEN")
        .env_remove("PDD_OAUTH_TOKEN")
        .env_remove("PDD_API_URL")
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home);
    cmd
}

#[test]
fn help_lists_record_commands() {
    let home = tempfile::tempdir().unwrap();
    pdd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("del"));
}

#[test]
fn list_without_token_fails() {
    let home = tempfile::tempdir().unwrap();
    pdd(home.path())
        .args(["list", "domain.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PDD token required"));
}

#[test]
fn edit_without_fields_fails_before_request() {
    let home = tempfile::tempdir().unwrap();
    pdd(home.path())
        .args(["--token", "t", "edit", "domain.com", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn unreachable_api_reports_transport_error() {
    let home = tempfile::tempdir().unwrap();
    pdd(home.path())
        .args(["--token", "t", "--base-url", "http://127.0.0.1:1", "del", "domain.com", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("POST http://127.0.0.1:1/admin/dns/del"));
}

#[test]
fn broken_config_file_can_be_repaired() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("pdd").join("config.toml");
    std::fs::create_dir_all(config.parent().unwrap()).unwrap();
    std::fs::write(&config, "token = [").unwrap();

    pdd(home.path())
        .args(["list", "domain.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));

    pdd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    pdd(home.path())
        .args(["config", "set", "token", "abc"])
        .assert()
        .success();

    let repaired = std::fs::read_to_string(&config).unwrap();
    assert!(repaired.contains("token = \"abc\""), "got: {repaired}");
}
