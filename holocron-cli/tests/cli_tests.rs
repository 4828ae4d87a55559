use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn help_lists_the_commands() {
    let mut cmd = cargo_bin_cmd!("holocron");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("favorites"))
        .stdout(predicate::str::contains("contacts"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn config_writes_yaml_in_the_working_directory() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("holocron");
    cmd.current_dir(dir.path()).arg("config");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("holocron.yaml"));
    let written = fs::read_to_string(dir.path().join("holocron.yaml")).unwrap();
    assert!(written.contains("https://www.swapi.tech/api"));
    assert!(written.contains("chanchitoFeliz"));
}

#[test]
fn config_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("holocron");
    cmd.current_dir(dir.path()).args(["config", "--format", "toml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

#[test]
fn favorites_start_empty() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("holocron");
    cmd.arg("--data-dir").arg(dir.path()).arg("favorites");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet"));
}

#[test]
fn like_toggles_offline_and_persists() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("holocron")
        .arg("--data-dir")
        .arg(dir.path())
        .args(["like", "planets", "1", "--name", "Tatooine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added planets 1"));

    cargo_bin_cmd!("holocron")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("planets:"))
        .stdout(predicate::str::contains("Tatooine"));

    let stored = fs::read_to_string(dir.path().join("storage.json")).unwrap();
    assert!(stored.contains("starWarsLikes"));

    cargo_bin_cmd!("holocron")
        .arg("--data-dir")
        .arg(dir.path())
        .args(["like", "planets", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed planets 1"));
}

#[test]
fn unknown_kind_is_rejected() {
    let mut cmd = cargo_bin_cmd!("holocron");
    cmd.args(["list", "starships"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown catalogue kind"));
}

#[test]
fn whoami_without_token() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("holocron");
    cmd.arg("--data-dir").arg(dir.path()).arg("whoami");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn completion_generates_a_script() {
    let mut cmd = cargo_bin_cmd!("holocron");
    cmd.args(["completion", "--shell", "bash"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("holocron"));
}
