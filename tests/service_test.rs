use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run remoteconf with given args.
fn remoteconf() -> Command {
    cargo_bin_cmd!("remoteconf")
}

const CONFIG: &str = "common:\n  base:\n    remote:\n      base_dir: /srv/deploy\n    jenkins:\n      job: ci/deploy\n    env:\n      RUN_MODE: remote\nenvironments:\n  dev:\n    extends: base\nservice_ports:\n  app: 8080\n";

#[test]
fn port_prints_bare_number() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("remote.yml").write_str(CONFIG).unwrap();

    remoteconf()
        .current_dir(dir.path())
        .args(["port", "app", "--env", "dev"])
        .assert()
        .success()
        .stdout("8080\n");
}

#[test]
fn port_unmapped_service_fails_with_hint() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("remote.yml").write_str(CONFIG).unwrap();

    remoteconf()
        .current_dir(dir.path())
        .args(["port", "ghost", "--env", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"))
        .stderr(predicate::str::contains("service_ports"));
}

#[test]
fn service_shows_derived_values() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("remote.yml").write_str(CONFIG).unwrap();

    remoteconf()
        .current_dir(dir.path())
        .args(["service", "app", "--env", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8080"))
        .stdout(predicate::str::contains("/srv/deploy/../logs/app.log"))
        .stdout(predicate::str::contains("tail -fn10000"))
        .stdout(predicate::str::contains("/srv/deploy/app/app-start.sh"))
        .stdout(predicate::str::contains("ci/deploy/app"))
        .stdout(predicate::str::contains("RUN_MODE=remote"));
}

#[test]
fn service_respects_configured_commands() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("remote.yml")
        .write_str(
            "environments:\n  dev:\n    start:\n      command: systemctl restart ${service}\n    log:\n      filePattern: /var/log/${service}-${SERVICE_PORT}.log\nservice_ports:\n  app: 8080\n",
        )
        .unwrap();

    remoteconf()
        .current_dir(dir.path())
        .args(["service", "app", "--env", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("systemctl restart app"))
        .stdout(predicate::str::contains("/var/log/app-8080.log"));
}
