use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("edloadout-cli");
    cmd.env("RUST_LOG", "error")
        .arg("--catalog")
        .arg(fixture("blueprints.csv"))
        .arg("--engineers")
        .arg(fixture("engineers.json"));
    cmd
}

/// Uuid of a blueprint row in the fixture catalog.
fn fixture_uuid(code: &str, grade: u8) -> String {
    let csv = fs::read_to_string(fixture("blueprints.csv")).expect("read catalog");
    csv.lines()
        .skip(1)
        .map(|line| line.split(',').collect::<Vec<_>>())
        .find(|cols| cols[2] == code && cols[3] == grade.to_string())
        .map(|cols| cols[4].to_string())
        .expect("blueprint row present")
}

#[test]
fn reports_capable_engineers_per_component() {
    cli()
        .arg("engineers")
        .arg(fixture("coriolis_python.json"))
        .assert()
        .success()
        .stdout(contains("- Thrusters: Dirty Drives G5: Professor Palin"))
        .stdout(contains(
            "- Frame Shift Drive: Increased Range G5: Felicity Farseer, Elvira Martuuk",
        ))
        .stdout(contains("- Multi-cannon: Overcharged G2: Tod 'The Blaster' McQuinn"));
}

#[test]
fn check_reports_available() {
    cli()
        .args(["check", "--engineer", "professor palin", "--uuid"])
        .arg(fixture_uuid("Engine_Dirty", 5))
        .assert()
        .success()
        .stdout(contains("available: Professor Palin for Thrusters: Dirty Drives G5"));
}

#[test]
fn check_reports_unavailable() {
    cli()
        .args(["check", "--engineer", "Selene Jean", "--uuid"])
        .arg(fixture_uuid("FSD_LongRange", 1))
        .assert()
        .success()
        .stdout(contains("unavailable: Selene Jean"));
}

#[test]
fn check_suggests_engineer_names() {
    cli()
        .args(["check", "--engineer", "Selene Jeen", "--uuid"])
        .arg(fixture_uuid("Armour_HeavyDuty", 1))
        .assert()
        .failure()
        .stderr(contains("Did you mean 'Selene Jean'?"));
}

#[test]
fn check_with_grade_resolves_shared_uuid() {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = dir.path().join("blueprints.csv");
    fs::write(
        &catalog,
        "type,name,code,grade,uuid\n\
         Thrusters,Dirty Drives,Engine_Dirty,1,shared\n\
         Thrusters,Dirty Drives,Engine_Dirty,2,shared\n\
         Thrusters,Dirty Drives,Engine_Dirty,3,dd-3\n",
    )
    .expect("write catalog");

    let check = |grade: Option<&str>| {
        let mut cmd = cargo_bin_cmd!("edloadout-cli");
        cmd.env("RUST_LOG", "error")
            .arg("--catalog")
            .arg(&catalog)
            .arg("--engineers")
            .arg(fixture("engineers.json"))
            .args(["check", "--engineer", "Professor Palin", "--uuid", "shared"]);
        if let Some(grade) = grade {
            cmd.args(["--grade", grade]);
        }
        cmd.assert().success()
    };

    check(None).stdout(contains("Dirty Drives G1"));
    check(Some("2")).stdout(contains("Dirty Drives G2"));
    check(Some("3")).stdout(contains("Dirty Drives G3"));
}

#[test]
fn check_with_unknown_grade_fails() {
    cli()
        .args(["check", "--engineer", "Professor Palin", "--uuid"])
        .arg(fixture_uuid("Engine_Dirty", 1))
        .args(["--grade", "9"])
        .assert()
        .failure()
        .stderr(contains("at grade 9 is not in the catalog"));
}
