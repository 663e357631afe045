mod common;
use common::TestFixture;

use predicates::prelude::*;

/// Test: overview tab is the default and shows the balance card
#[test]
fn test_department_show_defaults_to_overview() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["department", "show", "electricity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Electricity Department"))
        .stdout(predicate::str::contains("Current Balance"))
        .stdout(predicate::str::contains("Recent Notices"));
}

/// Test: JSON page snapshot carries every pane plus the seeded complaints
#[test]
fn test_department_show_json_snapshot() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args([
            "department",
            "show",
            "municipal",
            "--tab",
            "complaints",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run department show");
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Parse failed");
    let content = &result["content"];

    assert_eq!(content["active_tab"], "complaints");
    assert_eq!(content["tabs"].as_array().unwrap().len(), 5);
    assert_eq!(content["works"].as_array().unwrap().len(), 4);

    let complaints = content["complaints"].as_array().unwrap();
    assert_eq!(complaints.len(), 3);
    assert_eq!(complaints[0]["id"], "MC2024001");
    assert_eq!(complaints[0]["status"], "in-progress");
    assert_eq!(complaints[0]["status_level"], "warning");
}

/// Test: the works tab only exists on the municipal page
#[test]
fn test_works_tab_unavailable_outside_municipal() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["department", "show", "gas", "--tab", "works"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("works"));

    fixture
        .command()
        .args(["department", "show", "municipal", "--tab", "works"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ongoing Development Works"))
        .stdout(predicate::str::contains("Main Road Resurfacing"));
}

/// Test: notices command lists all department notices
#[test]
fn test_notice_list() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["notice", "list", "gas", "--format", "json"])
        .output()
        .expect("Failed to run notice list");
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Parse failed");
    let notices = result["content"]["notices"].as_array().unwrap();
    assert_eq!(notices.len(), 3);
    assert_eq!(notices[0]["kind"], "warning");
    assert_eq!(result["badge"]["level"], "info");
}

/// Test: personnel directory lists appointed officers
#[test]
fn test_personnel_list() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["personnel", "list", "electricity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rajesh Kumar"))
        .stdout(predicate::str::contains("Area Engineer"));
}

/// Test: running with no subcommand prints guidance, not an error
#[test]
fn test_no_command_shows_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick commands"))
        .stdout(predicate::str::contains("janseva --help"));
}

/// Test: unknown department name is rejected by argument parsing
#[test]
fn test_unknown_department_rejected() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["department", "show", "water"])
        .assert()
        .failure();
}
