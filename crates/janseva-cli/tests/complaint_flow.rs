mod common;
use common::TestFixture;

use predicates::prelude::*;

fn file_complaint_json(fixture: &TestFixture) -> serde_json::Value {
    let output = fixture
        .command()
        .args([
            "complaint",
            "file",
            "electricity",
            "--name",
            "Asha Rao",
            "--phone",
            "9999999999",
            "--issue-type",
            "Power Outage",
            "--description",
            "No power since morning",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run complaint file");

    assert!(
        output.status.success(),
        "complaint file should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Parse failed")
}

/// Test: valid submission yields a success badge with a non-empty,
/// department-prefixed identifier
#[test]
fn test_file_complaint_returns_identifier() {
    let fixture = TestFixture::new();
    let result = file_complaint_json(&fixture);

    let id = result["content"]["complaint_id"]
        .as_str()
        .expect("Expected complaint_id");
    assert!(id.starts_with("EL"), "id should carry EL prefix: {}", id);

    assert_eq!(result["content"]["status"], "submitted");
    assert_eq!(result["badge"]["level"], "success");
    let label = result["badge"]["label"].as_str().unwrap();
    assert!(label.contains(id), "badge should carry the new id");
}

/// Test: a filed complaint shows up in the next listing (submissions
/// are wired into the store)
#[test]
fn test_filed_complaint_appears_in_list() {
    let fixture = TestFixture::new();
    let filed = file_complaint_json(&fixture);
    let id = filed["content"]["complaint_id"].as_str().unwrap();

    let output = fixture
        .command()
        .args(["complaint", "list", "electricity", "--format", "json"])
        .output()
        .expect("Failed to run complaint list");
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Parse failed");
    let complaints = result["content"]["complaints"]
        .as_array()
        .expect("Expected complaints array");

    let ids: Vec<&str> = complaints
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&id), "new complaint {} missing from {:?}", id, ids);

    // Insertion order: the new record comes after the seeds
    assert_eq!(ids.last(), Some(&id));
}

/// Test: every identifier minted in a session is distinct
#[test]
fn test_sequential_filings_get_distinct_identifiers() {
    let fixture = TestFixture::new();

    let a = file_complaint_json(&fixture)["content"]["complaint_id"]
        .as_str()
        .unwrap()
        .to_string();
    let b = file_complaint_json(&fixture)["content"]["complaint_id"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(a, b);
}

/// Test: empty description blocks submission, no record is created
#[test]
fn test_empty_description_is_rejected() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args([
            "complaint",
            "file",
            "electricity",
            "--name",
            "Asha Rao",
            "--phone",
            "9999999999",
            "--issue-type",
            "Power Outage",
            "--description",
            "",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("description is required"));

    // Seeded electricity records only, nothing new
    let output = fixture
        .command()
        .args(["complaint", "list", "electricity", "--format", "json"])
        .output()
        .expect("Failed to run complaint list");
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Parse failed");
    assert_eq!(result["content"]["total_count"], 2);
}

/// Test: issue type must belong to the department's list
#[test]
fn test_foreign_issue_type_is_rejected() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args([
            "complaint",
            "file",
            "electricity",
            "--name",
            "Asha Rao",
            "--phone",
            "9999999999",
            "--issue-type",
            "Gas Leak",
            "--description",
            "wrong department",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an issue type"));
}

/// Test: omitted contact flags fall back to the configured citizen profile
#[test]
fn test_contact_falls_back_to_citizen_profile() {
    let fixture = TestFixture::new();

    // Without a profile the validation gate blocks the submit
    fixture
        .command()
        .args([
            "complaint",
            "file",
            "gas",
            "--issue-type",
            "Gas Leak",
            "--description",
            "Smell near the regulator",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name is required"));

    fixture.write_citizen_profile("Asha Rao", "9999999999");

    fixture
        .command()
        .args([
            "complaint",
            "file",
            "gas",
            "--issue-type",
            "Gas Leak",
            "--description",
            "Smell near the regulator",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Complaint registered successfully"));
}

/// Test: plain output shows the confirmation view
#[test]
fn test_plain_confirmation_banner() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args([
            "complaint",
            "file",
            "municipal",
            "--name",
            "Asha Rao",
            "--phone",
            "9999999999",
            "--issue-type",
            "Water Supply",
            "--description",
            "Low pressure in Ward 5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Complaint registered successfully"))
        .stdout(predicate::str::contains("updates via SMS"));
}

/// Test: operator advance moves status forward and persists
#[test]
fn test_advance_status_forward() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args([
            "complaint",
            "advance",
            "MC2024002",
            "--status",
            "in-progress",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run complaint advance");
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Parse failed");
    assert_eq!(result["content"]["from"], "submitted");
    assert_eq!(result["content"]["to"], "in-progress");

    let output = fixture
        .command()
        .args(["complaint", "list", "municipal", "--format", "json"])
        .output()
        .expect("Failed to run complaint list");
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Parse failed");
    let statuses: Vec<&str> = result["content"]["complaints"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["id"] == "MC2024002")
        .map(|c| c["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["in-progress"]);
}

/// Test: status never regresses
#[test]
fn test_advance_rejects_regression() {
    let fixture = TestFixture::new();

    // MC2024003 is seeded as resolved
    fixture
        .command()
        .args(["complaint", "advance", "MC2024003", "--status", "submitted"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot move complaint status"));
}

/// Test: advancing an unknown id is a clean error
#[test]
fn test_advance_unknown_id() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["complaint", "advance", "ZZ000000000", "--status", "resolved"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No complaint found"));
}
