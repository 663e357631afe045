use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::department::Department;
use crate::error::Error;

/// Opaque complaint identifier (department prefix + numeric suffix).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(String);

impl ComplaintId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a filed complaint.
///
/// Statuses only move forward: submitted -> in-progress -> resolved.
/// Mutation happens on the operator side; the record API enforces the
/// ordering regardless of who calls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    Submitted,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    /// Position in the lifecycle order. Higher ranks never regress.
    pub fn rank(&self) -> u8 {
        match self {
            ComplaintStatus::Submitted => 0,
            ComplaintStatus::InProgress => 1,
            ComplaintStatus::Resolved => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "submitted",
            ComplaintStatus::InProgress => "in-progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(ComplaintStatus::Submitted),
            "in-progress" => Ok(ComplaintStatus::InProgress),
            "resolved" => Ok(ComplaintStatus::Resolved),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

/// One filed complaint.
///
/// `id`, `department`, and `date` are fixed at creation. Only `status`
/// changes afterwards, and only forward via [`ComplaintRecord::advance_to`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub id: ComplaintId,
    pub title: String,
    pub description: String,
    pub department: Department,
    pub status: ComplaintStatus,
    pub date: DateTime<Utc>,

    /// Contact name captured from the filing form, absent on seeded records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizen_name: Option<String>,

    /// Contact phone captured from the filing form, absent on seeded records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizen_phone: Option<String>,
}

impl ComplaintRecord {
    /// Advance the status, rejecting backwards transitions.
    ///
    /// Re-asserting the current status is a no-op so operator commands
    /// stay idempotent.
    pub fn advance_to(&mut self, next: ComplaintStatus) -> Result<(), Error> {
        if next.rank() < self.status.rank() {
            return Err(Error::StatusRegression {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(status: ComplaintStatus) -> ComplaintRecord {
        ComplaintRecord {
            id: ComplaintId::new("MC2024001"),
            title: "Garbage not collected".to_string(),
            description: "No garbage pickup for 3 days in Block C, Ward 5".to_string(),
            department: Department::Municipal,
            status,
            date: Utc.with_ymd_and_hms(2024, 2, 4, 9, 30, 0).unwrap(),
            citizen_name: None,
            citizen_phone: None,
        }
    }

    #[test]
    fn status_advances_forward() {
        let mut r = record(ComplaintStatus::Submitted);
        r.advance_to(ComplaintStatus::InProgress).unwrap();
        r.advance_to(ComplaintStatus::Resolved).unwrap();
        assert_eq!(r.status, ComplaintStatus::Resolved);
    }

    #[test]
    fn status_never_regresses() {
        let mut r = record(ComplaintStatus::Resolved);
        let err = r.advance_to(ComplaintStatus::Submitted).unwrap_err();
        assert_eq!(
            err,
            Error::StatusRegression {
                from: ComplaintStatus::Resolved,
                to: ComplaintStatus::Submitted,
            }
        );
        assert_eq!(r.status, ComplaintStatus::Resolved);
    }

    #[test]
    fn reasserting_current_status_is_noop() {
        let mut r = record(ComplaintStatus::InProgress);
        r.advance_to(ComplaintStatus::InProgress).unwrap();
        assert_eq!(r.status, ComplaintStatus::InProgress);
    }

    #[test]
    fn serializes_with_kebab_case_status() {
        let json = serde_json::to_value(record(ComplaintStatus::InProgress)).unwrap();
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["department"], "municipal");
        assert_eq!(json["id"], "MC2024001");
        // Seeded records carry no contact fields at all
        assert!(json.get("citizen_name").is_none());
    }

    #[test]
    fn deserializes_record_without_contact_fields() {
        let json = r#"{
            "id": "EL2024001",
            "title": "Voltage fluctuation",
            "description": "Frequent voltage dips in Sector 18",
            "department": "electricity",
            "status": "submitted",
            "date": "2024-02-03T10:00:00Z"
        }"#;
        let r: ComplaintRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.department, Department::Electricity);
        assert_eq!(r.citizen_name, None);
    }
}
