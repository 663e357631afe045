use chrono::{DateTime, Utc};
use janseva_types::{ComplaintStatus, Department};
use serde::Serialize;

use super::common::StatusLevel;

/// One complaint as shown in a listing.
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintEntryViewModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub department: Department,
    pub status: ComplaintStatus,
    /// Badge style for the status (pure display mapping).
    pub status_level: StatusLevel,
    pub date: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizen_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComplaintListViewModel {
    pub department: Department,
    pub complaints: Vec<ComplaintEntryViewModel>,
    pub total_count: usize,
}

/// Confirmation payload after a successful filing.
#[derive(Debug, Serialize)]
pub struct ComplaintFiledViewModel {
    pub complaint_id: String,
    pub department: Department,
    pub title: String,
    pub status: ComplaintStatus,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ComplaintAdvancedViewModel {
    pub complaint_id: String,
    pub department: Department,
    pub from: ComplaintStatus,
    pub to: ComplaintStatus,
}
