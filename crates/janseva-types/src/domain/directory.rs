use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Severity of a published department notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Warning,
    Urgent,
}

/// Public announcement shown on a department page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub kind: NoticeKind,
}

/// Appointed officer listed in the personnel directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonnelContact {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub area: String,
}

/// Last payment or recharge shown alongside a balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: String,
    pub date: String,
}

/// Account balance card shown on the overview tab.
///
/// Amounts are display strings because departments measure different
/// things (rupees for electricity, remaining cylinders for gas).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub amount: String,
    pub valid_until: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_payment: Option<Payment>,
}

/// Delivery confidence for an ongoing municipal work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkTrack {
    OnTrack,
    Ahead,
    Delayed,
}

/// Infrastructure project tracked on the municipal works tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkProgress {
    pub title: String,
    pub area: String,
    pub start_date: NaiveDate,
    pub expected_completion: NaiveDate,
    pub progress_pct: u8,
    pub track: WorkTrack,
}
