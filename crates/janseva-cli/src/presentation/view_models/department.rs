use janseva_engine::PageTab;
use janseva_types::{BalanceSummary, Department, Notice, PersonnelContact, WorkProgress};
use serde::Serialize;

use super::complaint::ComplaintEntryViewModel;

/// Full department page snapshot. JSON output carries every pane; the
/// text view renders only the active tab.
#[derive(Debug, Serialize)]
pub struct DepartmentPageViewModel {
    pub department: Department,
    pub title: String,
    pub tagline: String,
    pub active_tab: PageTab,
    pub tabs: Vec<PageTab>,

    pub balance: BalanceSummary,
    pub recent_notices: Vec<Notice>,
    pub personnel: Vec<PersonnelContact>,
    pub notices: Vec<Notice>,
    pub works: Vec<WorkProgress>,
    pub complaints: Vec<ComplaintEntryViewModel>,
    pub issue_types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NoticeListViewModel {
    pub department: Department,
    pub notices: Vec<Notice>,
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct PersonnelListViewModel {
    pub department: Department,
    pub personnel: Vec<PersonnelContact>,
    pub total_count: usize,
}
