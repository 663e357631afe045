use clap::ValueEnum;
use janseva_engine::PageTab;
use janseva_types::{ComplaintStatus, Department};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DepartmentName {
    Electricity,
    Gas,
    Municipal,
}

impl From<DepartmentName> for Department {
    fn from(name: DepartmentName) -> Self {
        match name {
            DepartmentName::Electricity => Department::Electricity,
            DepartmentName::Gas => Department::Gas,
            DepartmentName::Municipal => Department::Municipal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabName {
    Overview,
    Works,
    Personnel,
    Complaints,
    Notices,
}

impl From<TabName> for PageTab {
    fn from(name: TabName) -> Self {
        match name {
            TabName::Overview => PageTab::Overview,
            TabName::Works => PageTab::Works,
            TabName::Personnel => PageTab::Personnel,
            TabName::Complaints => PageTab::Complaints,
            TabName::Notices => PageTab::Notices,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusName {
    Submitted,
    InProgress,
    Resolved,
}

impl From<StatusName> for ComplaintStatus {
    fn from(name: StatusName) -> Self {
        match name {
            StatusName::Submitted => ComplaintStatus::Submitted,
            StatusName::InProgress => ComplaintStatus::InProgress,
            StatusName::Resolved => ComplaintStatus::Resolved,
        }
    }
}
