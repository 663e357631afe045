use std::fmt;
use std::str::FromStr;

use janseva_types::{Department, Error};
use serde::{Deserialize, Serialize};

use crate::catalog::{department_profile, DepartmentProfile};

/// Section of a department page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTab {
    Overview,
    Works,
    Personnel,
    Complaints,
    Notices,
}

impl PageTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageTab::Overview => "overview",
            PageTab::Works => "works",
            PageTab::Personnel => "personnel",
            PageTab::Complaints => "complaints",
            PageTab::Notices => "notices",
        }
    }
}

impl fmt::Display for PageTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(PageTab::Overview),
            "works" => Ok(PageTab::Works),
            "personnel" => Ok(PageTab::Personnel),
            "complaints" => Ok(PageTab::Complaints),
            "notices" => Ok(PageTab::Notices),
            other => Err(Error::InvalidTab(other.to_string())),
        }
    }
}

/// Composed view state for one department page.
///
/// Tab selection is synchronous and idempotent; it is never persisted,
/// so every page starts on the overview tab.
#[derive(Debug, Clone)]
pub struct DepartmentPage {
    department: Department,
    profile: DepartmentProfile,
    active_tab: PageTab,
}

impl DepartmentPage {
    pub fn new(department: Department) -> Self {
        Self {
            department,
            profile: department_profile(department),
            active_tab: PageTab::Overview,
        }
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn profile(&self) -> &DepartmentProfile {
        &self.profile
    }

    pub fn active_tab(&self) -> PageTab {
        self.active_tab
    }

    /// Tabs available on this page, in display order. Only the municipal
    /// page carries the works tab.
    pub fn tabs(&self) -> Vec<PageTab> {
        let mut tabs = vec![PageTab::Overview];
        if !self.profile.works.is_empty() {
            tabs.push(PageTab::Works);
        }
        tabs.extend([PageTab::Personnel, PageTab::Complaints, PageTab::Notices]);
        tabs
    }

    /// Switch the visible tab. Selecting the current tab again is a
    /// no-op; selecting a tab this page does not have is rejected and
    /// leaves the page unchanged.
    pub fn select_tab(&mut self, tab: PageTab) -> Result<(), Error> {
        if !self.tabs().contains(&tab) {
            return Err(Error::TabUnavailable {
                tab: tab.to_string(),
                department: self.department.to_string(),
            });
        }
        self.active_tab = tab;
        Ok(())
    }
}
