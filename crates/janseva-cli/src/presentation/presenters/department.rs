use janseva_engine::{DepartmentPage, PageTab};
use janseva_types::{ComplaintRecord, Department};

use super::complaint::entry;
use crate::presentation::view_models::{
    CommandResultViewModel, DepartmentPageViewModel, Guidance, NoticeListViewModel,
    PersonnelListViewModel, StatusBadge,
};

/// Snapshot a composed department page. The complaints pane comes from
/// the store; everything else from the page's catalog profile.
pub fn present_page(
    page: &DepartmentPage,
    complaints: &[&ComplaintRecord],
) -> CommandResultViewModel<DepartmentPageViewModel> {
    let profile = page.profile();

    let view = DepartmentPageViewModel {
        department: page.department(),
        title: page.department().title().to_string(),
        tagline: profile.tagline.to_string(),
        active_tab: page.active_tab(),
        tabs: page.tabs(),
        balance: profile.balance.clone(),
        recent_notices: profile.recent_notices().to_vec(),
        personnel: profile.personnel.clone(),
        notices: profile.notices.clone(),
        works: profile.works.clone(),
        complaints: complaints.iter().map(|r| entry(r)).collect(),
        issue_types: profile.issue_types.clone(),
    };

    let result = CommandResultViewModel::new(view);
    if page.active_tab() == PageTab::Complaints {
        result.with_suggestion(
            Guidance::new("File a complaint").with_command(format!(
                "janseva complaint file {} --issue-type <TYPE> --description <TEXT>",
                page.department()
            )),
        )
    } else {
        result
    }
}

pub fn present_notice_list(
    department: Department,
    page: &DepartmentPage,
) -> CommandResultViewModel<NoticeListViewModel> {
    let notices = page.profile().notices.clone();
    let total_count = notices.len();

    CommandResultViewModel::new(NoticeListViewModel {
        department,
        notices,
        total_count,
    })
    .with_badge(StatusBadge::info(format!(
        "{} notices for {}",
        total_count, department
    )))
}

pub fn present_personnel_list(
    department: Department,
    page: &DepartmentPage,
) -> CommandResultViewModel<PersonnelListViewModel> {
    let personnel = page.profile().personnel.clone();
    let total_count = personnel.len();

    CommandResultViewModel::new(PersonnelListViewModel {
        department,
        personnel,
        total_count,
    })
    .with_badge(StatusBadge::info(format!(
        "{} appointed officers for {}",
        total_count, department
    )))
}
