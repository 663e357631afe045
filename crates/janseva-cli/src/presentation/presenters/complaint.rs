use janseva_engine::SubmitOutcome;
use janseva_types::{ComplaintRecord, ComplaintStatus, Department};

use crate::presentation::view_models::{
    CommandResultViewModel, ComplaintAdvancedViewModel, ComplaintEntryViewModel,
    ComplaintFiledViewModel, ComplaintListViewModel, Guidance, StatusBadge, StatusLevel,
};

/// Pure display mapping from lifecycle status to badge style.
pub fn status_level(status: ComplaintStatus) -> StatusLevel {
    match status {
        ComplaintStatus::Submitted => StatusLevel::Info,
        ComplaintStatus::InProgress => StatusLevel::Warning,
        ComplaintStatus::Resolved => StatusLevel::Success,
    }
}

pub fn entry(record: &ComplaintRecord) -> ComplaintEntryViewModel {
    ComplaintEntryViewModel {
        id: record.id.as_str().to_string(),
        title: record.title.clone(),
        description: record.description.clone(),
        department: record.department,
        status: record.status,
        status_level: status_level(record.status),
        date: record.date,
        citizen_name: record.citizen_name.clone(),
    }
}

/// Present a department's complaints in the order the store supplied
/// them. Zero records is an empty state, never a failure.
pub fn present_list(
    department: Department,
    records: &[&ComplaintRecord],
) -> CommandResultViewModel<ComplaintListViewModel> {
    let complaints: Vec<ComplaintEntryViewModel> = records.iter().map(|r| entry(r)).collect();
    let total_count = complaints.len();

    let result = CommandResultViewModel::new(ComplaintListViewModel {
        department,
        complaints,
        total_count,
    });

    if total_count == 0 {
        result
            .with_badge(StatusBadge::info(format!(
                "No complaints on file for {}",
                department
            )))
            .with_suggestion(
                Guidance::new("File a complaint").with_command(format!(
                    "janseva complaint file {} --issue-type <TYPE> --description <TEXT>",
                    department
                )),
            )
    } else {
        let label = if total_count == 1 {
            "1 complaint found".to_string()
        } else {
            format!("{} complaints found", total_count)
        };
        result.with_badge(StatusBadge::success(label))
    }
}

/// Present the confirmation after a successful submission. The badge is
/// the advisory success notification carrying the new identifier.
pub fn present_filed(outcome: &SubmitOutcome) -> CommandResultViewModel<ComplaintFiledViewModel> {
    let record = &outcome.record;

    CommandResultViewModel::new(ComplaintFiledViewModel {
        complaint_id: outcome.notification.complaint_id.as_str().to_string(),
        department: record.department,
        title: record.title.clone(),
        status: record.status,
        date: record.date,
    })
    .with_badge(StatusBadge::success(format!(
        "Complaint registered successfully! ID: {}",
        outcome.notification.complaint_id
    )))
    .with_suggestion(
        Guidance::new("Track its status")
            .with_command(format!("janseva complaint list {}", record.department)),
    )
}

pub fn present_advanced(
    previous: ComplaintStatus,
    record: &ComplaintRecord,
) -> CommandResultViewModel<ComplaintAdvancedViewModel> {
    CommandResultViewModel::new(ComplaintAdvancedViewModel {
        complaint_id: record.id.as_str().to_string(),
        department: record.department,
        from: previous,
        to: record.status,
    })
    .with_badge(StatusBadge::success(format!(
        "{} moved to {}",
        record.id, record.status
    )))
}
