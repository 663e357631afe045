use std::fmt;

use chrono::{DateTime, Utc};
use janseva_types::{ComplaintId, ComplaintRecord, ComplaintStatus, Department};

use crate::id::ComplaintIdGenerator;

/// Draft field values held while a form is being edited.
///
/// Owned exclusively by one [`ComplaintForm`]; discarded on submission
/// or reset, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintDraft {
    pub name: String,
    pub phone: String,
    pub issue_type: String,
    pub description: String,
}

/// Where a form sits in its submit lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing(ComplaintDraft),
    Submitted { complaint_id: ComplaintId },
}

/// Why a submit attempt was blocked. All variants are recoverable by
/// correcting input; no record is created and the draft is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    MissingName,
    MissingPhone,
    IssueTypeNotSelected,
    UnknownIssueType(String),
    MissingDescription,
    /// Guard against duplicate records from repeated submission.
    AlreadySubmitted,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::MissingName => write!(f, "name is required"),
            SubmitError::MissingPhone => write!(f, "phone number is required"),
            SubmitError::IssueTypeNotSelected => write!(f, "an issue type must be selected"),
            SubmitError::UnknownIssueType(t) => {
                write!(f, "'{}' is not an issue type for this department", t)
            }
            SubmitError::MissingDescription => write!(f, "description is required"),
            SubmitError::AlreadySubmitted => {
                write!(f, "this complaint was already submitted; reset to file another")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// Advisory acknowledgment surfaced to the user after a submission.
///
/// Fire-and-forget: suppressing it has no effect on the form transition
/// or the record handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub complaint_id: ComplaintId,
}

/// Everything a successful submission produces.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Record to hand to the complaint store collaborator.
    pub record: ComplaintRecord,
    pub notification: Notification,
}

/// Controller for one complaint filing.
///
/// Holds the draft while editing, validates on submit, and transitions
/// to `Submitted` exactly once. A second submission through the same
/// instance is rejected; `reset` returns to an empty draft.
#[derive(Debug, Clone)]
pub struct ComplaintForm {
    department: Department,
    issue_types: Vec<String>,
    state: FormState,
}

impl ComplaintForm {
    pub fn new(department: Department, issue_types: Vec<String>) -> Self {
        Self {
            department,
            issue_types,
            state: FormState::Editing(ComplaintDraft::default()),
        }
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn issue_types(&self) -> &[String] {
        &self.issue_types
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> Option<&ComplaintDraft> {
        match &self.state {
            FormState::Editing(draft) => Some(draft),
            FormState::Submitted { .. } => None,
        }
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        if let FormState::Editing(draft) = &mut self.state {
            draft.name = value.into();
        }
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        if let FormState::Editing(draft) = &mut self.state {
            draft.phone = value.into();
        }
    }

    pub fn set_issue_type(&mut self, value: impl Into<String>) {
        if let FormState::Editing(draft) = &mut self.state {
            draft.issue_type = value.into();
        }
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        if let FormState::Editing(draft) = &mut self.state {
            draft.description = value.into();
        }
    }

    fn validate(&self, draft: &ComplaintDraft) -> Result<(), SubmitError> {
        if draft.name.trim().is_empty() {
            return Err(SubmitError::MissingName);
        }
        if draft.phone.trim().is_empty() {
            return Err(SubmitError::MissingPhone);
        }
        if draft.issue_type.trim().is_empty() {
            return Err(SubmitError::IssueTypeNotSelected);
        }
        if !self.issue_types.iter().any(|t| t == &draft.issue_type) {
            return Err(SubmitError::UnknownIssueType(draft.issue_type.clone()));
        }
        if draft.description.trim().is_empty() {
            return Err(SubmitError::MissingDescription);
        }
        Ok(())
    }

    /// True when a submit attempt would pass validation.
    pub fn can_submit(&self) -> bool {
        match &self.state {
            FormState::Editing(draft) => self.validate(draft).is_ok(),
            FormState::Submitted { .. } => false,
        }
    }

    /// Validate the draft and, if it passes, mint an identifier, build
    /// the record, and move to `Submitted`. On failure the state and
    /// draft are left exactly as they were.
    pub fn submit(
        &mut self,
        ids: &ComplaintIdGenerator,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome, SubmitError> {
        let draft = match &self.state {
            FormState::Editing(draft) => draft,
            FormState::Submitted { .. } => return Err(SubmitError::AlreadySubmitted),
        };
        self.validate(draft)?;

        let id = ids.generate(self.department, now);
        let record = ComplaintRecord {
            id: id.clone(),
            title: draft.issue_type.clone(),
            description: draft.description.clone(),
            department: self.department,
            status: ComplaintStatus::Submitted,
            date: now,
            citizen_name: Some(draft.name.clone()),
            citizen_phone: Some(draft.phone.clone()),
        };

        self.state = FormState::Submitted {
            complaint_id: id.clone(),
        };

        Ok(SubmitOutcome {
            record,
            notification: Notification { complaint_id: id },
        })
    }

    /// "File another complaint": back to editing with the empty default
    /// draft, whatever came before.
    pub fn reset(&mut self) {
        self.state = FormState::Editing(ComplaintDraft::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn electricity_form() -> ComplaintForm {
        ComplaintForm::new(
            Department::Electricity,
            vec![
                "Power Outage".to_string(),
                "Voltage Fluctuation".to_string(),
                "Billing Problem".to_string(),
            ],
        )
    }

    fn fill_valid(form: &mut ComplaintForm) {
        form.set_name("Asha Rao");
        form.set_phone("9999999999");
        form.set_issue_type("Power Outage");
        form.set_description("No power since morning");
    }

    #[test]
    fn valid_submission_produces_record_and_notification() {
        let mut form = electricity_form();
        fill_valid(&mut form);

        let ids = ComplaintIdGenerator::new();
        let outcome = form.submit(&ids, Utc::now()).unwrap();

        assert!(outcome.notification.complaint_id.as_str().starts_with("EL"));
        assert_eq!(outcome.record.id, outcome.notification.complaint_id);
        assert_eq!(outcome.record.status, ComplaintStatus::Submitted);
        assert_eq!(outcome.record.title, "Power Outage");
        assert_eq!(outcome.record.citizen_name.as_deref(), Some("Asha Rao"));
        assert!(matches!(form.state(), FormState::Submitted { .. }));
        assert!(form.draft().is_none());
    }

    #[test]
    fn empty_description_blocks_submission() {
        let mut form = electricity_form();
        form.set_name("Asha Rao");
        form.set_phone("9999999999");
        form.set_issue_type("Power Outage");

        let ids = ComplaintIdGenerator::new();
        let err = form.submit(&ids, Utc::now()).unwrap_err();

        assert_eq!(err, SubmitError::MissingDescription);
        // No transition, draft intact
        assert!(matches!(form.state(), FormState::Editing(_)));
        assert_eq!(form.draft().unwrap().name, "Asha Rao");
    }

    #[test]
    fn each_empty_field_blocks_submission() {
        let fields: [(&str, SubmitError); 4] = [
            ("name", SubmitError::MissingName),
            ("phone", SubmitError::MissingPhone),
            ("issue_type", SubmitError::IssueTypeNotSelected),
            ("description", SubmitError::MissingDescription),
        ];

        for (field, expected) in fields {
            let mut form = electricity_form();
            fill_valid(&mut form);
            match field {
                "name" => form.set_name(""),
                "phone" => form.set_phone(""),
                "issue_type" => form.set_issue_type(""),
                _ => form.set_description("  "),
            }

            let ids = ComplaintIdGenerator::new();
            assert_eq!(form.submit(&ids, Utc::now()).unwrap_err(), expected);
            assert!(matches!(form.state(), FormState::Editing(_)));
        }
    }

    #[test]
    fn issue_type_must_belong_to_department() {
        let mut form = electricity_form();
        fill_valid(&mut form);
        form.set_issue_type("Gas Leak");

        let ids = ComplaintIdGenerator::new();
        let err = form.submit(&ids, Utc::now()).unwrap_err();
        assert_eq!(err, SubmitError::UnknownIssueType("Gas Leak".to_string()));
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut form = electricity_form();
        fill_valid(&mut form);

        let ids = ComplaintIdGenerator::new();
        form.submit(&ids, Utc::now()).unwrap();

        assert_eq!(
            form.submit(&ids, Utc::now()).unwrap_err(),
            SubmitError::AlreadySubmitted
        );
    }

    #[test]
    fn reset_returns_to_empty_draft() {
        let mut form = electricity_form();
        fill_valid(&mut form);

        let ids = ComplaintIdGenerator::new();
        form.submit(&ids, Utc::now()).unwrap();
        form.reset();

        assert_eq!(form.draft(), Some(&ComplaintDraft::default()));

        // Reset is idempotent regardless of prior field values
        form.set_name("Someone Else");
        form.reset();
        assert_eq!(form.draft(), Some(&ComplaintDraft::default()));
    }

    #[test]
    fn field_edits_ignored_after_submission() {
        let mut form = electricity_form();
        fill_valid(&mut form);

        let ids = ComplaintIdGenerator::new();
        form.submit(&ids, Utc::now()).unwrap();

        form.set_name("Too Late");
        assert!(form.draft().is_none());
    }

    #[test]
    fn can_submit_tracks_validation_gate() {
        let mut form = electricity_form();
        assert!(!form.can_submit());
        fill_valid(&mut form);
        assert!(form.can_submit());
        form.set_phone("");
        assert!(!form.can_submit());
    }
}
