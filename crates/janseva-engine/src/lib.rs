// Engine module - pure complaint lifecycle logic (intake, identifiers, composition)
// This layer sits between the domain schema (types) and CLI presentation

pub mod catalog;
pub mod form;
pub mod id;
pub mod page;

pub use catalog::{department_profile, DepartmentProfile};
pub use form::{ComplaintDraft, ComplaintForm, FormState, Notification, SubmitError, SubmitOutcome};
pub use id::ComplaintIdGenerator;
pub use page::{DepartmentPage, PageTab};

use janseva_types::Department;

// Façade API - stable entry points for the CLI layer

/// Compose the page for a department, starting on the overview tab.
pub fn department_page(department: Department) -> DepartmentPage {
    DepartmentPage::new(department)
}

/// Build an empty complaint form with the department's issue types.
pub fn complaint_form(department: Department) -> ComplaintForm {
    let profile = catalog::department_profile(department);
    ComplaintForm::new(department, profile.issue_types)
}
