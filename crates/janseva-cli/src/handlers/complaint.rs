use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use janseva_engine::ComplaintIdGenerator;
use janseva_runtime::{ComplaintStore, Config};
use janseva_types::{ComplaintStatus, Department};

use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::views::{ComplaintAdvancedView, ComplaintFiledView, ComplaintListView};
use crate::render;

pub fn list(data_dir: &Path, department: Department, format: OutputFormat) -> Result<()> {
    let store = ComplaintStore::open(data_dir)?;
    let records = store.list(department);

    let result = presenters::complaint::present_list(department, &records);
    let view = ComplaintListView::new(&result.content);
    render::emit(&result, &view, format)
}

pub struct FileArgs {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub issue_type: String,
    pub description: String,
}

pub fn file(
    data_dir: &Path,
    department: Department,
    args: FileArgs,
    format: OutputFormat,
) -> Result<()> {
    let config = Config::load_from(&data_dir.join("config.toml"))?;

    // Missing contact flags fall back to the configured citizen profile;
    // if neither is present the form's validation gate rejects the submit.
    let (profile_name, profile_phone) = match config.citizen {
        Some(citizen) => (Some(citizen.name), Some(citizen.phone)),
        None => (None, None),
    };

    let mut form = janseva_engine::complaint_form(department);
    if let Some(name) = args.name.or(profile_name) {
        form.set_name(name);
    }
    if let Some(phone) = args.phone.or(profile_phone) {
        form.set_phone(phone);
    }
    form.set_issue_type(args.issue_type);
    form.set_description(args.description);

    let ids = ComplaintIdGenerator::new();
    let outcome = form.submit(&ids, Utc::now())?;

    let mut store = ComplaintStore::open(data_dir)?;
    store.append(outcome.record.clone())?;

    let result = presenters::complaint::present_filed(&outcome);
    let view = ComplaintFiledView::new(&result.content);
    render::emit(&result, &view, format)
}

pub fn advance(
    data_dir: &Path,
    complaint_id: &str,
    status: ComplaintStatus,
    format: OutputFormat,
) -> Result<()> {
    let mut store = ComplaintStore::open(data_dir)?;

    let previous = store
        .find(complaint_id)
        .map(|r| r.status)
        .ok_or_else(|| janseva_runtime::Error::ComplaintNotFound(complaint_id.to_string()))?;
    let updated = store.advance(complaint_id, status)?;

    let result = presenters::complaint::present_advanced(previous, &updated);
    let view = ComplaintAdvancedView::new(&result.content);
    render::emit(&result, &view, format)
}
