use std::path::Path;

use anyhow::Result;
use janseva_engine::{department_page, PageTab};
use janseva_runtime::ComplaintStore;
use janseva_types::Department;

use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::views::DepartmentPageView;
use crate::render;

pub fn show(
    data_dir: &Path,
    department: Department,
    tab: PageTab,
    format: OutputFormat,
) -> Result<()> {
    let mut page = department_page(department);
    page.select_tab(tab)?;

    let store = ComplaintStore::open(data_dir)?;
    let complaints = store.list(department);

    let result = presenters::department::present_page(&page, &complaints);
    let view = DepartmentPageView::new(&result.content);
    render::emit(&result, &view, format)
}
