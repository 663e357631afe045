use anyhow::Result;
use janseva_engine::department_page;
use janseva_types::Department;

use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::views::PersonnelListView;
use crate::render;

pub fn list(department: Department, format: OutputFormat) -> Result<()> {
    let page = department_page(department);

    let result = presenters::department::present_personnel_list(department, &page);
    let view = PersonnelListView::new(&result.content);
    render::emit(&result, &view, format)
}
