use anyhow::Result;
use janseva_engine::department_page;
use janseva_types::Department;

use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::views::NoticeListView;
use crate::render;

pub fn list(department: Department, format: OutputFormat) -> Result<()> {
    let page = department_page(department);

    let result = presenters::department::present_notice_list(department, &page);
    let view = NoticeListView::new(&result.content);
    render::emit(&result, &view, format)
}
