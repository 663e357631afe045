use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::{text, time};
use crate::presentation::view_models::{
    ComplaintAdvancedViewModel, ComplaintEntryViewModel, ComplaintFiledViewModel,
    ComplaintListViewModel, StatusLevel,
};

fn status_display(entry: &ComplaintEntryViewModel) -> String {
    let label = entry.status.as_str();
    match entry.status_level {
        StatusLevel::Info => format!("{}", label.cyan()),
        StatusLevel::Warning => format!("{}", label.yellow()),
        StatusLevel::Success => format!("{}", label.green()),
        StatusLevel::Error => format!("{}", label.red()),
    }
}

pub(crate) fn write_entry(f: &mut fmt::Formatter<'_>, entry: &ComplaintEntryViewModel) -> fmt::Result {
    writeln!(
        f,
        "{} {} {} {}",
        time::format_relative_time(entry.date).bright_black(),
        entry.id.yellow(),
        status_display(entry),
        entry.title
    )?;
    writeln!(
        f,
        "    {}",
        text::truncate_for_display(&entry.description, 80).bright_black()
    )
}

pub struct ComplaintListView<'a> {
    data: &'a ComplaintListViewModel,
}

impl<'a> ComplaintListView<'a> {
    pub fn new(data: &'a ComplaintListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ComplaintListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.data.complaints {
            write_entry(f, entry)?;
        }
        Ok(())
    }
}

pub struct ComplaintFiledView<'a> {
    data: &'a ComplaintFiledViewModel,
}

impl<'a> ComplaintFiledView<'a> {
    pub fn new(data: &'a ComplaintFiledViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ComplaintFiledView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your complaint has been registered. You will receive updates via SMS.")?;
        writeln!(f)?;
        writeln!(f, "  ID:         {}", self.data.complaint_id.yellow())?;
        writeln!(f, "  Department: {}", self.data.department)?;
        writeln!(f, "  Issue:      {}", self.data.title)?;
        writeln!(f, "  Status:     {}", self.data.status.as_str().cyan())
    }
}

pub struct ComplaintAdvancedView<'a> {
    data: &'a ComplaintAdvancedViewModel,
}

impl<'a> ComplaintAdvancedView<'a> {
    pub fn new(data: &'a ComplaintAdvancedViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ComplaintAdvancedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} -> {}",
            self.data.complaint_id.yellow(),
            self.data.from,
            self.data.to.as_str().green()
        )
    }
}
