use std::fmt;

use janseva_engine::PageTab;
use janseva_types::{Notice, NoticeKind, WorkTrack};
use owo_colors::OwoColorize;

use super::complaint::write_entry;
use crate::presentation::formatters::time;
use crate::presentation::view_models::{
    DepartmentPageViewModel, NoticeListViewModel, PersonnelListViewModel,
};

fn notice_marker(kind: NoticeKind) -> String {
    match kind {
        NoticeKind::Info => format!("{}", "info".cyan()),
        NoticeKind::Warning => format!("{}", "warning".yellow()),
        NoticeKind::Urgent => format!("{}", "urgent".red()),
    }
}

fn write_notice(f: &mut fmt::Formatter<'_>, notice: &Notice) -> fmt::Result {
    writeln!(
        f,
        "{} [{}] {}",
        time::format_date(notice.date).bright_black(),
        notice_marker(notice.kind),
        notice.title
    )?;
    writeln!(f, "    {}", notice.description.bright_black())
}

pub struct DepartmentPageView<'a> {
    data: &'a DepartmentPageViewModel,
}

impl<'a> DepartmentPageView<'a> {
    pub fn new(data: &'a DepartmentPageViewModel) -> Self {
        Self { data }
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.title.bold())?;
        writeln!(f, "{}", self.data.tagline.bright_black())?;
        writeln!(f)?;

        let tabs: Vec<String> = self
            .data
            .tabs
            .iter()
            .map(|t| {
                if *t == self.data.active_tab {
                    format!("[{}]", t.as_str().bold())
                } else {
                    format!(" {} ", t)
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join(" "))?;
        writeln!(f)
    }

    fn write_overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Balance: {}", self.data.balance.amount.bold())?;
        writeln!(f, "Valid Until:     {}", self.data.balance.valid_until)?;
        if let Some(payment) = &self.data.balance.last_payment {
            writeln!(f, "Last Payment:    {} on {}", payment.amount, payment.date)?;
        }
        writeln!(f)?;
        writeln!(f, "Recent Notices")?;
        for notice in &self.data.recent_notices {
            write_notice(f, notice)?;
        }
        Ok(())
    }

    fn write_works(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ongoing Development Works")?;
        for work in &self.data.works {
            let filled = (work.progress_pct as usize) / 10;
            let bar: String = "#".repeat(filled) + &"-".repeat(10 - filled);
            let track = match work.track {
                WorkTrack::OnTrack => format!("{}", "On Track".cyan()),
                WorkTrack::Ahead => format!("{}", "Ahead".green()),
                WorkTrack::Delayed => format!("{}", "Delayed".red()),
            };
            writeln!(
                f,
                "[{}] {:>3}% {} ({})",
                bar, work.progress_pct, work.title, track
            )?;
            writeln!(
                f,
                "    {} | {} - {}",
                work.area.bright_black(),
                time::format_date(work.start_date).bright_black(),
                time::format_date(work.expected_completion).bright_black()
            )?;
        }
        Ok(())
    }

    fn write_personnel(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Appointed Personnel")?;
        writeln!(f, "{:<20} {:<25} {:<12} AREA", "NAME", "ROLE", "PHONE")?;
        writeln!(f, "{}", "-".repeat(72))?;
        for person in &self.data.personnel {
            writeln!(
                f,
                "{:<20} {:<25} {:<12} {}",
                person.name, person.role, person.phone, person.area
            )?;
        }
        Ok(())
    }

    fn write_complaints(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your Complaints")?;
        if self.data.complaints.is_empty() {
            writeln!(f, "{}", "No complaints on file.".bright_black())?;
        }
        for entry in &self.data.complaints {
            write_entry(f, entry)?;
        }
        writeln!(f)?;
        writeln!(f, "Issue types for new complaints:")?;
        writeln!(f, "  {}", self.data.issue_types.join(", "))
    }

    fn write_notices(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Notices & Alerts")?;
        for notice in &self.data.notices {
            write_notice(f, notice)?;
        }
        Ok(())
    }
}

impl fmt::Display for DepartmentPageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        match self.data.active_tab {
            PageTab::Overview => self.write_overview(f),
            PageTab::Works => self.write_works(f),
            PageTab::Personnel => self.write_personnel(f),
            PageTab::Complaints => self.write_complaints(f),
            PageTab::Notices => self.write_notices(f),
        }
    }
}

pub struct NoticeListView<'a> {
    data: &'a NoticeListViewModel,
}

impl<'a> NoticeListView<'a> {
    pub fn new(data: &'a NoticeListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for NoticeListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for notice in &self.data.notices {
            write_notice(f, notice)?;
        }
        Ok(())
    }
}

pub struct PersonnelListView<'a> {
    data: &'a PersonnelListViewModel,
}

impl<'a> PersonnelListView<'a> {
    pub fn new(data: &'a PersonnelListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for PersonnelListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for person in &self.data.personnel {
            writeln!(
                f,
                "{} {} {} {}",
                person.name.bold(),
                person.role,
                person.phone.cyan(),
                person.area.bright_black()
            )?;
        }
        Ok(())
    }
}
