use clap::Subcommand;

use super::enums::{DepartmentName, StatusName, TabName};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "View department pages")]
    Department {
        #[command(subcommand)]
        command: DepartmentCommand,
    },

    #[command(about = "File and track complaints")]
    Complaint {
        #[command(subcommand)]
        command: ComplaintCommand,
    },

    #[command(about = "Browse department notices")]
    Notice {
        #[command(subcommand)]
        command: NoticeCommand,
    },

    #[command(about = "Browse the appointed personnel directory")]
    Personnel {
        #[command(subcommand)]
        command: PersonnelCommand,
    },
}

#[derive(Subcommand)]
pub enum DepartmentCommand {
    #[command(about = "Show a department page on one of its tabs")]
    Show {
        department: DepartmentName,

        #[arg(long, default_value = "overview", help = "Tab to open the page on")]
        tab: TabName,
    },
}

#[derive(Subcommand)]
pub enum ComplaintCommand {
    #[command(about = "List complaints filed with a department")]
    List { department: DepartmentName },

    #[command(about = "File a new complaint")]
    File {
        department: DepartmentName,

        #[arg(long, help = "Your full name (falls back to the configured citizen profile)")]
        name: Option<String>,

        #[arg(long, help = "Your phone number (falls back to the configured citizen profile)")]
        phone: Option<String>,

        #[arg(long, help = "One of the department's issue types")]
        issue_type: String,

        #[arg(long, help = "Describe your issue in detail")]
        description: String,
    },

    #[command(about = "Advance a complaint's status (operator use)")]
    Advance {
        complaint_id: String,

        #[arg(long)]
        status: StatusName,
    },
}

#[derive(Subcommand)]
pub enum NoticeCommand {
    #[command(about = "List notices and alerts for a department")]
    List { department: DepartmentName },
}

#[derive(Subcommand)]
pub enum PersonnelCommand {
    #[command(about = "List appointed personnel for a department")]
    List { department: DepartmentName },
}
