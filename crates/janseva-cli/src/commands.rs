use anyhow::Result;
use janseva_runtime::resolve_data_dir;

use super::args::{Cli, Commands, ComplaintCommand, DepartmentCommand, NoticeCommand, PersonnelCommand};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Department { command } => match command {
            DepartmentCommand::Show { department, tab } => handlers::department::show(
                &data_dir,
                department.into(),
                tab.into(),
                cli.format,
            ),
        },

        Commands::Complaint { command } => match command {
            ComplaintCommand::List { department } => {
                handlers::complaint::list(&data_dir, department.into(), cli.format)
            }
            ComplaintCommand::File {
                department,
                name,
                phone,
                issue_type,
                description,
            } => handlers::complaint::file(
                &data_dir,
                department.into(),
                handlers::complaint::FileArgs {
                    name,
                    phone,
                    issue_type,
                    description,
                },
                cli.format,
            ),
            ComplaintCommand::Advance {
                complaint_id,
                status,
            } => handlers::complaint::advance(&data_dir, &complaint_id, status.into(), cli.format),
        },

        Commands::Notice { command } => match command {
            NoticeCommand::List { department } => {
                handlers::notice::list(department.into(), cli.format)
            }
        },

        Commands::Personnel { command } => match command {
            PersonnelCommand::List { department } => {
                handlers::personnel::list(department.into(), cli.format)
            }
        },
    }
}

fn show_guidance() {
    println!("janseva - Citizen services portal\n");
    println!("Quick commands:");
    println!("  janseva department show municipal          # Browse a department page");
    println!("  janseva complaint list electricity         # Your complaints and their status");
    println!("  janseva complaint file gas \\");
    println!("      --name \"Asha Rao\" --phone 9999999999 \\");
    println!("      --issue-type \"Gas Leak\" --description \"...\"");
    println!("  janseva notice list municipal              # Notices & alerts\n");
    println!("For more commands:");
    println!("  janseva --help");
}
