mod args;
mod commands;
mod handlers;
mod presentation;
mod render;

pub use args::{Cli, Commands, ComplaintCommand, DepartmentCommand, NoticeCommand, PersonnelCommand};
pub use commands::run;
