use std::fmt;

use crate::domain::ComplaintStatus;

/// Result type for janseva-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// String did not name a known department
    InvalidDepartment(String),

    /// String did not name a known complaint status
    InvalidStatus(String),

    /// String did not name a known page tab
    InvalidTab(String),

    /// Tab exists but is not part of this department's page
    TabUnavailable { tab: String, department: String },

    /// Attempted to move a complaint status backwards
    StatusRegression {
        from: ComplaintStatus,
        to: ComplaintStatus,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDepartment(name) => write!(
                f,
                "unknown department '{}' (expected electricity, gas, or municipal)",
                name
            ),
            Error::InvalidStatus(name) => write!(
                f,
                "unknown complaint status '{}' (expected submitted, in-progress, or resolved)",
                name
            ),
            Error::InvalidTab(name) => write!(f, "unknown page tab '{}'", name),
            Error::TabUnavailable { tab, department } => {
                write!(f, "the {} page has no '{}' tab", department, tab)
            }
            Error::StatusRegression { from, to } => write!(
                f,
                "cannot move complaint status from '{}' back to '{}'",
                from, to
            ),
        }
    }
}

impl std::error::Error for Error {}
