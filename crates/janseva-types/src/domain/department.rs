use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Civic department a complaint or notice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Electricity,
    Gas,
    Municipal,
}

impl Department {
    pub const ALL: [Department; 3] = [
        Department::Electricity,
        Department::Gas,
        Department::Municipal,
    ];

    /// Lowercase wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Electricity => "electricity",
            Department::Gas => "gas",
            Department::Municipal => "municipal",
        }
    }

    /// Two-letter prefix used when minting complaint identifiers.
    pub fn prefix(&self) -> &'static str {
        match self {
            Department::Electricity => "EL",
            Department::Gas => "GS",
            Department::Municipal => "MC",
        }
    }

    /// Human-facing department title.
    pub fn title(&self) -> &'static str {
        match self {
            Department::Electricity => "Electricity Department",
            Department::Gas => "Gas Department",
            Department::Municipal => "Municipal Corporation",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electricity" => Ok(Department::Electricity),
            "gas" => Ok(Department::Gas),
            "municipal" => Ok(Department::Municipal),
            other => Err(Error::InvalidDepartment(other.to_string())),
        }
    }
}
