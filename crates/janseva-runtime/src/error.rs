use std::fmt;

/// Result type for janseva-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Domain layer error
    Domain(janseva_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Complaint store file could not be read or written
    Store(serde_json::Error),

    /// Configuration error
    Config(String),

    /// No complaint with the given identifier exists
    ComplaintNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Store(err) => write!(f, "Complaint store error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::ComplaintNotFound(id) => write!(f, "No complaint found with id '{}'", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Domain(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Store(err) => Some(err),
            Error::Config(_) | Error::ComplaintNotFound(_) => None,
        }
    }
}

impl From<janseva_types::Error> for Error {
    fn from(err: janseva_types::Error) -> Self {
        Error::Domain(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Store(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
