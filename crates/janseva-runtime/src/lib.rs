pub mod config;
pub mod error;
pub mod store;

pub use config::{resolve_data_dir, CitizenProfile, Config};
pub use error::{Error, Result};
pub use store::ComplaintStore;
