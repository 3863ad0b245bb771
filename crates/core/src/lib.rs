pub mod config;
pub mod error;
pub mod types;

pub use config::{EntryOrder, ReportFormat, ScanOptions};
pub use error::{Error, Result};
pub use types::*;
