pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod zone;

pub use cli::Cli;
pub use config::{InputSource, OutputMode, ZoneStatConfig};
pub use error::{Result, ZoneStatError};
pub use zone::{ResourceRecord, ZoneStats};
