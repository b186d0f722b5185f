use crate::zone::RecordError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneStatError {
    #[error("Line {line_number}: {source}")]
    Record {
        line_number: usize,
        #[source]
        source: RecordError,
    },

    #[error("Zone data source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ZoneStatError {
    /// Attach the physical line number to a per-record failure
    pub fn at_line(line_number: usize, source: RecordError) -> Self {
        ZoneStatError::Record {
            line_number,
            source,
        }
    }
}

impl From<std::io::Error> for ZoneStatError {
    fn from(err: std::io::Error) -> Self {
        ZoneStatError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ZoneStatError>;
