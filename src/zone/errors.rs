use thiserror::Error;

/// Errors raised while splitting a presentation-format line into a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Fewer than five whitespace-separated fields
    #[error("Malformed record, expected <owner> <ttl> <class> <type> <rdata>: {0:?}")]
    Malformed(String),
    /// TTL field is not an unsigned integer
    #[error("Invalid TTL value: {0}")]
    InvalidTtl(String),
}

pub type Result<T> = std::result::Result<T, RecordError>;
