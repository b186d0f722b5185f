use super::{ResourceRecord, SourceLine, classify};
use crate::error::{Result, ZoneStatError};
use std::io::Write;
use tracing::debug;

/// Predicate for the listing modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Records of one type, compared case-insensitively
    Type(String),
    /// Wildcard-owned records other than RRSIG
    Wildcard,
}

impl RecordFilter {
    /// Type filter; the requested mnemonic is upper-cased once here
    pub fn by_type(rtype: &str) -> Self {
        RecordFilter::Type(rtype.to_ascii_uppercase())
    }

    pub fn matches(&self, record: &ResourceRecord<'_>) -> bool {
        match self {
            RecordFilter::Type(rtype) => record.rtype.eq_ignore_ascii_case(rtype),
            RecordFilter::Wildcard => classify::is_wildcard(record),
        }
    }
}

/// Copy matching lines to `out` verbatim and in input order.
///
/// Returns how many lines were written.
pub fn filter_lines<I, W>(lines: I, filter: &RecordFilter, out: &mut W) -> Result<u64>
where
    I: IntoIterator<Item = Result<SourceLine>>,
    W: Write,
{
    let mut matched = 0;

    for line in lines {
        let line = line?;
        let record = ResourceRecord::parse(&line.text)
            .map_err(|e| ZoneStatError::at_line(line.number, e))?;

        if filter.matches(&record) {
            writeln!(out, "{}", line.text)?;
            matched += 1;
        }
    }

    debug!("{:?} filter matched {} records", filter, matched);
    Ok(matched)
}
