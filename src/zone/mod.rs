pub mod classify;
pub mod errors;
pub mod filter;
pub mod record;
pub mod report;
pub mod source;
pub mod stats;

pub use errors::{RecordError, Result};
pub use filter::{RecordFilter, filter_lines};
pub use record::ResourceRecord;
pub use report::{ReportOutcome, TypeRow, ZoneSummary, render_report};
pub use source::{RecordLines, SourceLine, TransferCommand};
pub use stats::{RecordCounts, RrsetKey, ZoneStats};

/// Record type mnemonics the classifier looks at directly
pub mod constants {
    pub const TSIG: &str = "TSIG";
    pub const RRSIG: &str = "RRSIG";
    pub const NS: &str = "NS";
    pub const NSEC: &str = "NSEC";
    pub const NSEC3: &str = "NSEC3";

    /// Owner prefix that marks a wildcard name
    pub const WILDCARD_PREFIX: &str = "*.";

    /// Starting value for the running TTL minimum, above any TTL seen in practice
    pub const TTL_MIN_SENTINEL: i64 = 86400;

    /// Starting value for the running TTL maximum
    pub const TTL_MAX_SENTINEL: i64 = -1;
}
