//! Drives one run: open the source, then either summarize or filter.

use crate::config::{InputSource, OutputMode, ZoneStatConfig};
use crate::error::Result;
use crate::zone::{RecordLines, ReportOutcome, SourceLine, ZoneStats, filter_lines, render_report};
use chrono::Local;
use std::io::Write;
use std::time::Instant;
use tracing::{info, warn};

/// Local time with a numeric UTC offset, e.g. `2024-01-02T03:04+0200`
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M%z";

/// Run against the configured source, writing everything for stdout to `out`
pub fn run<W: Write>(config: &ZoneStatConfig, out: &mut W) -> Result<ReportOutcome> {
    if config.tsig.is_some() && matches!(config.source, InputSource::File(_)) {
        warn!("--tsig has no effect when reading from a file");
    }

    match &config.mode {
        OutputMode::Summary => {
            write_header(config, out)?;
            let started = Instant::now();
            let lines = RecordLines::open(config)?;
            let outcome = summarize(&config.zone, lines, out)?;
            writeln!(out)?;
            writeln!(out, "### Elapsed time: {:.2}s", started.elapsed().as_secs_f64())?;
            Ok(outcome)
        }
        OutputMode::Filter(filter) => {
            let lines = RecordLines::open(config)?;
            let matched = filter_lines(lines, filter, out)?;
            info!("Printed {} matching records", matched);
            Ok(ReportOutcome::Rendered)
        }
    }
}

/// Aggregate a line stream and render the report for it
pub fn summarize<I, W>(zone: &str, lines: I, out: &mut W) -> Result<ReportOutcome>
where
    I: IntoIterator<Item = Result<SourceLine>>,
    W: Write,
{
    let stats = ZoneStats::collect(zone, lines)?;
    let outcome = render_report(&stats, out)?;

    if outcome == ReportOutcome::NoData {
        warn!("No records found for zone {}", zone);
    }

    Ok(outcome)
}

fn write_header<W: Write>(config: &ZoneStatConfig, out: &mut W) -> Result<()> {
    writeln!(out, "### Zone: {}", config.zone)?;
    writeln!(out, "### Source: {}", config.source_description())?;
    writeln!(out, "### Time: {}", Local::now().format(TIME_FORMAT))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::RecordFilter;
    use chrono::{FixedOffset, TimeZone};
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn test_summarize_empty_stream() {
        let mut out = Vec::new();
        let outcome = summarize("example.com.", RecordLines::from_reader(Cursor::new("")), &mut out)
            .unwrap();

        assert_eq!(outcome, ReportOutcome::NoData);
        assert_eq!(String::from_utf8(out).unwrap(), "ERROR: No zone data found.\n");
    }

    #[test]
    fn test_time_format_has_numeric_offset() {
        let time = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap();
        assert_eq!(time.format(TIME_FORMAT).to_string(), "2024-01-02T03:04+0200");

        let time = FixedOffset::west_opt(5 * 3600 + 1800)
            .unwrap()
            .with_ymd_and_hms(2024, 7, 1, 23, 59, 0)
            .unwrap();
        assert_eq!(time.format(TIME_FORMAT).to_string(), "2024-07-01T23:59-0530");
    }

    #[test]
    fn test_summary_run_missing_file() {
        let config = ZoneStatConfig {
            zone: "example.com.".to_string(),
            source: InputSource::File(PathBuf::from("/nonexistent/zonestat/zone.txt")),
            ..Default::default()
        };

        let mut out = Vec::new();
        assert!(run(&config, &mut out).is_err());
        // The header is written before the source is opened
        assert!(String::from_utf8(out).unwrap().starts_with("### Zone: example.com.\n"));
    }

    #[test]
    fn test_filter_run_missing_file_writes_nothing() {
        let config = ZoneStatConfig {
            zone: "example.com.".to_string(),
            source: InputSource::File(PathBuf::from("/nonexistent/zonestat/zone.txt")),
            mode: OutputMode::Filter(RecordFilter::Wildcard),
            ..Default::default()
        };

        let mut out = Vec::new();
        assert!(run(&config, &mut out).is_err());
        assert!(out.is_empty());
    }
}
