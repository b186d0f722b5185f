use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
If specifying an input file as the source of the zone, it must be composed
of 1 presentation format DNS RR per line, with no continuation lines.";

/// Summarize the contents of a DNS zone, obtained via zone transfer or
/// from a pre-captured file
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "zonestat", version, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Verbose diagnostics on stderr (the report itself is unchanged)
    #[arg(short, long)]
    pub verbose: bool,

    /// Server IP or hostname to get the AXFR from (default 127.0.0.1)
    #[arg(long, value_name = "SERVER", conflicts_with = "infile")]
    pub server: Option<String>,

    /// TSIG key for the transfer, as [algorithm:]name:key
    #[arg(long, value_name = "SPEC")]
    pub tsig: Option<String>,

    /// Read zone contents from this file instead of a transfer
    #[arg(long, value_name = "FILE")]
    pub infile: Option<PathBuf>,

    /// Only print records of this type
    #[arg(long = "type", value_name = "RRTYPE", conflicts_with = "wildcard")]
    pub rtype: Option<String>,

    /// Only print wildcard records
    #[arg(long)]
    pub wildcard: bool,

    /// Zone to summarize
    #[arg(value_name = "ZONE")]
    pub zone: String,
}
