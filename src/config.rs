use crate::cli::Cli;
use crate::error::{Result, ZoneStatError};
use crate::zone::RecordFilter;
use std::path::PathBuf;

/// Server asked for the AXFR when neither a server nor a file is given
pub const DEFAULT_SERVER: &str = "127.0.0.1";

/// Transfer program used unless `ZONESTAT_DIG` names another
pub const DEFAULT_DIG_PROGRAM: &str = "dig";

/// Environment variable overriding the transfer program
pub const DIG_PROGRAM_ENV: &str = "ZONESTAT_DIG";

/// Where zone data comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Pre-captured presentation-format file
    File(PathBuf),
    /// AXFR from a name server
    Transfer { server: String },
}

/// What gets written to stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Aggregate statistics report
    Summary,
    /// Matching input lines only
    Filter(RecordFilter),
}

/// Immutable settings for one run, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneStatConfig {
    /// Zone apex, always with a trailing dot
    pub zone: String,

    pub source: InputSource,

    /// TSIG key spec handed to the transfer program
    pub tsig: Option<String>,

    pub mode: OutputMode,

    /// Raise the stderr log level; never changes stdout
    pub verbose: bool,

    /// Program run for zone transfers
    pub dig_program: String,
}

impl Default for ZoneStatConfig {
    fn default() -> Self {
        Self {
            zone: ".".to_string(),
            source: InputSource::Transfer {
                server: DEFAULT_SERVER.to_string(),
            },
            tsig: None,
            mode: OutputMode::Summary,
            verbose: false,
            dig_program: DEFAULT_DIG_PROGRAM.to_string(),
        }
    }
}

impl ZoneStatConfig {
    /// Build from parsed arguments plus the environment.
    /// Returns Err if the combination is unusable
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::from_parts(cli, std::env::var(DIG_PROGRAM_ENV).ok())
    }

    /// Build from parsed arguments with an explicit transfer program override
    pub fn from_parts(cli: &Cli, dig_program: Option<String>) -> Result<Self> {
        if cli.zone.trim().is_empty() {
            return Err(ZoneStatError::Config("zone name not specified".to_string()));
        }

        let source = match (&cli.infile, &cli.server) {
            (Some(_), Some(_)) => {
                return Err(ZoneStatError::Config(
                    "contradictory options specified: --server and --infile".to_string(),
                ));
            }
            (Some(path), None) => InputSource::File(path.clone()),
            (None, server) => InputSource::Transfer {
                server: server.clone().unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            },
        };

        let mode = match (&cli.rtype, cli.wildcard) {
            (Some(_), true) => {
                return Err(ZoneStatError::Config(
                    "contradictory options specified: --type and --wildcard".to_string(),
                ));
            }
            (Some(rtype), false) => OutputMode::Filter(RecordFilter::by_type(rtype)),
            (None, true) => OutputMode::Filter(RecordFilter::Wildcard),
            (None, false) => OutputMode::Summary,
        };

        let config = Self {
            zone: normalize_zone(&cli.zone),
            source,
            tsig: cli.tsig.clone(),
            mode,
            verbose: cli.verbose,
            dig_program: dig_program
                .filter(|program| !program.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DIG_PROGRAM.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.zone.ends_with('.') {
            return Err(ZoneStatError::Config(format!(
                "zone name is not fully qualified: {:?}",
                self.zone
            )));
        }

        if self.zone.chars().any(char::is_whitespace) {
            return Err(ZoneStatError::Config(format!(
                "zone name contains whitespace: {:?}",
                self.zone
            )));
        }

        if let Some(tsig) = &self.tsig {
            validate_tsig(tsig)?;
        }

        if let OutputMode::Filter(RecordFilter::Type(rtype)) = &self.mode {
            if rtype.is_empty() || rtype.chars().any(char::is_whitespace) {
                return Err(ZoneStatError::Config(format!(
                    "invalid record type filter: {:?}",
                    rtype
                )));
            }
        }

        Ok(())
    }

    /// Human-readable description of the data source for the report header
    pub fn source_description(&self) -> String {
        match &self.source {
            InputSource::File(path) => format!("file: {}", path.display()),
            InputSource::Transfer { server } => format!("zone transfer from: {}", server),
        }
    }
}

/// Append the trailing dot if missing
pub fn normalize_zone(zone: &str) -> String {
    let zone = zone.trim();
    if zone.ends_with('.') {
        zone.to_string()
    } else {
        format!("{}.", zone)
    }
}

/// Accept `name:key` or `algorithm:name:key`, every part non-empty
fn validate_tsig(tsig: &str) -> Result<()> {
    let parts: Vec<&str> = tsig.split(':').collect();
    if !(2..=3).contains(&parts.len()) || parts.iter().any(|part| part.is_empty()) {
        return Err(ZoneStatError::Config(format!(
            "TSIG must be given as [algorithm:]name:key, got {:?}",
            tsig
        )));
    }
    Ok(())
}
