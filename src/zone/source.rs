//! Lazy, forward-only line sources for zone data.
//!
//! A [`RecordLines`] yields one record line at a time from either a local
//! file or the standard output of a zone transfer command. Blank lines and
//! `;` comments are dropped here so the aggregator never sees them.

use crate::config::{InputSource, ZoneStatConfig};
use crate::error::{Result, ZoneStatError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::{debug, info, warn};

/// One record line together with its 1-based position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// External AXFR command, `dig` by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCommand {
    pub program: String,
    pub server: String,
    pub zone: String,
    pub tsig: Option<String>,
}

impl TransferCommand {
    pub fn new(
        program: impl Into<String>,
        server: impl Into<String>,
        zone: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            server: server.into(),
            zone: zone.into(),
            tsig: None,
        }
    }

    pub fn with_tsig(mut self, tsig: Option<String>) -> Self {
        self.tsig = tsig;
        self
    }

    /// Arguments producing one RR per line with a single SOA
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            format!("@{}", self.server),
            "+nocmd".to_string(),
            "+nostats".to_string(),
            "+onesoa".to_string(),
            "-t".to_string(),
            "AXFR".to_string(),
        ];

        if let Some(tsig) = &self.tsig {
            args.push("-y".to_string());
            args.push(tsig.clone());
        }

        args.push(self.zone.clone());
        args
    }
}

/// Iterator over the record lines of a file, pipe or any buffered reader
pub struct RecordLines {
    reader: Box<dyn BufRead>,
    child: Option<Child>,
    description: String,
    line_number: usize,
    buf: String,
    done: bool,
}

impl RecordLines {
    /// Open whichever source the configuration names
    pub fn open(config: &ZoneStatConfig) -> Result<Self> {
        match &config.source {
            InputSource::File(path) => Self::from_file(path),
            InputSource::Transfer { server } => {
                let command = TransferCommand::new(&config.dig_program, server, &config.zone)
                    .with_tsig(config.tsig.clone());
                Self::from_transfer(&command)
            }
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ZoneStatError::SourceUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;

        info!("Reading zone data from {}", path.display());
        Ok(Self::new(
            Box::new(BufReader::new(file)),
            None,
            path.display().to_string(),
        ))
    }

    /// Spawn the transfer command and stream its standard output
    pub fn from_transfer(command: &TransferCommand) -> Result<Self> {
        let args = command.args();
        debug!("Running {} {}", command.program, args.join(" "));

        let mut child = Command::new(&command.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| {
                ZoneStatError::SourceUnavailable(format!(
                    "failed to run {}: {}",
                    command.program, e
                ))
            })?;

        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ZoneStatError::SourceUnavailable(format!(
                    "{} produced no output stream",
                    command.program
                )));
            }
        };

        info!(
            "Transferring zone {} from {} via {}",
            command.zone, command.server, command.program
        );
        Ok(Self::new(
            Box::new(BufReader::new(stdout)),
            Some(child),
            command.program.clone(),
        ))
    }

    /// Wrap an already-open reader
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self::new(Box::new(reader), None, "reader".to_string())
    }

    fn new(reader: Box<dyn BufRead>, child: Option<Child>, description: String) -> Self {
        Self {
            reader,
            child,
            description,
            line_number: 0,
            buf: String::new(),
            done: false,
        }
    }

    /// Reap the transfer command once its output is exhausted
    fn finish(&mut self) -> Result<()> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        let status = child.wait()?;
        if status.success() {
            debug!("{} finished after {} lines", self.description, self.line_number);
            Ok(())
        } else {
            Err(ZoneStatError::SourceUnavailable(format!(
                "{} exited with {}",
                self.description, status
            )))
        }
    }
}

impl Iterator for RecordLines {
    type Item = Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return self.finish().err().map(Err);
                }
                Ok(_) => {
                    self.line_number += 1;
                    let text = self.buf.trim_end_matches(['\n', '\r']);
                    if text.trim().is_empty() || text.trim_start().starts_with(';') {
                        continue;
                    }
                    return Some(Ok(SourceLine::new(self.line_number, text)));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(ZoneStatError::Io(format!(
                        "{} line {}: {}",
                        self.description,
                        self.line_number + 1,
                        e
                    ))));
                }
            }
        }
    }
}

impl Drop for RecordLines {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            // Stopped early: don't leave the transfer running
            if let Ok(None) = child.try_wait() {
                warn!("Stopping {} before end of transfer", self.description);
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }
}
