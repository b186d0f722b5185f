use super::{ZoneStats, classify, constants};
use std::fmt;
use std::io::{self, Write};

/// Diagnostic printed instead of a report when no records were observed
pub const NO_DATA_MESSAGE: &str = "ERROR: No zone data found.";

/// What [`render_report`] ended up writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    Rendered,
    NoData,
}

/// One line of the per-type table
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRow {
    pub rtype: String,
    pub count: u64,
    /// Share of all records
    pub percent: f64,
    /// Share of non-DNSSEC records; only for non-DNSSEC types in a signed zone
    pub percent_no_dnssec: Option<f64>,
}

/// Figures derived from finished statistics, ready to print
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSummary {
    pub is_signed: bool,
    pub total_rr: u64,
    pub total_rr_no_dnssec: u64,
    pub rrsets: u64,
    pub rrsets_no_dnssec: u64,
    pub names: u64,
    /// Owner count minus NSEC3 count, present for NSEC3-signed zones.
    ///
    /// Approximate: assumes one NSEC3 per hashed owner.
    pub names_no_dnssec: Option<i64>,
    pub wildcards: u64,
    pub delegations: u64,
    pub tsigs: u64,
    pub ttl_min: i64,
    pub ttl_max: i64,
    pub ttl_avg: u64,
    /// Sorted by type mnemonic
    pub types: Vec<TypeRow>,
}

impl ZoneSummary {
    /// Derive the report figures; `None` when no records were observed
    pub fn from_stats(stats: &ZoneStats) -> Option<Self> {
        let counts = stats.counts();
        let ttl_avg = stats.ttl_average()?;
        let is_signed = stats.is_signed();

        let names = stats.owner_count() as u64;
        let nsec3 = stats.type_count(constants::NSEC3);
        let names_no_dnssec = (is_signed && nsec3 > 0).then(|| names as i64 - nsec3 as i64);

        let mut types: Vec<TypeRow> = stats
            .type_counts()
            .iter()
            .map(|(rtype, &count)| {
                let percent_no_dnssec = (is_signed && !classify::is_dnssec_type(rtype))
                    .then(|| percentage(count, counts.rr_no_dnssec));
                TypeRow {
                    rtype: rtype.clone(),
                    count,
                    percent: percentage(count, counts.rr),
                    percent_no_dnssec,
                }
            })
            .collect();
        types.sort_by(|a, b| a.rtype.cmp(&b.rtype));

        Some(Self {
            is_signed,
            total_rr: counts.rr,
            total_rr_no_dnssec: counts.rr_no_dnssec,
            rrsets: stats.rrset_counts().len() as u64,
            rrsets_no_dnssec: stats.rrset_counts_no_dnssec().len() as u64,
            names,
            names_no_dnssec,
            wildcards: counts.rr_wild,
            delegations: stats.delegations().len() as u64,
            tsigs: counts.rr_tsig,
            ttl_min: stats.ttl_min(),
            ttl_max: stats.ttl_max(),
            ttl_avg,
            types,
        })
    }
}

impl fmt::Display for ZoneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total RR     = {:>15}", group_thousands(self.total_rr))?;
        if self.is_signed {
            writeln!(
                f,
                "Total RR     = {:>15} (minus DNSSEC)",
                group_thousands(self.total_rr_no_dnssec)
            )?;
        }
        writeln!(f, "Total RRsets = {:>15}", group_thousands(self.rrsets))?;
        if self.is_signed {
            writeln!(
                f,
                "Total RRsets = {:>15} (minus DNSSEC)",
                group_thousands(self.rrsets_no_dnssec)
            )?;
        }
        writeln!(f, "Total Names  = {:>15}", group_thousands(self.names))?;
        if let Some(names) = self.names_no_dnssec {
            writeln!(f, "Total Names  = {:>15} (minus DNSSEC)", group_thousands(names))?;
        }
        writeln!(f, "Wildcards    = {:>15}", group_thousands(self.wildcards))?;
        writeln!(f, "Delegations  = {:>15}", group_thousands(self.delegations))?;
        if self.tsigs > 0 {
            writeln!(f, "Total TSIGs  = {:>15}", group_thousands(self.tsigs))?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "TTL (min, max, avg) = {}, {}, {}",
            self.ttl_min, self.ttl_max, self.ttl_avg
        )?;

        writeln!(f)?;
        write!(f, "{:<15} {:>15}       {:>6}", "RRtype", "Count", "%")?;
        if self.is_signed {
            write!(f, "   {:>6}", "%-non-dnssec")?;
        }
        writeln!(f)?;

        for row in &self.types {
            write!(
                f,
                "{:<15} {:>15}      {:>6.1}%",
                row.rtype,
                group_thousands(row.count),
                row.percent
            )?;
            if let Some(percent) = row.percent_no_dnssec {
                write!(f, "        {:>6.1}%", percent)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Write the summary report, or the no-data diagnostic for an empty zone
pub fn render_report<W: Write>(stats: &ZoneStats, out: &mut W) -> io::Result<ReportOutcome> {
    match ZoneSummary::from_stats(stats) {
        Some(summary) => {
            write!(out, "{}", summary)?;
            Ok(ReportOutcome::Rendered)
        }
        None => {
            writeln!(out, "{}", NO_DATA_MESSAGE)?;
            Ok(ReportOutcome::NoData)
        }
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    100.0 * count as f64 / total as f64
}

/// Format an integer with comma thousands separators
pub fn group_thousands<N: Into<i128>>(value: N) -> String {
    let value = value.into();
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
