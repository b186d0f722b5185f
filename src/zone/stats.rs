use super::{ResourceRecord, SourceLine, classify, constants};
use crate::error::{Result, ZoneStatError};
use rustc_hash::FxHashMap;
use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};

/// Named counters maintained alongside the keyed tables
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordCounts {
    /// Every record except TSIG
    pub rr: u64,
    /// Records whose type is not DNSSEC material
    pub rr_no_dnssec: u64,
    /// TSIG records (kept out of every other aggregate)
    pub rr_tsig: u64,
    /// Records left out of the TTL bounds
    pub rr_exclude_ttl: u64,
    /// Wildcard-owned records, signatures excluded
    pub rr_wild: u64,
}

/// Identity of an RRset: owner, type and class
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RrsetKey {
    pub owner: String,
    pub rtype: String,
    pub class: String,
}

impl RrsetKey {
    pub fn new(owner: &str, rtype: &str, class: &str) -> Self {
        Self {
            owner: owner.to_string(),
            rtype: rtype.to_string(),
            class: class.to_string(),
        }
    }
}

/// Running statistics for one pass over a zone's records
#[derive(Debug, Clone)]
pub struct ZoneStats {
    zone: String,
    counts: RecordCounts,
    owner_types: FxHashMap<String, SmallVec<[String; 4]>>,
    type_counts: FxHashMap<String, u64>,
    rrset_counts: FxHashMap<RrsetKey, u64>,
    rrset_counts_no_dnssec: FxHashMap<RrsetKey, u64>,
    delegations: FxHashMap<String, u64>,
    ttl_min: i64,
    ttl_max: i64,
    ttl_sum: u64,
}

impl ZoneStats {
    /// Create empty statistics for the zone with the given apex
    pub fn new(zone: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            counts: RecordCounts::default(),
            owner_types: FxHashMap::default(),
            type_counts: FxHashMap::default(),
            rrset_counts: FxHashMap::default(),
            rrset_counts_no_dnssec: FxHashMap::default(),
            delegations: FxHashMap::default(),
            ttl_min: constants::TTL_MIN_SENTINEL,
            ttl_max: constants::TTL_MAX_SENTINEL,
            ttl_sum: 0,
        }
    }

    /// Fold a whole line stream into fresh statistics.
    ///
    /// The first malformed line or source failure aborts the pass.
    pub fn collect<I>(zone: impl Into<String>, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<SourceLine>>,
    {
        let mut stats = Self::new(zone);

        for line in lines {
            let line = line?;
            let record = ResourceRecord::parse(&line.text)
                .map_err(|e| ZoneStatError::at_line(line.number, e))?;
            stats.observe(&record);
        }

        debug!(
            "Observed {} records ({} TSIG) for zone {}",
            stats.counts.rr, stats.counts.rr_tsig, stats.zone
        );

        Ok(stats)
    }

    /// Update every aggregate with one record
    pub fn observe(&mut self, record: &ResourceRecord<'_>) {
        trace!("Observing {} {} {}", record.owner, record.class, record.rtype);

        if record.rtype == constants::TSIG {
            self.counts.rr_tsig += 1;
            return;
        }

        if classify::is_wildcard(record) {
            self.counts.rr_wild += 1;
        }

        // The average covers every record, including the TTL-excluded ones
        self.ttl_sum = self.ttl_sum.saturating_add(record.ttl);

        if classify::excluded_from_ttl_calc(record) {
            self.counts.rr_exclude_ttl += 1;
        } else {
            let ttl = i64::try_from(record.ttl).unwrap_or(i64::MAX);
            self.ttl_min = self.ttl_min.min(ttl);
            self.ttl_max = self.ttl_max.max(ttl);
        }

        match self.owner_types.get_mut(record.owner) {
            Some(types) => types.push(record.rtype.to_string()),
            None => {
                self.owner_types
                    .insert(record.owner.to_string(), smallvec![record.rtype.to_string()]);
            }
        }

        increment(&mut self.type_counts, record.rtype);

        let rrset = RrsetKey::new(record.owner, record.rtype, record.class);
        self.counts.rr += 1;

        if !classify::is_dnssec_type(record.rtype) {
            self.counts.rr_no_dnssec += 1;
            *self.rrset_counts_no_dnssec.entry(rrset.clone()).or_insert(0) += 1;
        }
        *self.rrset_counts.entry(rrset).or_insert(0) += 1;

        if classify::is_delegation(record, &self.zone) {
            increment(&mut self.delegations, record.owner);
        }
    }

    /// Zone apex the statistics were collected for
    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn counts(&self) -> &RecordCounts {
        &self.counts
    }

    /// Number of distinct owner names
    pub fn owner_count(&self) -> usize {
        self.owner_types.len()
    }

    /// Types seen at an owner, in observation order
    pub fn owner_types(&self, owner: &str) -> Option<&[String]> {
        self.owner_types.get(owner).map(|types| types.as_slice())
    }

    pub fn type_counts(&self) -> &FxHashMap<String, u64> {
        &self.type_counts
    }

    /// Occurrences of one type, zero when never seen
    pub fn type_count(&self, rtype: &str) -> u64 {
        self.type_counts.get(rtype).copied().unwrap_or(0)
    }

    pub fn rrset_counts(&self) -> &FxHashMap<RrsetKey, u64> {
        &self.rrset_counts
    }

    pub fn rrset_counts_no_dnssec(&self) -> &FxHashMap<RrsetKey, u64> {
        &self.rrset_counts_no_dnssec
    }

    /// NS record count per delegated owner
    pub fn delegations(&self) -> &FxHashMap<String, u64> {
        &self.delegations
    }

    /// Smallest eligible TTL, or the sentinel when none was eligible
    pub fn ttl_min(&self) -> i64 {
        self.ttl_min
    }

    /// Largest eligible TTL, or the sentinel when none was eligible
    pub fn ttl_max(&self) -> i64 {
        self.ttl_max
    }

    pub fn ttl_sum(&self) -> u64 {
        self.ttl_sum
    }

    /// Integer average TTL over all non-TSIG records
    pub fn ttl_average(&self) -> Option<u64> {
        self.ttl_sum.checked_div(self.counts.rr)
    }

    /// Whether NSEC or NSEC3 appeared anywhere in the zone
    pub fn is_signed(&self) -> bool {
        self.type_counts.contains_key(constants::NSEC)
            || self.type_counts.contains_key(constants::NSEC3)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.rr == 0
    }
}

fn increment(map: &mut FxHashMap<String, u64>, key: &str) {
    match map.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            map.insert(key.to_string(), 1);
        }
    }
}
