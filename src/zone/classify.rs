//! Classification predicates applied to every observed record.

use super::{ResourceRecord, constants};

/// Types counted as DNSSEC material; excluded from the "minus DNSSEC" tallies
pub const DNSSEC_TYPES: [&str; 9] = [
    "DNSKEY",
    "DS",
    "CDNSKEY",
    "CDS",
    "TYPE65534",
    "RRSIG",
    "NSEC",
    "NSEC3",
    "NSEC3PARAM",
];

/// Types whose TTL does not contribute to the min/max bounds
pub const TTL_EXCLUDED_TYPES: [&str; 4] = ["NSEC3PARAM", "TYPE65534", "TSIG", "TKEY"];

pub fn is_dnssec_type(rtype: &str) -> bool {
    DNSSEC_TYPES.contains(&rtype)
}

/// True when the record's TTL must be left out of the min/max calculation.
///
/// An RRSIG inherits the exclusion of the type it covers.
pub fn excluded_from_ttl_calc(record: &ResourceRecord<'_>) -> bool {
    if TTL_EXCLUDED_TYPES.contains(&record.rtype) {
        return true;
    }

    record
        .covered_type()
        .is_some_and(|covered| TTL_EXCLUDED_TYPES.contains(&covered))
}

/// Wildcard-owned record; signatures over a wildcard name do not count
pub fn is_wildcard(record: &ResourceRecord<'_>) -> bool {
    record.owner.starts_with(constants::WILDCARD_PREFIX) && record.rtype != constants::RRSIG
}

/// NS record below the zone apex
pub fn is_delegation(record: &ResourceRecord<'_>, zone: &str) -> bool {
    record.rtype == constants::NS && !record.owner.eq_ignore_ascii_case(zone)
}
