//! Shared fixtures for the zonestat integration tests

#![allow(dead_code)] // Not every test file uses every fixture

use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use zonestat::zone::{RecordLines, SourceLine};
use zonestat::{Result, ZoneStats};

/// Small NSEC3-signed zone as dig prints it for an AXFR
pub const SIGNED_ZONE: &str = "\
; <<>> DiG 9.18.24 <<>> @127.0.0.1 +nocmd +nostats +onesoa -t AXFR example.com.
; (1 server found)
;; global options: +cmd
example.com.\t3600\tIN\tSOA\tns1.example.com. hostmaster.example.com. 2024010101 7200 3600 1209600 300
example.com.\t3600\tIN\tRRSIG\tSOA 13 2 3600 20250101000000 20241201000000 40000 example.com. c2ln
example.com.\t3600\tIN\tNS\tns1.example.com.
example.com.\t3600\tIN\tNS\tns2.example.com.
example.com.\t3600\tIN\tRRSIG\tNS 13 2 3600 20250101000000 20241201000000 40000 example.com. c2ln
example.com.\t3600\tIN\tDNSKEY\t257 3 13 a2V5
example.com.\t3600\tIN\tRRSIG\tDNSKEY 13 2 3600 20250101000000 20241201000000 40000 example.com. c2ln
example.com.\t0\tIN\tNSEC3PARAM\t1 0 0 -
example.com.\t0\tIN\tRRSIG\tNSEC3PARAM 13 2 0 20250101000000 20241201000000 40000 example.com. c2ln
example.com.\t0\tIN\tTYPE65534\t\\# 5 0D9C400001
example.com.\t300\tIN\tA\t192.0.2.1
example.com.\t300\tIN\tRRSIG\tA 13 2 300 20250101000000 20241201000000 40000 example.com. c2ln
*.example.com.\t300\tIN\tA\t192.0.2.9
*.example.com.\t300\tIN\tRRSIG\tA 13 2 300 20250101000000 20241201000000 40000 example.com. c2ln
www.example.com.\t300\tIN\tA\t192.0.2.2
www.example.com.\t300\tIN\tA\t192.0.2.3
www.example.com.\t300\tIN\tAAAA\t2001:db8::2
www.example.com.\t300\tIN\tRRSIG\tA 13 3 300 20250101000000 20241201000000 40000 example.com. c2ln
www.example.com.\t300\tIN\tRRSIG\tAAAA 13 3 300 20250101000000 20241201000000 40000 example.com. c2ln
sub.example.com.\t86400\tIN\tNS\tns1.sub.example.com.
sub.example.com.\t86400\tIN\tNS\tns2.sub.example.com.
sub.example.com.\t86400\tIN\tDS\t12345 13 2 ZGlnZXN0
sub.example.com.\t86400\tIN\tRRSIG\tDS 13 3 86400 20250101000000 20241201000000 40000 example.com. c2ln
ns1.sub.example.com.\t86400\tIN\tA\t192.0.2.53
1hk7q0pdqk3s0gl8ah6tq1e5k2arb8ud.example.com.\t300\tIN\tNSEC3\t1 0 0 - 2VPTU5TIMAMQTTGL4LUU9KG21E0AOR3S A NS SOA RRSIG DNSKEY NSEC3PARAM TYPE65534
1hk7q0pdqk3s0gl8ah6tq1e5k2arb8ud.example.com.\t300\tIN\tRRSIG\tNSEC3 13 3 300 20250101000000 20241201000000 40000 example.com. c2ln
2vptu5timamqttgl4luu9kg21e0aor3s.example.com.\t300\tIN\tNSEC3\t1 0 0 - 1HK7Q0PDQK3S0GL8AH6TQ1E5K2ARB8UD A AAAA RRSIG
2vptu5timamqttgl4luu9kg21e0aor3s.example.com.\t300\tIN\tRRSIG\tNSEC3 13 3 300 20250101000000 20241201000000 40000 example.com. c2ln
xfr-key.\t0\tANY\tTSIG\thmac-sha256. 1700000000 300 32 bWFj 1 NOERROR 0
";

/// Unsigned zone with a wildcard and a delegation
pub const UNSIGNED_ZONE: &str = "\
example.org. 3600 IN SOA ns1.example.org. hostmaster.example.org. 1 7200 3600 1209600 300
example.org. 3600 IN NS ns1.example.org.
example.org. 3600 IN MX 10 mail.example.org.
mail.example.org. 600 IN A 198.51.100.25
*.apps.example.org. 60 IN CNAME ingress.example.org.
ingress.example.org. 60 IN A 198.51.100.80
ingress.example.org. 60 IN A 198.51.100.81
dev.example.org. 3600 IN NS ns.dev.example.org.
";

/// Line source over an in-memory string
pub fn lines_from(input: &str) -> RecordLines {
    RecordLines::from_reader(Cursor::new(input.to_string()))
}

/// Numbered lines straight from string slices, for the aggregator alone
pub fn source_lines(input: &[&str]) -> Vec<Result<SourceLine>> {
    input
        .iter()
        .enumerate()
        .map(|(i, text)| Ok(SourceLine::new(i + 1, *text)))
        .collect()
}

pub fn stats_for(zone: &str, input: &str) -> ZoneStats {
    ZoneStats::collect(zone, lines_from(input)).unwrap()
}

/// Write zone text to a temporary file that lives as long as the handle
pub fn zone_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
