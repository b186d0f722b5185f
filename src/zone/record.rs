use super::{RecordError, Result, constants};

/// A single resource record in presentation format.
///
/// Fields borrow from the source line; nothing is retained once the
/// record has been observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRecord<'a> {
    /// Owner name exactly as written (not case-folded)
    pub owner: &'a str,
    /// Time to live in seconds
    pub ttl: u64,
    /// Record class (usually IN)
    pub class: &'a str,
    /// Record type mnemonic (A, NS, RRSIG, TYPE65534, ...)
    pub rtype: &'a str,
    /// Everything after the type field, internal whitespace preserved
    pub rdata: &'a str,
}

impl<'a> ResourceRecord<'a> {
    /// Split one line into owner, TTL, class, type and rdata.
    ///
    /// The field count is checked before the TTL, so a short line is always
    /// reported as malformed even when its TTL field is also bad.
    pub fn parse(line: &'a str) -> Result<Self> {
        let malformed = || RecordError::Malformed(line.to_string());

        let (owner, rest) = next_field(line).ok_or_else(malformed)?;
        let (ttl, rest) = next_field(rest).ok_or_else(malformed)?;
        let (class, rest) = next_field(rest).ok_or_else(malformed)?;
        let (rtype, rest) = next_field(rest).ok_or_else(malformed)?;

        let rdata = rest.trim_start();
        if rdata.is_empty() {
            return Err(malformed());
        }

        let ttl = ttl
            .parse::<u64>()
            .map_err(|_| RecordError::InvalidTtl(ttl.to_string()))?;

        Ok(Self {
            owner,
            ttl,
            class,
            rtype,
            rdata,
        })
    }

    /// Type covered by an RRSIG record (first token of its rdata)
    pub fn covered_type(&self) -> Option<&'a str> {
        if self.rtype == constants::RRSIG {
            self.rdata.split_whitespace().next()
        } else {
            None
        }
    }
}

/// Take the next whitespace-delimited token, returning it and the untouched remainder
fn next_field(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_record() {
        let record = ResourceRecord::parse("www.example.com. 3600 IN A 192.0.2.1").unwrap();

        assert_eq!(record.owner, "www.example.com.");
        assert_eq!(record.ttl, 3600);
        assert_eq!(record.class, "IN");
        assert_eq!(record.rtype, "A");
        assert_eq!(record.rdata, "192.0.2.1");
    }

    #[test]
    fn test_rdata_keeps_internal_whitespace() {
        let line = "example.com.\t86400\tIN\tSOA\t\
                    ns1.example.com. hostmaster.example.com. 1 7200  3600 1209600 3600";
        let record = ResourceRecord::parse(line).unwrap();

        assert_eq!(record.rtype, "SOA");
        assert_eq!(
            record.rdata,
            "ns1.example.com. hostmaster.example.com. 1 7200  3600 1209600 3600"
        );
    }

    #[test]
    fn test_short_line_is_malformed() {
        let err = ResourceRecord::parse("example.com. 3600 IN A").unwrap_err();
        assert_eq!(err, RecordError::Malformed("example.com. 3600 IN A".to_string()));

        // Trailing whitespace does not count as a fifth field
        assert!(matches!(
            ResourceRecord::parse("example.com. 3600 IN A   "),
            Err(RecordError::Malformed(_))
        ));
    }

    #[test]
    fn test_invalid_ttl() {
        assert_eq!(
            ResourceRecord::parse("example.com. 1h IN A 192.0.2.1").unwrap_err(),
            RecordError::InvalidTtl("1h".to_string())
        );
        assert!(matches!(
            ResourceRecord::parse("example.com. -5 IN A 192.0.2.1"),
            Err(RecordError::InvalidTtl(_))
        ));
    }

    #[test]
    fn test_ttl_beyond_32_bits() {
        let record = ResourceRecord::parse("a.example.com. 4294967296 IN A 192.0.2.1").unwrap();
        assert_eq!(record.ttl, 4_294_967_296);
    }

    #[test]
    fn test_covered_type() {
        let sig = ResourceRecord::parse(
            "example.com. 3600 IN RRSIG NSEC3PARAM 8 2 0 20250101000000 20241201000000 12345 example.com. abc=",
        )
        .unwrap();
        assert_eq!(sig.covered_type(), Some("NSEC3PARAM"));

        let a = ResourceRecord::parse("example.com. 3600 IN A 192.0.2.1").unwrap();
        assert_eq!(a.covered_type(), None);
    }
}
