//! `address <n> <ip> wildcard <wc> ...` config line model.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ADDRESS_LINE_RE: Regex = Regex::new(
        r"^(?P<prefix>\s*address\s+\d+\s+)(?P<ip>\d+\.\d+\.\d+\.\d+)\s+wildcard\s+(?P<wc>\S+)(?P<suffix>.*)$"
    )
    .expect("Invalid Regex?");
}

/// An address entry inside an address-set stanza, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressLine {
    /// Leading text up to the IP, e.g. `"  address 10 "`.
    pub prefix: String,
    /// Dotted quad as written in the config (not validated).
    pub ip: String,
    /// Wildcard (inverse) mask, either a dotted quad or a lone `0`.
    pub wildcard: String,
    /// Everything after the wildcard, usually ` description <carrier>`.
    pub suffix: String,
}

impl AddressLine {
    /// Match a single line (a trailing `\n` is ignored) against the address grammar.
    pub fn parse(line: &str) -> Option<AddressLine> {
        let caps = ADDRESS_LINE_RE.captures(line.strip_suffix('\n').unwrap_or(line))?;
        Some(AddressLine {
            prefix: caps["prefix"].to_string(),
            ip: caps["ip"].to_string(),
            wildcard: caps["wc"].to_string(),
            suffix: caps["suffix"].to_string(),
        })
    }

    /// Render the line with `<ip> wildcard <wc>` replaced by `<ip>/<prefix_len>`.
    pub fn to_cidr_line(&self, prefix_len: u8) -> String {
        format!(
            "{prefix}{ip}/{prefix_len}{suffix}\n",
            prefix = self.prefix,
            ip = self.ip,
            suffix = self.suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_line() {
        let line = AddressLine::parse("  address 10 1.2.3.4 wildcard 0.0.0.7 description ABC\n")
            .expect("line should match");
        assert_eq!(line.prefix, "  address 10 ");
        assert_eq!(line.ip, "1.2.3.4");
        assert_eq!(line.wildcard, "0.0.0.7");
        assert_eq!(line.suffix, " description ABC");
    }

    #[test]
    fn test_parse_zero_wildcard_no_suffix() {
        let line = AddressLine::parse(" address 3 10.0.0.1 wildcard 0").expect("line should match");
        assert_eq!(line.wildcard, "0");
        assert_eq!(line.suffix, "");
        assert_eq!(line.to_cidr_line(32), " address 3 10.0.0.1/32\n");
    }

    #[test]
    fn test_parse_rejects_other_lines() {
        assert!(AddressLine::parse("ip address-set internationalgn type object\n").is_none());
        assert!(AddressLine::parse(" address 1 1.2.3.0/24 description CT\n").is_none());
        assert!(AddressLine::parse(" address 1 1.2.3.0 mask 24\n").is_none());
        assert!(AddressLine::parse("#\n").is_none());
    }
}
