//! Wildcard (inverse) mask to CIDR prefix length conversion.

use std::error::Error;

/// Number of octets in an IPv4 wildcard mask.
pub const OCTETS: usize = 4;

/// Convert a wildcard mask such as `0.0.0.7` (or a lone `0`) into a prefix length.
///
/// Each octet is complemented (`255 - octet`) and the prefix length is the
/// total number of set bits. Non-contiguous masks are not rejected: they
/// simply yield their bit count. Fewer than four octets are padded with `0`,
/// extra octets are ignored.
///
/// # Examples
/// ```
/// use gn_address_audit::processing::wildcard_to_prefix_len;
/// assert_eq!(wildcard_to_prefix_len("0.0.0.255").unwrap(), 24);
/// assert_eq!(wildcard_to_prefix_len("0").unwrap(), 32);
/// ```
pub fn wildcard_to_prefix_len(wildcard: &str) -> Result<u8, Box<dyn Error>> {
    let octets = parse_wildcard(wildcard)?;
    let prefix_len: u32 = octets.iter().map(|o| (u8::MAX - o).count_ones()).sum();
    Ok(prefix_len as u8)
}

/// Split a wildcard into exactly four octets.
fn parse_wildcard(wildcard: &str) -> Result<[u8; OCTETS], Box<dyn Error>> {
    let wildcard = wildcard.trim();
    let mut octets = [0u8; OCTETS];
    if wildcard == "0" {
        return Ok(octets);
    }
    for (i, part) in wildcard.split('.').take(OCTETS).enumerate() {
        octets[i] = part
            .parse::<u8>()
            .map_err(|e| format!("Invalid wildcard octet '{part}' in '{wildcard}': {e}"))?;
    }
    Ok(octets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_to_prefix_len() {
        assert_eq!(wildcard_to_prefix_len("0.0.0.0").unwrap(), 32);
        assert_eq!(wildcard_to_prefix_len("0").unwrap(), 32);
        assert_eq!(wildcard_to_prefix_len("0.0.0.255").unwrap(), 24);
        assert_eq!(wildcard_to_prefix_len("0.0.0.7").unwrap(), 29);
        assert_eq!(wildcard_to_prefix_len("0.0.3.255").unwrap(), 22);
        assert_eq!(wildcard_to_prefix_len("0.255.255.255").unwrap(), 8);
        assert_eq!(wildcard_to_prefix_len("255.255.255.255").unwrap(), 0);
    }

    #[test]
    fn test_wildcard_non_contiguous_counts_bits() {
        // 255 - 170 = 85 = 0b0101_0101 -> 4 bits
        assert_eq!(wildcard_to_prefix_len("0.0.0.170").unwrap(), 28);
    }

    #[test]
    fn test_wildcard_short_and_long_forms() {
        assert_eq!(wildcard_to_prefix_len("0.0").unwrap(), 32);
        assert_eq!(wildcard_to_prefix_len("0.0.255").unwrap(), 24);
        assert_eq!(wildcard_to_prefix_len(" 0.0.0.15 ").unwrap(), 28);
        assert_eq!(wildcard_to_prefix_len("0.0.0.3.255").unwrap(), 30);
    }

    #[test]
    fn test_wildcard_always_in_range() {
        for last in 0..=u8::MAX {
            let len = wildcard_to_prefix_len(&format!("{last}.{last}.{last}.{last}")).unwrap();
            assert!(len <= 32, "prefix length {len} out of range for octet {last}");
        }
    }

    #[test]
    fn test_wildcard_invalid_octets() {
        assert!(wildcard_to_prefix_len("0.0.0.256").is_err());
        assert!(wildcard_to_prefix_len("0.0.0.x").is_err());
        assert!(wildcard_to_prefix_len("0..0.7").is_err());
        assert!(wildcard_to_prefix_len("").is_err());
    }
}
