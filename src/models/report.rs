//! Reconciliation result model.

use std::collections::BTreeMap;

/// Per-carrier differences between a router inventory and the register.
///
/// Both maps are keyed by carrier and hold networks in their original
/// (config) form, sorted. A carrier appears in at most one of the two maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    /// Carriers known to the register with at least one network it does not list.
    pub mismatched: BTreeMap<String, Vec<String>>,
    /// Carriers the register does not know at all; every network is listed.
    pub unknown_carrier: BTreeMap<String, Vec<String>>,
}

impl DiffReport {
    /// True when the inventory fully agrees with the register.
    pub fn is_clean(&self) -> bool {
        self.mismatched.is_empty() && self.unknown_carrier.is_empty()
    }

    /// Number of networks listed across both sections.
    pub fn offending_net_count(&self) -> usize {
        self.mismatched
            .values()
            .chain(self.unknown_carrier.values())
            .map(Vec::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = DiffReport::default();
        assert!(report.is_clean());
        report
            .mismatched
            .insert("CT".to_string(), vec!["5.6.7.0/28".to_string()]);
        report.unknown_carrier.insert(
            "CU".to_string(),
            vec!["9.9.9.0/30".to_string(), "9.9.9.4/30".to_string()],
        );
        assert!(!report.is_clean());
        assert_eq!(report.offending_net_count(), 3);
    }
}
