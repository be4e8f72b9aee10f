//! Carrier -> network collections built from the register and from router configs.

use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Strip every whitespace character so `"1.2.3.0 /24"` and `"1.2.3.0/24"` compare equal.
///
/// # Examples
/// ```
/// use gn_address_audit::models::normalize_net;
/// assert_eq!(normalize_net("94. 201.225.0 /24"), "94.201.225.0/24");
/// ```
pub fn normalize_net(net: &str) -> String {
    net.chars().filter(|c| !c.is_whitespace()).collect()
}

/// One register spreadsheet row, reduced to the two columns the audit reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterRow {
    /// Carrier short code; `None` for an empty (merged) cell.
    pub carrier: Option<String>,
    /// Net block cell, possibly several newline separated networks.
    pub net: Option<String>,
}

impl RegisterRow {
    pub fn new(carrier: Option<&str>, net: Option<&str>) -> RegisterRow {
        RegisterRow {
            carrier: carrier.map(str::to_string),
            net: net.map(str::to_string),
        }
    }
}

/// Authoritative carrier -> normalized network set, loaded from the register.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Register {
    pub carriers: HashMap<String, HashSet<String>>,
}

impl Register {
    pub fn new() -> Register {
        Register::default()
    }

    /// Add a network, normalizing it first. Empty results are ignored.
    pub fn insert(&mut self, carrier: &str, net: &str) {
        let norm = normalize_net(net);
        if norm.is_empty() {
            return;
        }
        self.carriers
            .entry(carrier.to_string())
            .or_default()
            .insert(norm);
    }

    pub fn nets(&self, carrier: &str) -> Option<&HashSet<String>> {
        self.carriers.get(carrier)
    }

    /// Carrier codes in sorted order.
    pub fn carriers(&self) -> Vec<&str> {
        self.carriers.keys().map(String::as_str).sorted().collect()
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }

    /// Total number of networks across all carriers.
    pub fn net_count(&self) -> usize {
        self.carriers.values().map(HashSet::len).sum()
    }
}

/// Carrier -> network set found in rewritten router configs.
///
/// Networks keep the exact text from the config so reports show what the
/// operator wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub carriers: HashMap<String, HashSet<String>>,
}

impl Inventory {
    pub fn new() -> Inventory {
        Inventory::default()
    }

    pub fn insert(&mut self, carrier: &str, net: &str) {
        self.carriers
            .entry(carrier.to_string())
            .or_default()
            .insert(net.to_string());
    }

    pub fn nets(&self, carrier: &str) -> Option<&HashSet<String>> {
        self.carriers.get(carrier)
    }

    /// Carrier codes in sorted order.
    pub fn carriers(&self) -> Vec<&str> {
        self.carriers.keys().map(String::as_str).sorted().collect()
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }

    pub fn net_count(&self) -> usize {
        self.carriers.values().map(HashSet::len).sum()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Register ({} carriers, {} nets):",
            self.len(),
            self.net_count()
        )?;
        for carrier in self.carriers() {
            writeln!(f, "  - {carrier}: {}", self.carriers[carrier].len())?;
        }
        Ok(())
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Inventory ({} carriers, {} nets):",
            self.len(),
            self.net_count()
        )?;
        for carrier in self.carriers() {
            writeln!(f, "  - {carrier}: {}", self.carriers[carrier].len())?;
        }
        Ok(())
    }
}
