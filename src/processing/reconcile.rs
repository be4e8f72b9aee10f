//! Inventory vs register reconciliation.

use crate::models::{normalize_net, DiffReport, Inventory, Register};
use itertools::Itertools;
use std::collections::HashSet;

/// Diff every carrier found in `inventory` against `register`.
///
/// - Carrier unknown to the register: all its networks go to `unknown_carrier`.
/// - Carrier known: networks whose whitespace-free form is not in the
///   register set go to `mismatched`; fully matching carriers are omitted.
///
/// Carriers only present in the register are not reported.
pub fn reconcile(register: &Register, inventory: &Inventory) -> DiffReport {
    let mut report = DiffReport::default();

    for (carrier, nets) in &inventory.carriers {
        let Some(register_nets) = register.nets(carrier) else {
            report
                .unknown_carrier
                .insert(carrier.clone(), nets.iter().cloned().sorted().collect());
            continue;
        };

        let known: HashSet<String> = register_nets.iter().map(|n| normalize_net(n)).collect();
        let diff: Vec<String> = nets
            .iter()
            .filter(|net| !known.contains(&normalize_net(net)))
            .cloned()
            .sorted()
            .collect();

        if !diff.is_empty() {
            report.mismatched.insert(carrier.clone(), diff);
        }
    }

    let register_only = register
        .carriers
        .keys()
        .filter(|c| !inventory.carriers.contains_key(*c))
        .count();
    log::debug!(
        "reconcile() mismatched={} unknown={} register_only(not reported)={}",
        report.mismatched.len(),
        report.unknown_carrier.len(),
        register_only
    );

    report
}
