//! Build the carrier inventory from rewritten (CIDR form) config text.

use crate::models::Inventory;
use regex::Regex;
use std::sync::OnceLock;

/// `<a.b.c.d/len> ... description <carrier>`, keyword matched case-insensitively.
static NET_DESCRIPTION_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_net_description_regex() -> &'static Regex {
    NET_DESCRIPTION_REGEX.get_or_init(|| {
        Regex::new(r"\b(\d{1,3}(?:\.\d{1,3}){3}/\d{1,2})\b.*?\b(?i:description)\s+(\S+)")
            .expect("Invalid Regex")
    })
}

/// Collect `carrier -> {net}` from config lines.
///
/// Each line is searched (not anchored) for a CIDR token followed later by
/// `description <carrier>`. Lines lacking either part are ignored. Networks
/// are stored exactly as written.
pub fn load_inventory<I, S>(lines: I) -> Inventory
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let re = get_net_description_regex();
    let mut inventory = Inventory::new();

    for line in lines {
        let Some(caps) = re.captures(line.as_ref()) else {
            continue;
        };
        let net = caps[1].trim();
        let carrier = caps[2].trim();
        if !net.is_empty() && !carrier.is_empty() {
            inventory.insert(carrier, net);
        }
    }

    log::debug!(
        "load_inventory() {} carriers, {} nets",
        inventory.len(),
        inventory.net_count()
    );
    inventory
}
