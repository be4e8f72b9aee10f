//! Build the carrier register from spreadsheet rows.

use crate::models::{Register, RegisterRow};

/// Group register rows into carrier -> normalized network sets.
///
/// The carrier column is forward-filled: a row with an empty carrier cell
/// belongs to the nearest carrier above it (merged cells in the sheet).
/// A net cell may hold several networks, one per line. A lone `\r` counts as a
/// line break too. Rows without a net cell, or whose carrier is blank after
/// trimming, add nothing.
pub fn load_register<I>(rows: I) -> Register
where
    I: IntoIterator<Item = RegisterRow>,
{
    let mut register = Register::new();
    let mut last_carrier: Option<String> = None;
    let mut skipped_rows = 0usize;

    for row in rows {
        if let Some(carrier) = row.carrier.filter(|c| !c.is_empty()) {
            last_carrier = Some(carrier);
        }

        let Some(net_cell) = row.net.filter(|n| !n.is_empty()) else {
            skipped_rows += 1;
            continue;
        };

        let carrier = last_carrier.as_deref().unwrap_or("").trim();
        if carrier.is_empty() {
            log::trace!("register row without carrier skipped: {net_cell:?}");
            skipped_rows += 1;
            continue;
        }

        for net in net_cell
            .split(is_line_break)
            .map(str::trim)
            .filter(|n| !n.is_empty())
        {
            register.insert(carrier, net);
        }
    }

    log::debug!(
        "load_register() {} carriers, {} nets, {} rows skipped",
        register.len(),
        register.net_count(),
        skipped_rows
    );
    register
}

/// Line boundaries a spreadsheet cell may use between networks.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'..='\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
