//! Plain text reconciliation report.

use crate::models::DiffReport;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Banner of the section listing known carriers with mismatching networks.
pub const MISMATCHED_BANNER: &str = "【Excel存在的运营商】";
/// Banner of the section listing carriers missing from the register.
pub const UNKNOWN_CARRIER_BANNER: &str = "【Excel中不存在的运营商】";
/// Divider between the two sections, written twice.
pub const SECTION_DIVIDER: &str = "=========================================================";

/// Render the report text: mismatched carriers first, then unknown carriers.
pub fn render_report(report: &DiffReport) -> String {
    let mut out = String::new();
    out.push_str(MISMATCHED_BANNER);
    out.push('\n');
    push_section(&mut out, &report.mismatched);

    out.push_str(SECTION_DIVIDER);
    out.push('\n');
    out.push_str(SECTION_DIVIDER);
    out.push_str("\n\n");

    out.push_str(UNKNOWN_CARRIER_BANNER);
    out.push('\n');
    push_section(&mut out, &report.unknown_carrier);
    out
}

fn push_section(out: &mut String, section: &BTreeMap<String, Vec<String>>) {
    for (carrier, nets) in section {
        out.push_str(carrier);
        out.push('\n');
        for net in nets {
            out.push_str(net);
            out.push('\n');
        }
        out.push('\n');
    }
}

/// Write the rendered report to `path`.
pub fn write_report(path: &Path, report: &DiffReport) -> Result<(), Box<dyn Error>> {
    std::fs::write(path, render_report(report))
        .map_err(|e| format!("Error writing report {}: {e}", path.display()))?;
    log::info!("Report written: {}", path.display());
    Ok(())
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_report(self))
    }
}
