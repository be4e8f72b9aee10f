//! Terminal output utilities.
//!
//! Coloured per-file summaries printed while the batch runs.

use crate::models::DiffReport;
use colored::Colorize;

/// Format a value as a right-aligned field of at least `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let len = value_str.chars().count();

    if len >= width {
        value_str
    } else {
        format!("{}{value_str}", " ".repeat(width - len))
    }
}

/// One summary line per carrier: `<carrier> <n> net(s) <label>`.
pub fn summary_lines(report: &DiffReport) -> Vec<String> {
    let mut lines = Vec::new();
    for (carrier, nets) in &report.mismatched {
        lines.push(format!(
            "{} {} net(s) not in register",
            format_field(carrier, 10),
            format_field(nets.len(), 4)
        ));
    }
    for (carrier, nets) in &report.unknown_carrier {
        lines.push(format!(
            "{} {} net(s) carrier unknown to register",
            format_field(carrier, 10),
            format_field(nets.len(), 4)
        ));
    }
    lines
}

/// Print a coloured summary of one file's reconciliation to stdout.
pub fn print_summary(file_name: &str, report: &DiffReport) {
    if report.is_clean() {
        println!("{} {file_name}", "OK".on_green());
        return;
    }
    println!(
        "{} {file_name}: {mis} mismatched carrier(s), {unk} unknown carrier(s), {nets} net(s)",
        "DIFF".on_red(),
        mis = report.mismatched.len().to_string().yellow(),
        unk = report.unknown_carrier.len().to_string().red(),
        nets = report.offending_net_count(),
    );
    for line in summary_lines(report) {
        println!("    {line}");
    }
}
