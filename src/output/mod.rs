//! Output formatting for audit results.
//!
//! This module handles formatting and writing reconciliation results:
//! - [`report`] - The fixed-layout text report file
//! - [`terminal`] - Terminal summary with colors

mod report;
mod terminal;

pub use report::{
    render_report, write_report, MISMATCHED_BANNER, SECTION_DIVIDER, UNKNOWN_CARRIER_BANNER,
};
pub use terminal::{format_field, print_summary, summary_lines};
