//! File and spreadsheet boundary around the core processing.
//!
//! - [`text`] - Lossy router dump reading
//! - [`sheet`] - Register rows from `.xls` / `.xlsx` / `.csv`
//! - [`batch`] - Directory scan and per-file pipeline

mod batch;
mod sheet;
mod text;

// Re-export public types and functions
pub use batch::{
    list_input_files, output_path, process_file, run_batch, BatchSummary, FileOutcome,
    CIDR_SUFFIX, EXTRACT_SUFFIX, REPORT_SUFFIX,
};
pub use sheet::{load_register_file, read_register_rows, select_columns, RegisterFormat};
pub use text::{decode_lossy, read_text_lossy};
