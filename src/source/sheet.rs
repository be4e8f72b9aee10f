//! Register spreadsheet reading.
//!
//! Supplies [`RegisterRow`]s from an `.xls` / `.xlsx` workbook (calamine) or a
//! sheet exported as `.csv`. Only the carrier and GN net columns are kept.

use crate::models::{Register, RegisterRow};
use crate::processing::load_register;
use calamine::{open_workbook_auto, Data, Reader};
use std::error::Error;
use std::path::Path;

/// Header of the carrier short-code column.
pub const CARRIER_HEADER: &str = "运营商简拼";
/// Header of the GN net block column.
pub const NET_HEADER: &str = "GN网段";
/// Carrier column (C) when the headers are not found.
pub const CARRIER_COLUMN: usize = 2;
/// Net column (H) when the headers are not found.
pub const NET_COLUMN: usize = 7;

/// Register file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFormat {
    Xls,
    Xlsx,
    Csv,
}

impl RegisterFormat {
    /// Pick the format from the (case-insensitive) extension of `path`.
    pub fn from_path(path: &Path) -> Result<RegisterFormat, Box<dyn Error>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "xls" => Ok(RegisterFormat::Xls),
            "xlsx" => Ok(RegisterFormat::Xlsx),
            "csv" => Ok(RegisterFormat::Csv),
            _ => Err(format!("Unsupported register format: .{ext}").into()),
        }
    }
}

/// Read and build the register from a file.
pub fn load_register_file(path: &Path, sheet_name: &str) -> Result<Register, Box<dyn Error>> {
    let rows = read_register_rows(path, sheet_name)?;
    let register = load_register(rows);
    log::info!(
        "Register {} loaded: {} carriers, {} nets",
        path.display(),
        register.len(),
        register.net_count()
    );
    Ok(register)
}

/// Read carrier / net rows from a register file. The first row is the header.
///
/// # Arguments
/// * `path` - `.xls`, `.xlsx` or `.csv` file
/// * `sheet_name` - Worksheet to read (ignored for `.csv`)
pub fn read_register_rows(
    path: &Path,
    sheet_name: &str,
) -> Result<Vec<RegisterRow>, Box<dyn Error>> {
    let format = RegisterFormat::from_path(path)?;
    if !path.exists() {
        return Err(format!("Register file does not exist: {}", path.display()).into());
    }
    log::debug!("read_register_rows({}, {sheet_name}) as {format:?}", path.display());

    let table = match format {
        RegisterFormat::Xls | RegisterFormat::Xlsx => read_workbook_table(path, sheet_name)?,
        RegisterFormat::Csv => read_csv_table(path)?,
    };
    Ok(table_to_rows(table))
}

/// Cells of a sheet as text, indexed from column A. Empty cells are `None`.
fn read_workbook_table(
    path: &Path,
    sheet_name: &str,
) -> Result<Vec<Vec<Option<String>>>, Box<dyn Error>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| format!("Error opening register {}: {e}", path.display()))?;
    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| format!("Error reading sheet '{sheet_name}' of {}: {e}", path.display()))?;

    // Range starts at the first used cell; pad so indices are absolute columns.
    let start_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let table: Vec<Vec<Option<String>>> = range
        .rows()
        .map(|row| {
            std::iter::repeat(None)
                .take(start_col)
                .chain(row.iter().map(cell_text))
                .collect::<Vec<_>>()
        })
        .collect();
    Ok(table)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        other => non_empty(other.to_string()),
    }
}

fn read_csv_table(path: &Path) -> Result<Vec<Vec<Option<String>>>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("Error opening register {}: {e}", path.display()))?;
    let mut table = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| format!("Error reading {}: {e}", path.display()))?;
        table.push(record.iter().map(|f| non_empty(f.to_string())).collect());
    }
    Ok(table)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Locate the carrier and net columns from the header row.
pub fn select_columns(header: &[Option<String>]) -> (usize, usize) {
    let position = |name: &str| {
        header
            .iter()
            .position(|h| h.as_deref().map(str::trim) == Some(name))
    };
    match (position(CARRIER_HEADER), position(NET_HEADER)) {
        (Some(carrier), Some(net)) => (carrier, net),
        _ => {
            log::debug!("Register headers not found, using columns C and H");
            (CARRIER_COLUMN, NET_COLUMN)
        }
    }
}

/// Split off the header row and project the remaining rows onto the two columns.
pub fn table_to_rows(table: Vec<Vec<Option<String>>>) -> Vec<RegisterRow> {
    let mut rows = table.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let (carrier_col, net_col) = select_columns(&header);

    rows.map(|mut row| {
        let mut take = |col: usize| row.get_mut(col).and_then(Option::take);
        RegisterRow {
            carrier: take(carrier_col),
            net: take(net_col),
        }
    })
    .collect()
}
