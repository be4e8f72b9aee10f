//! Batch driver: scan the data directory and run the audit per router dump.
//!
//! For every `<stem>.txt` input this writes, next to the input:
//! - `<stem>_Extract.txt` - extracted stanzas (only with `keepExtract`)
//! - `<stem>_Extract_CIDR.txt` - stanzas with wildcard masks rewritten to CIDR
//! - `<stem>_Extract_CIDR_比较结果.txt` - reconciliation report (with a register)

use super::sheet::load_register_file;
use super::text::read_text_lossy;
use crate::config::Config;
use crate::models::{DiffReport, Register};
use crate::output::{print_summary, write_report};
use crate::processing::{load_inventory, reconcile};
use crate::process_text;
use std::error::Error;
use std::path::{Path, PathBuf};

pub const EXTRACT_SUFFIX: &str = "_Extract";
pub const CIDR_SUFFIX: &str = "_Extract_CIDR";
pub const REPORT_SUFFIX: &str = "_比较结果";
pub const INPUT_EXTENSION: &str = "txt";

/// What happened to one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// No stanza found, nothing written.
    Skipped { input: PathBuf },
    Processed {
        input: PathBuf,
        stanza_count: usize,
        cidr_path: PathBuf,
        report_path: Option<PathBuf>,
        report: Option<DiffReport>,
    },
}

/// Result of a whole batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn processed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Processed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.processed_count()
    }

    /// Number of reports listing at least one offending network.
    pub fn reports_with_diff(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(o, FileOutcome::Processed { report: Some(r), .. } if !r.is_clean())
            })
            .count()
    }
}

/// Run extraction, rewriting and (with a register) reconciliation for every dump.
///
/// The register is loaded once up front, so a bad register path or format
/// fails before any output is written.
pub fn run_batch(config: &Config) -> Result<BatchSummary, Box<dyn Error>> {
    let started = chrono::Local::now();
    log::info!(
        "#Start run_batch() dir={} register={:?}",
        config.data_directory.display(),
        config.register_path
    );

    let register = match &config.register_path {
        Some(path) => Some(load_register_file(path, &config.register_sheet_name)?),
        None => {
            log::warn!("No register configured, extraction and CIDR rewrite only");
            None
        }
    };

    let inputs = list_input_files(&config.data_directory)?;
    log::info!("Found {} input file(s)", inputs.len());

    let mut summary = BatchSummary::default();
    for input in inputs {
        let outcome = process_file(&input, config, register.as_ref())?;
        summary.outcomes.push(outcome);
    }

    let elapsed = chrono::Local::now() - started;
    log::info!(
        "#End run_batch() processed={} skipped={} with_diff={} in {}ms",
        summary.processed_count(),
        summary.skipped_count(),
        summary.reports_with_diff(),
        elapsed.num_milliseconds()
    );
    Ok(summary)
}

/// Process one router dump.
pub fn process_file(
    input: &Path,
    config: &Config,
    register: Option<&Register>,
) -> Result<FileOutcome, Box<dyn Error>> {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let text = read_text_lossy(input)?;

    let Some(processed) = process_text(&text, &config.stanza_open_token) else {
        log::warn!("{file_name}: no '{}' stanza found, skipped", config.stanza_open_token);
        return Ok(FileOutcome::Skipped {
            input: input.to_path_buf(),
        });
    };

    if config.keep_extract {
        let extract_path = output_path(input, EXTRACT_SUFFIX);
        write_file(&extract_path, &processed.extract_text)?;
    }
    let cidr_path = output_path(input, CIDR_SUFFIX);
    write_file(&cidr_path, &processed.cidr_text)?;
    log::info!(
        "{file_name}: {} stanza(s) -> {}",
        processed.stanzas.len(),
        cidr_path.display()
    );

    let (report_path, report) = match register {
        Some(register) => {
            let inventory = load_inventory(processed.cidr_text.lines());
            let report = reconcile(register, &inventory);
            let report_path = output_path(&cidr_path, REPORT_SUFFIX);
            write_report(&report_path, &report)?;
            print_summary(&file_name, &report);
            (Some(report_path), Some(report))
        }
        None => (None, None),
    };

    Ok(FileOutcome::Processed {
        input: input.to_path_buf(),
        stanza_count: processed.stanzas.len(),
        cidr_path,
        report_path,
        report,
    })
}

/// `.txt` files in `dir`, sorted by name, excluding files this tool wrote.
pub fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Error reading data directory {}: {e}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || !has_input_extension(&path) {
            continue;
        }
        if is_generated(&path) {
            log::debug!("Ignoring generated file {}", path.display());
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(INPUT_EXTENSION))
}

fn is_generated(path: &Path) -> bool {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    [EXTRACT_SUFFIX, CIDR_SUFFIX, REPORT_SUFFIX]
        .iter()
        .any(|suffix| stem.ends_with(suffix))
}

/// `<dir>/<stem><suffix>.txt` next to `path`.
pub fn output_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}{suffix}.{INPUT_EXTENSION}"))
}

fn write_file(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    std::fs::write(path, contents)
        .map_err(|e| format!("Error writing {}: {e}", path.display()))?;
    Ok(())
}
