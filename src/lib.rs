//! Audit router address-set configs against the carrier GN register.
//!
//! The pipeline per router dump is
//! [`extract_stanzas`](processing::extract_stanzas) ->
//! [`rewrite_line`](processing::rewrite_line) ->
//! [`load_inventory`](processing::load_inventory) ->
//! [`reconcile`](processing::reconcile), with the register built by
//! [`load_register`](processing::load_register) from spreadsheet rows.

pub mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod source;

use itertools::Itertools;
use models::ConfigStanza;

pub use config::Config;
pub use source::run_batch;

/// Stanzas cut from one dump plus the two derived texts.
#[derive(Debug, Clone)]
pub struct ExtractedConfig {
    pub stanzas: Vec<ConfigStanza>,
    /// Stanza texts joined with a blank separator line.
    pub extract_text: String,
    /// `extract_text` with wildcard lines rewritten to CIDR form.
    pub cidr_text: String,
}

/// Extract and rewrite the stanzas of one dump. `None` when no stanza is found.
pub fn process_text(text: &str, open_token: &str) -> Option<ExtractedConfig> {
    let stanzas = processing::extract_stanzas(text.split_inclusive('\n'), open_token);
    if stanzas.is_empty() {
        return None;
    }
    let extract_text = stanzas.iter().map(ConfigStanza::text).join("\n");
    let cidr_text = processing::rewrite_text(&extract_text);
    Some(ExtractedConfig {
        stanzas,
        extract_text,
        cidr_text,
    })
}
