//! Core audit processing.
//!
//! Pure functions over lines and rows, chained as
//! scanner -> rewrite -> inventory -> reconcile, with the register built
//! separately from spreadsheet rows:
//! - [`mask`] - Wildcard mask to prefix length
//! - [`scanner`] - Address-set stanza extraction
//! - [`rewrite`] - `wildcard` lines to CIDR lines
//! - [`register`] - Register rows to carrier sets
//! - [`inventory`] - Config lines to carrier sets
//! - [`reconcile`] - Diff inventory against register

mod inventory;
mod mask;
mod reconcile;
mod register;
mod rewrite;
mod scanner;

// Re-export public functions
pub use inventory::load_inventory;
pub use mask::wildcard_to_prefix_len;
pub use reconcile::reconcile;
pub use register::load_register;
pub use rewrite::{rewrite_line, rewrite_text};
pub use scanner::extract_stanzas;
