//! Domain models for the GN address audit.
//!
//! This module contains the core data structures used throughout the application:
//! - [`ConfigStanza`] - An address-set block cut out of a router config dump
//! - [`AddressLine`] - A single `address ... wildcard ...` entry
//! - [`Register`] and [`Inventory`] - Carrier to network collections
//! - [`DiffReport`] - Result of reconciling the two

mod address_line;
mod carrier;
mod report;
mod stanza;

// Re-export public types
pub use address_line::AddressLine;
pub use carrier::{normalize_net, Inventory, Register, RegisterRow};
pub use report::DiffReport;
pub use stanza::{ConfigStanza, STANZA_END_MARKER, STANZA_OPEN_TOKEN};
