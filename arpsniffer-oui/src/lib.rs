//! OUI vendor resolution for arpsniffer
//!
//! Builds an immutable index from IEEE OUI registry text and resolves
//! hardware addresses to vendor display strings. Independent of the ARP
//! classifier; the two meet only through the display-string contract in
//! `arpsniffer-core`.

pub mod registry;

pub use arpsniffer_core::vendor_tags;
pub use registry::OuiRegistry;
