//! Link-layer framing for arpsniffer
//!
//! Ethernet II parsing and construction. ARP semantics live in
//! `arpsniffer-arp`; this crate only deals with the enclosing frame.

pub mod ethernet;

pub use ethernet::{EtherType, EthernetFrame};
