//! arpsniffer core library
//!
//! This crate provides the fundamental types and error handling shared by
//! the arpsniffer crates: the 6-byte hardware address with its reserved
//! values, the vendor display-string contract, and the captured-frame
//! carrier the capture collaborator hands over.

pub mod error;
pub mod packet;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use packet::CapturedFrame;
pub use types::{vendor_tags, MacAddr};
