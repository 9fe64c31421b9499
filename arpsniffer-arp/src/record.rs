//! Annotated ARP records
//!
//! Bundles one classified message with its resolved vendor names for
//! display or logging. This is a formatting value, not a terminal UI; the
//! caller decides where the rendered text goes.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use arpsniffer_core::MacAddr;

use crate::classify::ArpTag;
use crate::packet::ArpOpcode;

/// Width the sender vendor column is right-aligned to
const VENDOR_COLUMN: usize = 49;

/// One classified ARP message, ready for display or logging
#[derive(Debug, Clone)]
pub struct ArpRecord {
    /// When the enclosing frame was captured
    pub timestamp: SystemTime,
    /// Request or Reply
    pub operation: ArpOpcode,
    /// Sender hardware address from the ARP payload
    pub sender_hw_addr: MacAddr,
    /// Target hardware address from the ARP payload
    pub target_hw_addr: MacAddr,
    /// Semantic tags, in classification order
    pub tags: Vec<ArpTag>,
    /// Resolved vendor for the sender hardware address
    pub sender_vendor: String,
    /// Resolved vendor for the target hardware address
    pub target_vendor: String,
}

impl ArpRecord {
    /// Tags rendered as concatenated brackets, e.g.
    /// `[Announcement][Gratuitous]`; empty when no tag applies
    pub fn tag_column(&self) -> String {
        self.tags.iter().map(|tag| format!("[{}]", tag)).collect()
    }

    /// Capture time as `HH:MM:SS,fffff` (UTC, five fractional digits)
    pub fn format_timestamp(&self) -> String {
        let utc: DateTime<Utc> = self.timestamp.into();
        format!(
            "{},{:05}",
            utc.format("%H:%M:%S"),
            utc.timestamp_subsec_micros() / 10
        )
    }
}

/// Two lines per record: time, operation, and the hardware addresses with
/// their tags; then the resolved vendors, sender right-aligned so the
/// arrow lines up under the addresses.
impl fmt::Display for ArpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} [{}]\t{} -> {} {}",
            self.format_timestamp(),
            self.operation,
            self.sender_hw_addr,
            self.target_hw_addr,
            self.tag_column()
        )?;
        write!(
            f,
            "{:>width$} -> {}",
            self.sender_vendor,
            self.target_vendor,
            width = VENDOR_COLUMN
        )
    }
}
