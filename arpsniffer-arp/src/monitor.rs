//! Passive ARP traffic monitor
//!
//! Composes the wire views, the classifier, and an injected vendor
//! resolver into a stateful observer: raw captured frames go in,
//! annotated records come out, and per-category counters accumulate
//! along the way. The monitor never captures traffic itself.

use parking_lot::RwLock;
use tracing::debug;

use arpsniffer_core::{CapturedFrame, MacAddr, Result};
use arpsniffer_packet::EthernetFrame;

use crate::classify::{classify, ArpTag};
use crate::packet::ArpPacket;
use crate::record::ArpRecord;

/// Counters kept by the monitor
#[derive(Debug, Clone, Default)]
pub struct ArpMonitorStats {
    /// Frames handed to the monitor, ARP or not
    pub frames_seen: u64,
    /// Frames that decoded into an ARP message
    pub frames_parsed: u64,
    /// Frames that failed to decode (truncated header or bad ARP payload)
    pub parse_errors: u64,
    /// Request messages seen
    pub requests: u64,
    /// Reply messages seen
    pub replies: u64,
    /// Messages tagged Announcement
    pub announcements: u64,
    /// Messages tagged Gratuitous
    pub gratuitous: u64,
    /// Messages tagged Probe
    pub probes: u64,
}

/// Stateful observer annotating a stream of captured frames
///
/// Counters live behind an `RwLock` so a shared monitor can be observed
/// from other threads while the capture collaborator feeds it; nothing
/// here blocks on I/O.
pub struct ArpMonitor {
    stats: RwLock<ArpMonitorStats>,
}

impl ArpMonitor {
    pub fn new() -> Self {
        Self {
            stats: RwLock::new(ArpMonitorStats::default()),
        }
    }

    /// Inspect one captured frame
    ///
    /// Non-ARP traffic counts as seen and yields `Ok(None)`. An ARP frame
    /// whose payload fails to parse counts as a parse error and the error
    /// is returned; malformed traffic is reported, never misclassified.
    /// A decoded message updates the counters and yields an annotated
    /// record carrying its tags and resolved vendor names.
    pub fn observe<F, S>(&self, frame: &CapturedFrame, vendor_of: F) -> Result<Option<ArpRecord>>
    where
        F: Fn(MacAddr) -> S,
        S: AsRef<str>,
    {
        self.stats.write().frames_seen += 1;

        let eth = match EthernetFrame::from_bytes(frame.data()) {
            Ok(eth) => eth,
            Err(err) => {
                self.stats.write().parse_errors += 1;
                debug!(interface = %frame.interface, %err, "Skipping malformed frame");
                return Err(err);
            }
        };

        let arp = match ArpPacket::from_ethernet(&eth) {
            Ok(Some(arp)) => arp,
            Ok(None) => return Ok(None),
            Err(err) => {
                self.stats.write().parse_errors += 1;
                debug!(interface = %frame.interface, %err, "Skipping malformed ARP payload");
                return Err(err);
            }
        };

        let tags = classify(&arp, eth.destination, |mac| {
            vendor_of(mac).as_ref().to_string()
        });

        {
            let mut stats = self.stats.write();
            stats.frames_parsed += 1;
            if arp.is_request() {
                stats.requests += 1;
            } else if arp.is_reply() {
                stats.replies += 1;
            }
            for tag in &tags {
                match tag {
                    ArpTag::Announcement => stats.announcements += 1,
                    ArpTag::Gratuitous => stats.gratuitous += 1,
                    ArpTag::Probe => stats.probes += 1,
                }
            }
        }

        Ok(Some(ArpRecord {
            timestamp: frame.timestamp,
            operation: arp.operation,
            sender_hw_addr: arp.sender_hw_addr,
            target_hw_addr: arp.target_hw_addr,
            tags,
            sender_vendor: vendor_of(arp.sender_hw_addr).as_ref().to_string(),
            target_vendor: vendor_of(arp.target_hw_addr).as_ref().to_string(),
        }))
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> ArpMonitorStats {
        self.stats.read().clone()
    }

    /// Zero the counters
    pub fn reset_stats(&self) {
        *self.stats.write() = ArpMonitorStats::default();
    }
}

impl Default for ArpMonitor {
    fn default() -> Self {
        Self::new()
    }
}
