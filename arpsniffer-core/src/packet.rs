//! Captured frame carrier

use std::time::SystemTime;

/// A raw link-layer frame handed over by the capture collaborator
///
/// The core never captures traffic itself; whatever does (pcap, a replay
/// file, a test fixture) wraps each frame in this carrier before feeding
/// it to the monitor.
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    /// When the frame was captured
    pub timestamp: SystemTime,
    /// Interface the frame was received on
    pub interface: String,
    /// Frame data (including the Ethernet header)
    pub data: Vec<u8>,
    /// Actual length (may differ from data.len() if truncated)
    pub len: usize,
}

impl CapturedFrame {
    /// Create a new frame stamped with the current time
    pub fn new(interface: String, data: Vec<u8>) -> Self {
        let len = data.len();
        Self {
            timestamp: SystemTime::now(),
            interface,
            data,
            len,
        }
    }

    /// Get frame data as slice
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get frame length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the frame is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
