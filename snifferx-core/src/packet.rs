//! Captured frame type

use std::time::SystemTime;

/// One raw link-layer frame as delivered by the capture source.
///
/// The bytes are immutable once captured; the dissector only ever borrows
/// them for the duration of a single call.
#[derive(Debug, Clone)]
pub struct Packet {
    /// When the frame was captured
    pub timestamp: SystemTime,
    /// Interface the frame was received on
    pub interface: String,
    /// Frame data (all headers plus payload)
    pub data: Vec<u8>,
    /// Actual captured length (may be shorter than the on-wire frame
    /// when the snapshot length cut it off)
    pub len: usize,
}

impl Packet {
    /// Create a new packet from captured bytes
    pub fn new(interface: String, data: Vec<u8>) -> Self {
        let len = data.len();
        Self {
            timestamp: SystemTime::now(),
            interface,
            data,
            len,
        }
    }

    /// Get the frame bytes as a slice
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the captured length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the frame is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
