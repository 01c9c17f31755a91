//! Frame capture library for snifferx
//!
//! This crate wraps pcap into the frame source feeding the dissector.
//!
//! ## Features
//!
//! - **Interface management**: list and query network interfaces
//! - **Read loop**: background thread delivering raw frames to a callback
//! - **Statistics**: frame/byte counters shared with the consumer
//!
//! ## Example
//!
//! ```no_run
//! use snifferx_capture::FrameCapture;
//!
//! # fn main() -> snifferx_core::Result<()> {
//! let mut capture = FrameCapture::new("eth0")?;
//!
//! capture.start(|frame| {
//!     println!("Got frame: {} bytes", frame.len());
//! })?;
//!
//! // Later, stop the capture
//! capture.stop()?;
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod interface;
pub mod stats;

// Re-export main types
pub use capture::{CaptureConfig, CaptureState, FrameCapture};
pub use interface::{default_interface, get_interface, list_interfaces, InterfaceInfo};
pub use stats::{CaptureStats, StatsAccumulator};
