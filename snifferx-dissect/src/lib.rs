//! Protocol header decoding library for snifferx
//!
//! This crate provides the layered binary decoder at the heart of the
//! sniffer: a chain of fixed-format header parsers that consume a byte
//! buffer, interpret bit-packed fields, and hand the remaining payload to
//! the next layer. It covers:
//!
//! - **Ethernet II frames** with MAC addresses and EtherType dispatch
//! - **IPv4** headers, including variable header length (options skipped)
//! - **ICMP** type/code/checksum headers
//! - **TCP** headers with per-bit flag decoding and data-offset handling
//! - **UDP** headers with their declared (unenforced) length field
//!
//! # Architecture
//!
//! - [`field`] - big-endian field readers and bit-field helpers
//! - [`ethernet`] - link-layer header decoding
//! - [`ipv4`] - network-layer header decoding
//! - [`icmp`], [`tcp`], [`udp`] - transport header decoding
//! - [`dissector`] - orchestration of the full chain per frame
//!
//! The decoder is stateless and re-entrant: each call to
//! [`dissector::dissect`] borrows one frame, walks it exactly once, and
//! returns a [`dissector::DissectionResult`] borrowing the residual
//! payload from the input.
//!
//! # Example
//!
//! ```rust
//! use snifferx_dissect::{dissect, EtherType};
//!
//! # fn main() -> snifferx_core::Result<()> {
//! let frame: &[u8] = &[
//!     0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, // destination MAC
//!     0x00, 0x11, 0x22, 0x33, 0x44, 0x55, // source MAC
//!     0x08, 0x06, // ARP, not dissected further
//!     0x00, 0x01, 0x08, 0x00,
//! ];
//!
//! let result = dissect(frame)?;
//! assert_eq!(result.ethernet.ether_type, EtherType::Arp);
//! assert!(result.ipv4.is_none());
//! assert_eq!(result.payload.len(), 4);
//! # Ok(())
//! # }
//! ```

pub mod dissector;
pub mod ethernet;
pub mod field;
pub mod icmp;
pub mod ipv4;
pub mod tcp;
pub mod udp;

// Re-export main types
pub use dissector::{dissect, DissectionResult, Transport, Warning};
pub use ethernet::{EtherType, EthernetHeader, MacAddress};
pub use icmp::IcmpHeader;
pub use ipv4::{IpProtocol, Ipv4Header};
pub use tcp::{TcpFlags, TcpHeader};
pub use udp::UdpHeader;
