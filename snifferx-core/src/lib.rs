//! Snifferx Core Library
//!
//! This crate provides the shared types and error handling for the
//! snifferx passive packet dissector.

pub mod error;
pub mod packet;

// Re-export commonly used types
pub use error::{Error, Layer, Result};
pub use packet::Packet;
