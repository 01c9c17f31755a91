//! Error types for snifferx

use std::fmt;
use thiserror::Error;

/// Result type alias for snifferx operations
pub type Result<T> = std::result::Result<T, Error>;

/// Protocol layer a decoder was working on when it failed.
///
/// Carried inside [`Error::Truncated`] so the caller can report exactly
/// where in the chain a malformed frame fell short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Link layer (Ethernet II)
    Ethernet,
    /// Network layer (IPv4)
    Ipv4,
    /// ICMP transport
    Icmp,
    /// TCP transport
    Tcp,
    /// UDP transport
    Udp,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Ethernet => write!(f, "Ethernet"),
            Layer::Ipv4 => write!(f, "IPv4"),
            Layer::Icmp => write!(f, "ICMP"),
            Layer::Tcp => write!(f, "TCP"),
            Layer::Udp => write!(f, "UDP"),
        }
    }
}

/// Main error type for snifferx
#[derive(Error, Debug)]
pub enum Error {
    /// Network I/O error
    #[error("Network I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A header declared or required more bytes than the frame still holds.
    ///
    /// Fatal for the frame being dissected, never for the capture loop.
    #[error("Truncated {layer} header: need {needed} bytes, {available} available")]
    Truncated {
        layer: Layer,
        needed: usize,
        available: usize,
    },

    /// Capture error
    #[error("Packet capture error: {0}")]
    Capture(String),

    /// Interface not found
    #[error("Interface '{0}' not found")]
    InterfaceNotFound(String),

    /// Insufficient privileges
    #[error("Insufficient privileges: {0}")]
    InsufficientPrivileges(String),
}

impl Error {
    /// Create a truncation error tagged with the layer it occurred at
    pub fn truncated(layer: Layer, needed: usize, available: usize) -> Self {
        Error::Truncated {
            layer,
            needed,
            available,
        }
    }

    /// Create a capture error with a custom message
    pub fn capture<S: Into<String>>(msg: S) -> Self {
        Error::Capture(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_carries_layer() {
        let err = Error::truncated(Layer::Tcp, 14, 9);
        match err {
            Error::Truncated {
                layer,
                needed,
                available,
            } => {
                assert_eq!(layer, Layer::Tcp);
                assert_eq!(needed, 14);
                assert_eq!(available, 9);
            }
            _ => panic!("Expected Truncated error"),
        }
    }

    #[test]
    fn test_truncated_display() {
        let err = Error::truncated(Layer::Ethernet, 14, 10);
        let msg = err.to_string();
        assert!(msg.contains("Ethernet"));
        assert!(msg.contains("14"));
        assert!(msg.contains("10"));
    }
}
