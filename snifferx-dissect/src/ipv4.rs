//! IPv4 header decoding
//!
//! The IPv4 header is variable length: the low nibble of the first byte
//! counts 32-bit words, so options (IHL > 5) are consumed along with the
//! fixed header and never exposed separately. The protocol field selects
//! the transport decoder.

use crate::field;
use snifferx_core::{Error, Layer, Result};
use std::fmt;
use std::net::Ipv4Addr;

/// IP protocol numbers dissected by snifferx
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpProtocol {
    /// ICMP (1)
    Icmp,
    /// TCP (6)
    Tcp,
    /// UDP (17)
    Udp,
    /// Any other protocol number, terminal for the decode chain
    Other(u8),
}

impl IpProtocol {
    /// Convert to the wire protocol number
    pub fn to_u8(self) -> u8 {
        match self {
            IpProtocol::Icmp => 1,
            IpProtocol::Tcp => 6,
            IpProtocol::Udp => 17,
            IpProtocol::Other(val) => val,
        }
    }

    /// Create from the wire protocol number
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => IpProtocol::Icmp,
            6 => IpProtocol::Tcp,
            17 => IpProtocol::Udp,
            val => IpProtocol::Other(val),
        }
    }
}

impl fmt::Display for IpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpProtocol::Icmp => write!(f, "ICMP"),
            IpProtocol::Tcp => write!(f, "TCP"),
            IpProtocol::Udp => write!(f, "UDP"),
            IpProtocol::Other(val) => write!(f, "{}", val),
        }
    }
}

/// Decoded IPv4 header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Header {
    /// Version nibble (4 for well-formed IPv4; other values are decoded
    /// anyway and flagged as a warning by the dissector)
    pub version: u8,
    /// Header length in bytes, derived from the IHL nibble
    pub header_len: usize,
    /// Time to Live
    pub ttl: u8,
    /// Transport protocol
    pub protocol: IpProtocol,
    /// Source address
    pub source: Ipv4Addr,
    /// Destination address
    pub destination: Ipv4Addr,
}

impl Ipv4Header {
    /// Minimum IPv4 header size (IHL = 5, no options)
    pub const MIN_HEADER_LEN: usize = 20;

    /// Decode the IPv4 header, returning it together with the residual
    /// bytes starting at the declared header length.
    pub fn decode(data: &[u8]) -> Result<(Self, &[u8])> {
        field::require(data, Self::MIN_HEADER_LEN, Layer::Ipv4)?;

        let version_ihl = field::read_u8(data, 0, Layer::Ipv4)?;
        let version = field::high_nibble(version_ihl);
        let header_len = field::low_nibble(version_ihl) as usize * 4;

        // An IHL below 5 claims a header smaller than the fixed fields
        if header_len < Self::MIN_HEADER_LEN {
            return Err(Error::truncated(Layer::Ipv4, Self::MIN_HEADER_LEN, header_len));
        }
        field::require(data, header_len, Layer::Ipv4)?;

        let ttl = field::read_u8(data, 8, Layer::Ipv4)?;
        let protocol = IpProtocol::from_u8(field::read_u8(data, 9, Layer::Ipv4)?);
        let source = Ipv4Addr::from(field::read_array::<4>(data, 12, Layer::Ipv4)?);
        let destination = Ipv4Addr::from(field::read_array::<4>(data, 16, Layer::Ipv4)?);

        let header = Ipv4Header {
            version,
            header_len,
            ttl,
            protocol,
            source,
            destination,
        };
        Ok((header, &data[header_len..]))
    }
}
