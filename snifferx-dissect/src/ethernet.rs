//! Ethernet II frame header decoding
//!
//! The link layer is always the first 14 bytes of a captured frame:
//! destination MAC, source MAC, and the EtherType selecting the next
//! decoder in the chain.

use crate::field;
use snifferx_core::{Layer, Result};
use std::fmt;

/// Common EtherType values seen in captured frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtherType {
    /// IPv4 (0x0800) - the only value dissected further
    Ipv4,
    /// ARP (0x0806)
    Arp,
    /// VLAN-tagged frame (0x8100)
    Vlan,
    /// IPv6 (0x86DD)
    Ipv6,
    /// Any other EtherType
    Other(u16),
}

impl EtherType {
    /// Convert EtherType to its u16 wire value
    pub fn to_u16(self) -> u16 {
        match self {
            EtherType::Ipv4 => 0x0800,
            EtherType::Arp => 0x0806,
            EtherType::Vlan => 0x8100,
            EtherType::Ipv6 => 0x86DD,
            EtherType::Other(val) => val,
        }
    }

    /// Create EtherType from its u16 wire value
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x0800 => EtherType::Ipv4,
            0x0806 => EtherType::Arp,
            0x8100 => EtherType::Vlan,
            0x86DD => EtherType::Ipv6,
            val => EtherType::Other(val),
        }
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtherType::Ipv4 => write!(f, "IPv4"),
            EtherType::Arp => write!(f, "ARP"),
            EtherType::Vlan => write!(f, "VLAN"),
            EtherType::Ipv6 => write!(f, "IPv6"),
            EtherType::Other(val) => write!(f, "0x{:04X}", val),
        }
    }
}

/// MAC address (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// Broadcast MAC address (FF:FF:FF:FF:FF:FF)
    pub const BROADCAST: MacAddress = MacAddress([0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);

    /// Create a new MAC address from a byte array
    pub fn new(bytes: [u8; 6]) -> Self {
        MacAddress(bytes)
    }

    /// Get the MAC address as a byte array
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Check if this is the broadcast address
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
    }

    /// Check if this is a multicast address (bit 0 of first octet is 1)
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 == 0x01
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        MacAddress(bytes)
    }
}

/// Decoded Ethernet II header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetHeader {
    /// Destination MAC address
    pub destination: MacAddress,
    /// Source MAC address
    pub source: MacAddress,
    /// EtherType selecting the next-layer decoder
    pub ether_type: EtherType,
}

impl EthernetHeader {
    /// Ethernet header size (dst + src + type)
    pub const HEADER_LEN: usize = 14;

    /// Decode the 14-byte Ethernet header, returning it together with the
    /// residual bytes that belong to the next layer.
    pub fn decode(data: &[u8]) -> Result<(Self, &[u8])> {
        field::require(data, Self::HEADER_LEN, Layer::Ethernet)?;

        let destination = MacAddress::new(field::read_array(data, 0, Layer::Ethernet)?);
        let source = MacAddress::new(field::read_array(data, 6, Layer::Ethernet)?);
        let ether_type = EtherType::from_u16(field::read_u16(data, 12, Layer::Ethernet)?);

        let header = EthernetHeader {
            destination,
            source,
            ether_type,
        };
        Ok((header, &data[Self::HEADER_LEN..]))
    }
}
