//! ICMP header decoding

use crate::field;
use snifferx_core::{Layer, Result};

/// Decoded ICMP header (type, code, checksum)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcmpHeader {
    /// ICMP message type (8 = echo request, 0 = echo reply, ...)
    pub icmp_type: u8,
    /// Message sub-code
    pub code: u8,
    /// Checksum as carried in the header, not re-verified
    pub checksum: u16,
}

impl IcmpHeader {
    /// ICMP header size covered by this decoder
    pub const HEADER_LEN: usize = 4;

    /// Decode the 4-byte ICMP header, returning it together with the
    /// residual message body.
    pub fn decode(data: &[u8]) -> Result<(Self, &[u8])> {
        field::require(data, Self::HEADER_LEN, Layer::Icmp)?;

        let header = IcmpHeader {
            icmp_type: field::read_u8(data, 0, Layer::Icmp)?,
            code: field::read_u8(data, 1, Layer::Icmp)?,
            checksum: field::read_u16(data, 2, Layer::Icmp)?,
        };
        Ok((header, &data[Self::HEADER_LEN..]))
    }
}
