//! UDP header decoding
//!
//! The declared length field is reported as-is and deliberately not
//! checked against the bytes actually present; payload extent is always
//! whatever follows the fixed 8-byte header.

use crate::field;
use snifferx_core::{Layer, Result};

/// Decoded UDP header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpHeader {
    /// Source port
    pub source_port: u16,
    /// Destination port
    pub destination_port: u16,
    /// Total segment length as declared in the header (header + data)
    pub length: u16,
}

impl UdpHeader {
    /// UDP header size in bytes
    pub const HEADER_LEN: usize = 8;

    /// Decode the 8-byte UDP header, returning it together with the
    /// residual payload. The checksum field is skipped.
    pub fn decode(data: &[u8]) -> Result<(Self, &[u8])> {
        field::require(data, Self::HEADER_LEN, Layer::Udp)?;

        let header = UdpHeader {
            source_port: field::read_u16(data, 0, Layer::Udp)?,
            destination_port: field::read_u16(data, 2, Layer::Udp)?,
            length: field::read_u16(data, 4, Layer::Udp)?,
        };
        Ok((header, &data[Self::HEADER_LEN..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dns_query_header() {
        let mut data = Vec::new();
        data.extend_from_slice(&33000u16.to_be_bytes());
        data.extend_from_slice(&53u16.to_be_bytes());
        data.extend_from_slice(&12u16.to_be_bytes()); // declared length
        data.extend_from_slice(&[0xAB, 0xCD]); // checksum, skipped
        data.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]);

        let (header, rest) = UdpHeader::decode(&data).unwrap();
        assert_eq!(header.source_port, 33000);
        assert_eq!(header.destination_port, 53);
        assert_eq!(header.length, 12);
        assert_eq!(rest, &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_declared_length_not_enforced() {
        // Length field says 0 but 12 bytes are present; payload is still
        // everything past the 8-byte header
        let mut data = vec![0u8; 12];
        data[0..2].copy_from_slice(&1234u16.to_be_bytes());
        data[2..4].copy_from_slice(&5678u16.to_be_bytes());
        data[8..12].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

        let (header, rest) = UdpHeader::decode(&data).unwrap();
        assert_eq!(header.length, 0);
        assert_eq!(rest, &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_minimum_length_succeeds() {
        let data = [0u8; UdpHeader::HEADER_LEN];
        let (_, rest) = UdpHeader::decode(&data).unwrap();
        assert!(rest.is_empty());
    }

    #[test]
    fn test_one_byte_short_is_truncated() {
        let data = [0u8; UdpHeader::HEADER_LEN - 1];
        match UdpHeader::decode(&data).unwrap_err() {
            snifferx_core::Error::Truncated {
                layer,
                needed,
                available,
            } => {
                assert_eq!(layer, Layer::Udp);
                assert_eq!(needed, 8);
                assert_eq!(available, 7);
            }
            _ => panic!("Expected Truncated error"),
        }
    }
}
