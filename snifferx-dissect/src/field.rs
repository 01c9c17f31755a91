//! Primitive field readers shared by every header decoder
//!
//! All multi-byte integers on the wire are network (big-endian) byte order.
//! Readers never mutate or copy the source slice beyond the bytes they
//! return, and every fallible read is tagged with the layer that asked for
//! it so truncation errors point at the right place in the chain.

use snifferx_core::{Error, Layer, Result};

/// Check that at least `needed` bytes are available.
pub fn require(data: &[u8], needed: usize, layer: Layer) -> Result<()> {
    if data.len() < needed {
        return Err(Error::truncated(layer, needed, data.len()));
    }
    Ok(())
}

/// Read a u8 at `offset`.
pub fn read_u8(data: &[u8], offset: usize, layer: Layer) -> Result<u8> {
    require(data, offset + 1, layer)?;
    Ok(data[offset])
}

/// Read a big-endian u16 at `offset`.
pub fn read_u16(data: &[u8], offset: usize, layer: Layer) -> Result<u16> {
    require(data, offset + 2, layer)?;
    Ok(u16::from_be_bytes([data[offset], data[offset + 1]]))
}

/// Read a big-endian u32 at `offset`.
pub fn read_u32(data: &[u8], offset: usize, layer: Layer) -> Result<u32> {
    require(data, offset + 4, layer)?;
    Ok(u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]))
}

/// Read a fixed-length byte run at `offset` (hardware and IP addresses).
pub fn read_array<const N: usize>(data: &[u8], offset: usize, layer: Layer) -> Result<[u8; N]> {
    require(data, offset + N, layer)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&data[offset..offset + N]);
    Ok(out)
}

/// Top 4 bits of a byte.
pub fn high_nibble(byte: u8) -> u8 {
    byte >> 4
}

/// Bottom 4 bits of a byte.
pub fn low_nibble(byte: u8) -> u8 {
    byte & 0x0F
}

/// Test a single-bit mask against an already-read word.
pub fn bit_set(word: u16, mask: u16) -> bool {
    word & mask != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u16_big_endian() {
        let data = [0x08, 0x00, 0xFF];
        assert_eq!(read_u16(&data, 0, Layer::Ethernet).unwrap(), 0x0800);
        assert_eq!(read_u16(&data, 1, Layer::Ethernet).unwrap(), 0x00FF);
    }

    #[test]
    fn test_read_u32_big_endian() {
        let data = [0x00, 0x00, 0x12, 0x34, 0x56, 0x78];
        assert_eq!(read_u32(&data, 2, Layer::Tcp).unwrap(), 0x12345678);
    }

    #[test]
    fn test_read_past_end_is_truncated() {
        let data = [0x01, 0x02];
        let err = read_u32(&data, 0, Layer::Tcp).unwrap_err();
        match err {
            snifferx_core::Error::Truncated {
                layer,
                needed,
                available,
            } => {
                assert_eq!(layer, Layer::Tcp);
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            _ => panic!("Expected Truncated error"),
        }
    }

    #[test]
    fn test_read_array() {
        let data = [0xAA, 0xBB, 0xCC, 0xDD];
        let addr: [u8; 3] = read_array(&data, 1, Layer::Ipv4).unwrap();
        assert_eq!(addr, [0xBB, 0xCC, 0xDD]);
        assert!(read_array::<4>(&data, 1, Layer::Ipv4).is_err());
    }

    #[test]
    fn test_nibbles() {
        assert_eq!(high_nibble(0x45), 4);
        assert_eq!(low_nibble(0x45), 5);
        assert_eq!(high_nibble(0xF0), 0xF);
        assert_eq!(low_nibble(0xF0), 0);
    }

    #[test]
    fn test_bit_set() {
        assert!(bit_set(0b0000_0010, 0b0000_0010));
        assert!(!bit_set(0b0000_0010, 0b0000_0001));
    }
}
