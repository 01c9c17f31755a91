//! TCP header decoding
//!
//! Only the 14-byte fixed prefix is interpreted: ports, sequence and
//! acknowledgment numbers, and the offset/flags word. Options (data
//! offset > 20) are consumed along with the header and not exposed.

use crate::field;
use snifferx_core::{Error, Layer, Result};
use std::fmt;

/// TCP control flags, each an independent single-bit boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TcpFlags {
    /// URG - Urgent pointer field is significant
    pub urg: bool,
    /// ACK - Acknowledgment field is significant
    pub ack: bool,
    /// PSH - Push function
    pub psh: bool,
    /// RST - Reset the connection
    pub rst: bool,
    /// SYN - Synchronize sequence numbers
    pub syn: bool,
    /// FIN - No more data from sender
    pub fin: bool,
}

impl TcpFlags {
    /// Extract the six flags from the 16-bit offset/reserved/flags word.
    pub fn from_word(word: u16) -> Self {
        TcpFlags {
            urg: field::bit_set(word, 0x20),
            ack: field::bit_set(word, 0x10),
            psh: field::bit_set(word, 0x08),
            rst: field::bit_set(word, 0x04),
            syn: field::bit_set(word, 0x02),
            fin: field::bit_set(word, 0x01),
        }
    }
}

impl fmt::Display for TcpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            ("URG", self.urg),
            ("ACK", self.ack),
            ("PSH", self.psh),
            ("RST", self.rst),
            ("SYN", self.syn),
            ("FIN", self.fin),
        ];
        let mut first = true;
        for (name, set) in names {
            if set {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}

/// Decoded TCP header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpHeader {
    /// Source port
    pub source_port: u16,
    /// Destination port
    pub destination_port: u16,
    /// Sequence number
    pub sequence: u32,
    /// Acknowledgment number
    pub acknowledgment: u32,
    /// Offset of the payload in bytes, derived from the top nibble of
    /// the offset/flags word
    pub data_offset: usize,
    /// Control flags
    pub flags: TcpFlags,
}

impl TcpHeader {
    /// Fixed prefix interpreted by this decoder (through the flags word)
    pub const FIXED_PREFIX_LEN: usize = 14;

    /// Minimum full TCP header size (data offset 5 words)
    pub const MIN_HEADER_LEN: usize = 20;

    /// Decode the TCP header, returning it together with the residual
    /// payload starting at the declared data offset.
    pub fn decode(data: &[u8]) -> Result<(Self, &[u8])> {
        field::require(data, Self::FIXED_PREFIX_LEN, Layer::Tcp)?;

        let source_port = field::read_u16(data, 0, Layer::Tcp)?;
        let destination_port = field::read_u16(data, 2, Layer::Tcp)?;
        let sequence = field::read_u32(data, 4, Layer::Tcp)?;
        let acknowledgment = field::read_u32(data, 8, Layer::Tcp)?;

        let word = field::read_u16(data, 12, Layer::Tcp)?;
        let data_offset = (word >> 12) as usize * 4;
        let flags = TcpFlags::from_word(word);

        // A data offset below 20 claims a header smaller than the fixed fields
        if data_offset < Self::MIN_HEADER_LEN {
            return Err(Error::truncated(Layer::Tcp, Self::MIN_HEADER_LEN, data_offset));
        }
        field::require(data, data_offset, Layer::Tcp)?;

        let header = TcpHeader {
            source_port,
            destination_port,
            sequence,
            acknowledgment,
            data_offset,
            flags,
        };
        Ok((header, &data[data_offset..]))
    }
}
