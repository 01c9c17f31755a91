//! Frame dissection orchestration
//!
//! Drives the decoder chain Ethernet → IPv4 → {ICMP, TCP, UDP}. Each layer
//! consumes its header and hands the residual bytes to the next; decoding
//! stops cleanly at the first unrecognized EtherType or IP protocol, and a
//! truncated header at any layer fails the whole frame.

use crate::ethernet::{EtherType, EthernetHeader};
use crate::icmp::IcmpHeader;
use crate::ipv4::{IpProtocol, Ipv4Header};
use crate::tcp::TcpHeader;
use crate::udp::UdpHeader;
use snifferx_core::Result;

/// Transport-layer decode outcome, dispatched on the IPv4 protocol number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// ICMP message (protocol 1)
    Icmp(IcmpHeader),
    /// TCP segment (protocol 6)
    Tcp(TcpHeader),
    /// UDP datagram (protocol 17)
    Udp(UdpHeader),
    /// Protocol number with no decoder; the IPv4 payload is left raw
    Unrecognized(u8),
}

/// Non-fatal oddity observed while decoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The version nibble of a frame claimed to be IPv4 was not 4.
    /// Decoding proceeds anyway; captures in the wild contain these.
    VersionMismatch { version: u8 },
}

/// Fully decoded frame: one header per layer reached, plus the residual
/// payload at whichever layer decoding stopped.
///
/// Borrows the input frame; built fresh per frame and never retained
/// across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DissectionResult<'a> {
    /// Link-layer header, always present
    pub ethernet: EthernetHeader,
    /// Network-layer header if the EtherType was IPv4
    pub ipv4: Option<Ipv4Header>,
    /// Transport decode outcome if an IPv4 header was present
    pub transport: Option<Transport>,
    /// Residual bytes after the last consumed header
    pub payload: &'a [u8],
    /// Non-fatal warnings gathered along the way
    pub warnings: Vec<Warning>,
}

/// Dissect one raw frame.
///
/// Stateless and deterministic: the same bytes always produce the same
/// result, and independent buffers may be dissected concurrently.
pub fn dissect(frame: &[u8]) -> Result<DissectionResult<'_>> {
    let mut warnings = Vec::new();

    let (ethernet, rest) = EthernetHeader::decode(frame)?;
    if ethernet.ether_type != EtherType::Ipv4 {
        return Ok(DissectionResult {
            ethernet,
            ipv4: None,
            transport: None,
            payload: rest,
            warnings,
        });
    }

    let (ipv4, rest) = Ipv4Header::decode(rest)?;
    if ipv4.version != 4 {
        warnings.push(Warning::VersionMismatch {
            version: ipv4.version,
        });
    }

    let (transport, payload) = match ipv4.protocol {
        IpProtocol::Icmp => {
            let (header, rest) = IcmpHeader::decode(rest)?;
            (Transport::Icmp(header), rest)
        }
        IpProtocol::Tcp => {
            let (header, rest) = TcpHeader::decode(rest)?;
            (Transport::Tcp(header), rest)
        }
        IpProtocol::Udp => {
            let (header, rest) = UdpHeader::decode(rest)?;
            (Transport::Udp(header), rest)
        }
        IpProtocol::Other(proto) => (Transport::Unrecognized(proto), rest),
    };

    Ok(DissectionResult {
        ethernet,
        ipv4: Some(ipv4),
        transport: Some(transport),
        payload,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use snifferx_core::{Error, Layer};
    use std::net::Ipv4Addr;

    fn ethernet_prefix(ether_type: u16) -> Vec<u8> {
        let mut frame = Vec::new();
        frame.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]); // dst
        frame.extend_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]); // src
        frame.extend_from_slice(&ether_type.to_be_bytes());
        frame
    }

    fn ipv4_prefix(protocol: u8) -> Vec<u8> {
        let mut header = vec![0u8; 20];
        header[0] = 0x45;
        header[8] = 64;
        header[9] = protocol;
        header[12..16].copy_from_slice(&[192, 168, 0, 1]);
        header[16..20].copy_from_slice(&[192, 168, 0, 2]);
        header
    }

    #[test]
    fn test_tcp_syn_frame_54_bytes() {
        let mut frame = ethernet_prefix(0x0800);
        frame.extend_from_slice(&ipv4_prefix(6));
        // 20-byte TCP header, SYN only
        frame.extend_from_slice(&80u16.to_be_bytes());
        frame.extend_from_slice(&40000u16.to_be_bytes());
        frame.extend_from_slice(&1u32.to_be_bytes());
        frame.extend_from_slice(&0u32.to_be_bytes());
        frame.extend_from_slice(&0x5002u16.to_be_bytes());
        frame.extend_from_slice(&[0u8; 6]);
        assert_eq!(frame.len(), 54);

        let result = dissect(&frame).unwrap();
        let ipv4 = result.ipv4.expect("IPv4 header present");
        assert_eq!(ipv4.protocol, IpProtocol::Tcp);
        assert_eq!(ipv4.source, Ipv4Addr::new(192, 168, 0, 1));

        match result.transport.expect("transport present") {
            Transport::Tcp(tcp) => {
                assert!(tcp.flags.syn);
                assert!(!tcp.flags.urg);
                assert!(!tcp.flags.ack);
                assert!(!tcp.flags.psh);
                assert!(!tcp.flags.rst);
                assert!(!tcp.flags.fin);
            }
            other => panic!("Expected TCP, got {:?}", other),
        }
        assert!(result.payload.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_udp_declared_length_ignored() {
        let mut frame = ethernet_prefix(0x0800);
        frame.extend_from_slice(&ipv4_prefix(17));
        // 8-byte UDP header with length field 0, then 4 payload bytes
        frame.extend_from_slice(&5353u16.to_be_bytes());
        frame.extend_from_slice(&5353u16.to_be_bytes());
        frame.extend_from_slice(&0u16.to_be_bytes());
        frame.extend_from_slice(&0u16.to_be_bytes());
        frame.extend_from_slice(&[0x11, 0x22, 0x33, 0x44]);

        let result = dissect(&frame).unwrap();
        match result.transport.unwrap() {
            Transport::Udp(udp) => assert_eq!(udp.length, 0),
            other => panic!("Expected UDP, got {:?}", other),
        }
        assert_eq!(result.payload, &[0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_icmp_echo_frame() {
        let mut frame = ethernet_prefix(0x0800);
        frame.extend_from_slice(&ipv4_prefix(1));
        frame.extend_from_slice(&[0x08, 0x00, 0xAB, 0xCD]);
        frame.extend_from_slice(&[0x00, 0x01, 0x00, 0x02]);

        let result = dissect(&frame).unwrap();
        match result.transport.unwrap() {
            Transport::Icmp(icmp) => {
                assert_eq!(icmp.icmp_type, 8);
                assert_eq!(icmp.code, 0);
                assert_eq!(icmp.checksum, 0xABCD);
            }
            other => panic!("Expected ICMP, got {:?}", other),
        }
        assert_eq!(result.payload, &[0x00, 0x01, 0x00, 0x02]);
    }

    #[test]
    fn test_unrecognized_ether_type_stops_after_ethernet() {
        let mut frame = ethernet_prefix(0x0806); // ARP
        frame.extend_from_slice(&[0u8; 40]);

        let result = dissect(&frame).unwrap();
        assert_eq!(result.ethernet.ether_type, EtherType::Arp);
        assert!(result.ipv4.is_none());
        assert!(result.transport.is_none());
        assert_eq!(result.payload.len(), 40);
    }

    #[test]
    fn test_unrecognized_ip_protocol_keeps_raw_payload() {
        let mut frame = ethernet_prefix(0x0800);
        frame.extend_from_slice(&ipv4_prefix(89)); // OSPF, no decoder
        frame.extend_from_slice(&[0xDE, 0xAD]);

        let result = dissect(&frame).unwrap();
        assert_eq!(result.transport, Some(Transport::Unrecognized(89)));
        assert_eq!(result.payload, &[0xDE, 0xAD]);
    }

    #[test]
    fn test_version_mismatch_is_a_warning_not_an_error() {
        let mut frame = ethernet_prefix(0x0800);
        let mut ip = ipv4_prefix(17);
        ip[0] = 0x65; // version nibble 6
        frame.extend_from_slice(&ip);
        frame.extend_from_slice(&[0u8; 8]);

        let result = dissect(&frame).unwrap();
        assert_eq!(
            result.warnings,
            vec![Warning::VersionMismatch { version: 6 }]
        );
        assert!(matches!(result.transport, Some(Transport::Udp(_))));
    }

    #[test]
    fn test_truncation_is_tagged_with_failing_layer() {
        // Ethernet claims IPv4 but only 10 IPv4 bytes follow
        let mut frame = ethernet_prefix(0x0800);
        frame.extend_from_slice(&[0x45u8; 10]);
        match dissect(&frame).unwrap_err() {
            Error::Truncated { layer, .. } => assert_eq!(layer, Layer::Ipv4),
            _ => panic!("Expected Truncated error"),
        }

        // TCP prefix one byte short fails at the TCP layer
        let mut frame = ethernet_prefix(0x0800);
        frame.extend_from_slice(&ipv4_prefix(6));
        frame.extend_from_slice(&[0u8; TcpHeader::FIXED_PREFIX_LEN - 1]);
        match dissect(&frame).unwrap_err() {
            Error::Truncated { layer, .. } => assert_eq!(layer, Layer::Tcp),
            _ => panic!("Expected Truncated error"),
        }
    }

    #[test]
    fn test_dissection_is_deterministic() {
        let mut frame = ethernet_prefix(0x0800);
        frame.extend_from_slice(&ipv4_prefix(6));
        frame.extend_from_slice(&443u16.to_be_bytes());
        frame.extend_from_slice(&50000u16.to_be_bytes());
        frame.extend_from_slice(&7u32.to_be_bytes());
        frame.extend_from_slice(&9u32.to_be_bytes());
        frame.extend_from_slice(&0x5010u16.to_be_bytes());
        frame.extend_from_slice(&[0u8; 6]);
        frame.extend_from_slice(&[1, 2, 3]);

        let first = dissect(&frame).unwrap();
        let second = dissect(&frame).unwrap();
        assert_eq!(first, second);
    }
}
