//! Text rendering of dissection results
//!
//! All formatting lives here; the decoder produces no text of its own.
//! Output is the classic nested-indentation layout: one block per layer
//! reached, then a hex dump of whatever payload was left over.

use snifferx_dissect::{DissectionResult, Transport, Warning};
use std::fmt::Write;

/// Display width the hex dump is wrapped at, prefix included
const DISPLAY_WIDTH: usize = 80;

/// Render a payload as `\xNN` escapes, wrapped at [`DISPLAY_WIDTH`]
/// columns minus the prefix, with every line carrying the prefix.
///
/// The per-line byte budget is rounded down so lines only ever split
/// between whole `\xNN` escapes, never inside one.
pub fn format_multi_line(prefix: &str, data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    // 4 output chars per byte
    let width = DISPLAY_WIDTH.saturating_sub(prefix.len());
    let bytes_per_line = (width / 4).max(1);

    data.chunks(bytes_per_line)
        .map(|chunk| {
            let mut line = prefix.to_string();
            for byte in chunk {
                let _ = write!(line, "\\x{:02x}", byte);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one dissected frame as indented multi-line text.
pub fn render(result: &DissectionResult<'_>) -> String {
    let mut out = String::new();

    let eth = &result.ethernet;
    let _ = writeln!(out, "Ethernet Frame:");
    let _ = writeln!(
        out,
        "    Destination: {}, Source: {}, Protocol: {}",
        eth.destination, eth.source, eth.ether_type
    );

    let Some(ipv4) = &result.ipv4 else {
        push_payload(&mut out, "    Data: ", result.payload);
        return out;
    };

    let _ = writeln!(out, "    IPv4 Packet:");
    let _ = writeln!(
        out,
        "        Version: {}, Header Length: {}, TTL: {}",
        ipv4.version, ipv4.header_len, ipv4.ttl
    );
    let _ = writeln!(
        out,
        "        Protocol: {}, Source: {}, Destination: {}",
        ipv4.protocol, ipv4.source, ipv4.destination
    );
    for warning in &result.warnings {
        match warning {
            Warning::VersionMismatch { version } => {
                let _ = writeln!(
                    out,
                    "        Warning: version nibble is {}, expected 4",
                    version
                );
            }
        }
    }

    match result.transport.as_ref() {
        Some(Transport::Icmp(icmp)) => {
            let _ = writeln!(out, "        ICMP Packet:");
            let _ = writeln!(
                out,
                "            Type: {}, Code: {}, Checksum: {}",
                icmp.icmp_type, icmp.code, icmp.checksum
            );
            push_payload(&mut out, "            Data: ", result.payload);
        }
        Some(Transport::Tcp(tcp)) => {
            let _ = writeln!(out, "        TCP Segment:");
            let _ = writeln!(
                out,
                "            Source Port: {}, Destination Port: {}",
                tcp.source_port, tcp.destination_port
            );
            let _ = writeln!(
                out,
                "            Sequence: {}, Acknowledgment: {}",
                tcp.sequence, tcp.acknowledgment
            );
            let _ = writeln!(out, "            Flags: {}", tcp.flags);
            push_payload(&mut out, "            Data: ", result.payload);
        }
        Some(Transport::Udp(udp)) => {
            let _ = writeln!(out, "        UDP Segment:");
            let _ = writeln!(
                out,
                "            Source Port: {}, Destination Port: {}, Length: {}",
                udp.source_port, udp.destination_port, udp.length
            );
            push_payload(&mut out, "            Data: ", result.payload);
        }
        Some(Transport::Unrecognized(proto)) => {
            let _ = writeln!(out, "        Other Protocol: {}", proto);
            push_payload(&mut out, "        Data: ", result.payload);
        }
        None => {}
    }

    out
}

fn push_payload(out: &mut String, prefix: &str, payload: &[u8]) {
    let dump = format_multi_line(prefix, payload);
    if !dump.is_empty() {
        out.push_str(&dump);
        out.push('\n');
    }
}
