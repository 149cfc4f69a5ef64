//! # TM Sender
//!
//! Mock downlink transmitter. Packets are logged and archived instead of being
//! sent over a radio link.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::info;
use serde::Serialize;

use util::{archive::Archiver, session::Session};

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A link able to transmit telemetry packets to the ground.
pub trait Downlink {
    /// Send a packet to the destination identified by `apid`.
    fn send_report(&mut self, apid: u16, data: &[u8]) -> Result<(), DownlinkError>;
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Telemetry sender
pub struct TmSender {
    /// Packets longer than this are rejected.
    max_packet_len: usize,

    num_packets: u64,

    arch: Archiver,
}

#[derive(Serialize)]
struct PacketRecord<'a> {
    apid: u16,
    len: usize,
    data: &'a str,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DownlinkError {
    #[error("Packet of {0} bytes exceeds the maximum packet length of {1} bytes")]
    PacketTooLong(usize, usize),

    #[error("Could not archive the packet: {0}")]
    ArchiveError(String),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl TmSender {
    /// Create a new sender which doesn't archive packets.
    pub fn new(max_packet_len: usize) -> Self {
        Self {
            max_packet_len,
            num_packets: 0,
            arch: Archiver::default(),
        }
    }

    /// Create a new sender archiving every packet in the session.
    pub fn with_archive(session: &Session, max_packet_len: usize) -> Result<Self, DownlinkError> {
        let arch = Archiver::from_path(session, "tm/downlink.csv")
            .map_err(|e| DownlinkError::ArchiveError(e.to_string()))?;

        Ok(Self {
            arch,
            ..Self::new(max_packet_len)
        })
    }

    /// Number of packets sent so far.
    pub fn num_packets(&self) -> u64 {
        self.num_packets
    }
}

impl Downlink for TmSender {
    fn send_report(&mut self, apid: u16, data: &[u8]) -> Result<(), DownlinkError> {
        if data.len() > self.max_packet_len {
            return Err(DownlinkError::PacketTooLong(data.len(), self.max_packet_len));
        }

        let hex = to_hex(data);

        info!("TM: APID 0x{:03X}, {} bytes: {}", apid, data.len(), hex);

        self.num_packets += 1;

        self.arch.serialise(PacketRecord {
            apid,
            len: data.len(),
            data: &hex,
        })
        .map_err(|e| DownlinkError::ArchiveError(e.to_string()))
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Format bytes as space separated upper case hex.
pub fn to_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x00, 0x0E, 0x74, 0xFF]), "00 0E 74 FF");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn test_send_report() {
        let mut tm = TmSender::new(8);

        assert!(tm.send_report(0x030, &[1, 2, 3, 4]).is_ok());
        assert_eq!(tm.num_packets(), 1);

        assert!(matches!(
            tm.send_report(0x031, &[0; 9]),
            Err(DownlinkError::PacketTooLong(9, 8))
        ));
        assert_eq!(tm.num_packets(), 1);
    }
}
