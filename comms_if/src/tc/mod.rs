//! # Telecommand module
//!
//! This module provides telecommand functionality to the communications
//! interface.
//!
//! Housekeeping telecommands arrive as raw byte payloads. The first byte is
//! always the command code, any following bytes are the command's arguments.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Serialize, Deserialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Command code for changing the periodic report interval.
///
/// Payload: `[HK_CMD_SET_INTERVAL, interval_s]`
pub const HK_CMD_SET_INTERVAL: u8 = 0x01;

/// Command code for requesting an immediate housekeeping report.
///
/// Payload: `[HK_CMD_FORCE_REPORT]`
pub const HK_CMD_FORCE_REPORT: u8 = 0x02;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A housekeeping telecommand, i.e. an instruction sent to the spacecraft by
/// the ground station.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HkTc {
    /// Set the interval between periodic housekeeping reports.
    SetInterval {
        /// The new interval in seconds.
        interval_s: u8
    },

    /// Generate a housekeeping report now, outside of the periodic schedule.
    ForceReport
}

/// Possible parsing errors.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum TcParseError {
    #[error("TC payload is empty")]
    Empty,

    #[error("TC with code 0x{0:02X} is missing its argument")]
    MissingArgument(u8),

    #[error("Unknown command 0x{0:02X}")]
    UnknownCommand(u8)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl HkTc {

    /// Parse a new TC from an uplinked byte payload.
    ///
    /// Bytes beyond those required by the command are ignored.
    pub fn from_bytes(payload: &[u8]) -> Result<Self, TcParseError> {
        let code = match payload.first() {
            Some(c) => *c,
            None => return Err(TcParseError::Empty)
        };

        match code {
            HK_CMD_SET_INTERVAL => match payload.get(1) {
                Some(s) => Ok(HkTc::SetInterval { interval_s: *s }),
                None => Err(TcParseError::MissingArgument(code))
            },
            HK_CMD_FORCE_REPORT => Ok(HkTc::ForceReport),
            c => Err(TcParseError::UnknownCommand(c))
        }
    }

    /// Encode the TC into the byte payload expected by `from_bytes`.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            HkTc::SetInterval { interval_s } => vec![HK_CMD_SET_INTERVAL, *interval_s],
            HkTc::ForceReport => vec![HK_CMD_FORCE_REPORT]
        }
    }

    /// Get the command code of this TC.
    pub fn code(&self) -> u8 {
        match self {
            HkTc::SetInterval { .. } => HK_CMD_SET_INTERVAL,
            HkTc::ForceReport => HK_CMD_FORCE_REPORT
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
