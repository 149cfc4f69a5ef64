//! # Telemetry module
//!
//! Definitions of the housekeeping telemetry sent from the spacecraft to the
//! ground.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Destination tag (APID) of the housekeeping summary report.
pub const APID_HK_SUMMARY: u16 = 0x030;

/// Destination tag (APID) of the full housekeeping parameter packet.
pub const APID_HK_PARAMS: u16 = 0x031;

/// Size of an encoded `HkSummary` in bytes.
pub const HK_SUMMARY_SIZE: usize = 4;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Fixed size summary collected from other subsystems at report time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HkSummary {
    /// Current mode as reported by FDIR.
    pub mode: FdirMode,

    /// Battery level placeholder.
    pub batt_level: u8,

    /// Temperature placeholder.
    pub temp: u8,

    /// Status placeholder.
    pub status: u8,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Operating mode as determined by fault detection, isolation and recovery.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[repr(u8)]
pub enum FdirMode {
    Nominal = 0x00,
    Safe = 0x01,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl HkSummary {
    /// Build a summary for the given mode, with the placeholder fields at their fixed values.
    pub fn new(mode: FdirMode) -> Self {
        Self {
            mode,
            batt_level: 0xFF,
            temp: 0x00,
            status: 0x01,
        }
    }

    /// Encode the summary as `[mode, batt_level, temp, status]`.
    pub fn to_bytes(&self) -> [u8; HK_SUMMARY_SIZE] {
        [self.mode.to_byte(), self.batt_level, self.temp, self.status]
    }
}

impl FdirMode {
    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

impl Default for FdirMode {
    fn default() -> Self {
        FdirMode::Nominal
    }
}
