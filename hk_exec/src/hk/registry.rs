//! Registry of the housekeeping parameters

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::convert::TryFrom;
use std::fmt;

use serde::{Serialize, Deserialize};

use super::HkError;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The number of parameters tracked by the HK table.
pub const NUM_PARAMS: usize = 5;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Identifiers of every housekeeping parameter.
///
/// The discriminant is the parameter's index in the HK table and its position
/// in the downlink packet, so the order of the variants must never change.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamId {
    /// Battery voltage.
    ///
    /// Units: millivolts
    BattVoltage = 0,

    /// Battery temperature.
    ///
    /// Units: degrees celsius
    BattTemp = 1,

    /// Solar panel X angle.
    ///
    /// Units: degrees
    SolarPanelX = 2,

    /// Altitude.
    ///
    /// Units: kilometers
    Altitude = 3,

    /// CPU load.
    ///
    /// Units: percent
    CpuLoad = 4,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ParamId {
    /// All parameters in ascending identifier order.
    pub const ALL: [ParamId; NUM_PARAMS] = [
        ParamId::BattVoltage,
        ParamId::BattTemp,
        ParamId::SolarPanelX,
        ParamId::Altitude,
        ParamId::CpuLoad,
    ];

    /// Index of the parameter in the HK table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Mnemonic used in logs and archives.
    pub fn name(self) -> &'static str {
        match self {
            ParamId::BattVoltage => "BATT_VOLTAGE",
            ParamId::BattTemp => "BATT_TEMP",
            ParamId::SolarPanelX => "SOLAR_PANEL_X",
            ParamId::Altitude => "ALTITUDE",
            ParamId::CpuLoad => "CPU_LOAD",
        }
    }
}

impl From<ParamId> for usize {
    fn from(id: ParamId) -> Self {
        id.index()
    }
}

impl TryFrom<usize> for ParamId {
    type Error = HkError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        ParamId::ALL.get(index)
            .copied()
            .ok_or(HkError::InvalidId(index))
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
