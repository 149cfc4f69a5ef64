//! # HK Executable Parameters
//!
//! This module provide parameters for the housekeeping executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

use crate::sensor_sim::SimSensorParams;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HkExecParams {

    /// Target period of one cycle
    ///
    /// Units: seconds
    pub cycle_period_s: f64,

    /// Periodic report interval used at startup
    ///
    /// Units: milliseconds
    pub report_interval_ms: u32,

    /// Maximum length of a packet accepted by the downlink
    pub max_packet_len: usize,

    /// Simulated sensors feeding the HK table
    #[serde(default)]
    pub sensors: Vec<SimSensorParams>
}
