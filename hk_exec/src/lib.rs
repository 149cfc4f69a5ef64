//! # Housekeeping library.
//!
//! This library allows other crates in the workspace to access items defined inside the HK
//! crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Global data store for the executable
pub mod data_store;

/// Fault detection, isolation and recovery - owns the safe mode reported in HK summaries
pub mod fdir;

/// Housekeeping service - telemetry table, limit monitoring and packet serialisation
pub mod hk;

/// Executable parameters
pub mod params;

/// Report scheduling and generation
pub mod report;

/// Simulated sensor suite
pub mod sensor_sim;

/// Telecommand processor - executes uplinked HK commands
pub mod tc_processor;

/// Telemetry sender - the downlink seam
pub mod tm_sender;
