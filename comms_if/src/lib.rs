//! # Communications interface crate.
//!
//! Provides all common communications interfaces for the housekeeping software.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Uplinked telecommand definitions
pub mod tc;

/// Downlinked telemetry definitions
pub mod tm;
