//! Housekeeping telemetry module
//!
//! Maintains the table of spacecraft health parameters, evaluates them against
//! their configured limits and packs them into the downlink packet.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod check;
mod limits;
mod params;
mod registry;
mod ser;
mod state;
mod table;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use check::*;
pub use limits::*;
pub use params::*;
pub use registry::*;
pub use ser::*;
pub use state::*;
pub use table::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Size of one parameter record in the downlink packet: 4 value bytes and 1
/// validity byte.
pub const HK_ENTRY_SIZE: usize = 5;

/// Size of the full downlink packet.
pub const HK_PACKET_SIZE: usize = NUM_PARAMS * HK_ENTRY_SIZE;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during HK operation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum HkError {
    #[error("Parameter ID {0} is out of range (expected less than {})", NUM_PARAMS)]
    InvalidId(usize),

    #[error("Parameter {0} has no valid data")]
    Stale(ParamId),

    #[error("Buffer of {available} bytes is too small for the {required} byte HK packet")]
    BufferTooSmall {
        required: usize,
        available: usize
    },
}
