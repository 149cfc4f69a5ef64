//! Parameters structure for HK

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

use super::ParamId;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the HK module.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct HkParams {
    /// Limits applied to the parameters at initialisation. Parameters without
    /// an entry keep the default `(0, 0)` limits.
    #[serde(default)]
    pub limits: Vec<LimitParams>,
}

/// Limits for a single parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitParams {
    pub param: ParamId,

    /// Lowest nominal value, inclusive.
    pub low: u32,

    /// Highest nominal value, inclusive.
    pub high: u32,
}
