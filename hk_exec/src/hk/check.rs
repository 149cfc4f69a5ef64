//! Limit evaluation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;

use super::{HkError, LimitEntry, ParamId, TmEntry};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Verdict of a limit check on a valid parameter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum LimitStatus {
    /// Value lies within the limits.
    Nominal,

    /// Value lies outside the limits.
    Alarm,
}

/// Tri-state status of a parameter, as carried in status reports and archives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum ParamStatus {
    Stale,
    Nominal,
    Alarm,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Evaluate a table entry against its limits.
///
/// Invalid entries are reported as `HkError::Stale` whatever their value.
pub fn evaluate(id: ParamId, entry: &TmEntry, limits: &LimitEntry) -> Result<LimitStatus, HkError> {
    if !entry.valid {
        return Err(HkError::Stale(id));
    }

    if limits.contains(entry.value) {
        Ok(LimitStatus::Nominal)
    }
    else {
        Ok(LimitStatus::Alarm)
    }
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ParamStatus {
    /// Fold the result of a limit check into a status.
    ///
    /// Returns `None` for an invalid identifier, which has no status.
    pub fn from_check(result: Result<LimitStatus, HkError>) -> Option<Self> {
        match result {
            Ok(LimitStatus::Nominal) => Some(ParamStatus::Nominal),
            Ok(LimitStatus::Alarm) => Some(ParamStatus::Alarm),
            Err(HkError::Stale(_)) => Some(ParamStatus::Stale),
            Err(_) => None,
        }
    }
}

impl Default for ParamStatus {
    fn default() -> Self {
        ParamStatus::Stale
    }
}
