//! Limits table, holding the safe range of every parameter

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::convert::TryFrom;

use log::debug;
use serde::{Serialize, Deserialize};

use super::{HkError, ParamId, NUM_PARAMS};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Inclusive bounds of a parameter.
///
/// No ordering is enforced between `low` and `high`, limits with `low > high`
/// reject every value.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LimitEntry {
    pub low: u32,
    pub high: u32,
}

/// Table holding one `LimitEntry` per parameter.
///
/// Unset limits are `(0, 0)`, so any nonzero value is out of limits.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct LimitsTable {
    entries: [LimitEntry; NUM_PARAMS],
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LimitEntry {
    /// Returns true if `value` lies within `[low, high]`.
    pub fn contains(&self, value: u32) -> bool {
        value >= self.low && value <= self.high
    }
}

impl LimitsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite both bounds of a parameter.
    ///
    /// Limits usually come from uplinked data, an invalid `id` is ignored
    /// without raising an error.
    pub fn set_limits<I: Into<usize>>(&mut self, id: I, low: u32, high: u32) {
        match ParamId::try_from(id.into()) {
            Ok(id) => self.entries[id.index()] = LimitEntry { low, high },
            Err(e) => debug!("Ignoring limits [{}, {}]: {}", low, high, e),
        }
    }

    /// Get a copy of a parameter's limits.
    pub fn get<I: Into<usize>>(&self, id: I) -> Result<LimitEntry, HkError> {
        let id = ParamId::try_from(id.into())?;
        Ok(self.entries[id.index()])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_limits_are_zero() {
        let limits = LimitsTable::new();

        for id in ParamId::ALL.iter() {
            let entry = limits.get(*id).unwrap();
            assert_eq!(entry, LimitEntry { low: 0, high: 0 });
            assert!(entry.contains(0));
            assert!(!entry.contains(1));
        }
    }

    #[test]
    fn test_set_limits() {
        let mut limits = LimitsTable::new();

        limits.set_limits(ParamId::BattVoltage, 3000, 4200);
        limits.set_limits(ParamId::BattVoltage, 3100, 4100);
        assert_eq!(limits.get(ParamId::BattVoltage), Ok(LimitEntry { low: 3100, high: 4100 }));

        // Other entries are untouched
        assert_eq!(limits.get(ParamId::BattTemp), Ok(LimitEntry::default()));

        // Inverted limits are accepted as-is
        limits.set_limits(ParamId::CpuLoad, 90, 10);
        let inverted = limits.get(ParamId::CpuLoad).unwrap();
        assert_eq!(inverted, LimitEntry { low: 90, high: 10 });
        assert!(!inverted.contains(50));
        assert!(!inverted.contains(10));
        assert!(!inverted.contains(90));
    }

    #[test]
    fn test_invalid_id_is_silent_noop() {
        let mut limits = LimitsTable::new();
        limits.set_limits(ParamId::Altitude, 300, 500);
        let before = limits.clone();

        limits.set_limits(NUM_PARAMS, 1, 2);
        limits.set_limits(usize::MAX, 1, 2);

        assert_eq!(limits, before);
        assert_eq!(limits.get(NUM_PARAMS), Err(HkError::InvalidId(NUM_PARAMS)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let entry = LimitEntry { low: 3000, high: 4200 };
        assert!(entry.contains(3000));
        assert!(entry.contains(4200));
        assert!(!entry.contains(2999));
        assert!(!entry.contains(4201));
    }
}
