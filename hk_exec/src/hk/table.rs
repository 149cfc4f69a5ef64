//! Telemetry table, the store of the latest value of every parameter

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::convert::TryFrom;

use log::trace;
use serde::Serialize;

use super::{HkError, ParamId, NUM_PARAMS};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A single entry in the telemetry table.
///
/// When `valid` is false `value` and `timestamp` carry no meaning.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize)]
pub struct TmEntry {
    /// The measured value, in the parameter's units.
    pub value: u32,

    /// Tick at which the value was last updated.
    pub timestamp: u32,

    /// True once the parameter has been updated since the last initialisation.
    pub valid: bool,
}

/// Table holding one `TmEntry` per parameter.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TelemetryTable {
    entries: [TmEntry; NUM_PARAMS],
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for TelemetryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTable {
    /// Create a new table with every entry invalid.
    pub fn new() -> Self {
        Self {
            entries: [TmEntry::default(); NUM_PARAMS],
        }
    }

    /// Reset every entry to zero and invalid.
    pub fn initialize(&mut self) {
        self.entries = [TmEntry::default(); NUM_PARAMS];
    }

    /// Overwrite the value and timestamp of a parameter and mark it valid.
    pub fn update<I: Into<usize>>(
        &mut self,
        id: I,
        value: u32,
        timestamp: u32
    ) -> Result<(), HkError> {
        let id = ParamId::try_from(id.into())?;

        trace!("{} <- {} @ {}", id, value, timestamp);

        self.entries[id.index()] = TmEntry {
            value,
            timestamp,
            valid: true,
        };

        Ok(())
    }

    /// Get a copy of a parameter's entry.
    ///
    /// Invalid entries are returned as well, check `TmEntry::valid`.
    pub fn read<I: Into<usize>>(&self, id: I) -> Result<TmEntry, HkError> {
        let id = ParamId::try_from(id.into())?;
        Ok(self.entries[id.index()])
    }

    /// All entries in ascending parameter order.
    pub fn entries(&self) -> &[TmEntry; NUM_PARAMS] {
        &self.entries
    }

    /// Iterate over the entries alongside their identifiers.
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, &TmEntry)> {
        ParamId::ALL.iter().copied().zip(self.entries.iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_initial_state_is_invalid() {
        let table = TelemetryTable::new();

        for id in ParamId::ALL.iter() {
            let entry = table.read(*id).unwrap();
            assert!(!entry.valid);
            assert_eq!(entry, TmEntry::default());
        }
    }

    #[test]
    fn test_update_and_read() -> Result<(), HkError> {
        let mut table = TelemetryTable::new();

        for (i, id) in ParamId::ALL.iter().enumerate() {
            let value = 1000 * i as u32 + 7;
            table.update(*id, value, 500 + i as u32)?;

            assert_eq!(table.read(*id)?, TmEntry {
                value,
                timestamp: 500 + i as u32,
                valid: true
            });
        }

        // Latest write wins, even going back in time
        table.update(ParamId::BattVoltage, 3700, 500)?;
        table.update(ParamId::BattVoltage, 2500, 100)?;
        assert_eq!(table.read(0usize)?, TmEntry { value: 2500, timestamp: 100, valid: true });

        Ok(())
    }

    #[test]
    fn test_rejects_invalid_ids() {
        let mut table = TelemetryTable::new();
        table.update(ParamId::CpuLoad, 42, 10).unwrap();
        let before = table.clone();

        assert_eq!(table.update(NUM_PARAMS, 999, 10), Err(HkError::InvalidId(NUM_PARAMS)));
        assert_eq!(
            table.update(NUM_PARAMS + 1, 999, 10),
            Err(HkError::InvalidId(NUM_PARAMS + 1))
        );
        assert_eq!(table.read(NUM_PARAMS), Err(HkError::InvalidId(NUM_PARAMS)));
        assert_eq!(table.read(usize::MAX), Err(HkError::InvalidId(usize::MAX)));

        assert_eq!(table, before);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut table = TelemetryTable::new();
        table.update(ParamId::Altitude, 410, 20).unwrap();
        table.update(ParamId::BattTemp, 25, 20).unwrap();

        table.initialize();
        let once = table.clone();
        table.initialize();

        assert_eq!(table, once);
        assert_eq!(table, TelemetryTable::new());
        assert!(table.iter().all(|(_, e)| !e.valid));
    }
}
