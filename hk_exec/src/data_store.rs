//! # Data Store

use log::{info, warn};

use crate::{hk, report::ReportScheduler};

// ---------------------------------------------------------------------------
// ENUMS
// ---------------------------------------------------------------------------

/// Gives the reason the service has been put into safe mode
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum SafeModeCause {
    LimitAlarm,
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
#[derive(Default)]
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u128,

    /// Session elapsed time
    pub sim_time_s: f64,

    /// Monotonic millisecond tick, wraps at `u32::MAX`
    pub time_ms: u32,

    // Safe mode variables
    /// Determines if the service is in safe mode.
    pub safe: bool,

    /// Gives the reason for the service being in safe mode.
    pub safe_cause: Option<SafeModeCause>,

    // HK
    pub hk: hk::HkService,
    pub hk_input: hk::InputData,
    pub hk_status_rpt: hk::StatusReport,

    // Reporting
    pub report_scheduler: ReportScheduler,

    /// Set when a report has been requested by TC, cleared once generated.
    pub report_requested: bool,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl DataStore {
    /// Puts the service into safe mode with the given cause.
    pub fn make_safe(&mut self, cause: SafeModeCause) {
        if !self.safe {
            warn!("Make safe requested, cause: {:?}", cause);
            self.safe = true;
            self.safe_cause = Some(cause);
        }
    }

    /// Attempts to disable the safe mode by clearing the given cause.
    ///
    /// Returns `Ok(())` if this cause was cleared and safe mode was disabled, or `Err(())`
    /// otherwise. To remove safe mode the provided cause must match the initial reason for safe
    /// mode being enabled.
    ///
    /// If safe mode was not enabled `Ok(())` is returned
    pub fn make_unsafe(&mut self, cause: SafeModeCause) -> Result<(), ()> {
        if !self.safe {
            return Ok(());
        }

        match self.safe_cause {
            Some(root_cause) => {
                if cause == root_cause {
                    self.safe = false;
                    self.safe_cause = None;
                    info!("Make unsafe requested, root cause match, safe mode disabled");
                    Ok(())
                } else {
                    Err(())
                }
            }
            None => Ok(()),
        }
    }

    /// Perform actions required at the start of a cycle.
    ///
    /// Sets the cycle time and clears the HK input.
    pub fn cycle_start(&mut self, elapsed_s: f64) {
        self.sim_time_s = elapsed_s;
        self.time_ms = util::time::seconds_to_ms_tick(elapsed_s);

        self.hk_input = hk::InputData {
            time_ms: self.time_ms,
            samples: Vec::new(),
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_safe_mode() {
        let mut ds = DataStore::default();
        assert_eq!(ds.make_unsafe(SafeModeCause::LimitAlarm), Ok(()));

        ds.make_safe(SafeModeCause::LimitAlarm);
        assert!(ds.safe);
        assert_eq!(ds.safe_cause, Some(SafeModeCause::LimitAlarm));

        assert_eq!(ds.make_unsafe(SafeModeCause::LimitAlarm), Ok(()));
        assert!(!ds.safe);
        assert_eq!(ds.safe_cause, None);
    }

    #[test]
    fn test_cycle_start() {
        let mut ds = DataStore::default();
        ds.hk_input.samples.push(hk::Sample { id: 0, value: 1, timestamp: 1 });

        ds.cycle_start(12.5);

        assert_eq!(ds.time_ms, 12_500);
        assert_eq!(ds.hk_input.time_ms, 12_500);
        assert!(ds.hk_input.samples.is_empty());
    }
}
