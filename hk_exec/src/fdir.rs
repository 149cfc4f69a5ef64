//! # Fault Detection, Isolation and Recovery
//!
//! Supplies the current mode folded into HK reports, and puts the service into
//! safe mode while a parameter is in alarm.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::warn;

use comms_if::tm::FdirMode;

use crate::data_store::{DataStore, SafeModeCause};
use crate::hk::{ParamId, ParamStatus};

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A source of the current FDIR mode.
pub trait ModeSource {
    fn current_mode(&self) -> FdirMode;
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl ModeSource for FdirMode {
    fn current_mode(&self) -> FdirMode {
        *self
    }
}

impl ModeSource for DataStore {
    fn current_mode(&self) -> FdirMode {
        match self.safe {
            true => FdirMode::Safe,
            false => FdirMode::Nominal
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Update the safe mode from the latest HK status report.
///
/// Any parameter in alarm makes the service safe, once no parameter is in
/// alarm the limit alarm cause is cleared. Stale parameters are not faults.
pub fn assess(ds: &mut DataStore) {
    let alarms: Vec<ParamId> = ParamId::ALL.iter()
        .copied()
        .filter(|id| ds.hk_status_rpt.status[id.index()] == ParamStatus::Alarm)
        .collect();

    if alarms.is_empty() {
        ds.make_unsafe(SafeModeCause::LimitAlarm).ok();
    }
    else {
        if !ds.safe {
            for id in alarms.iter() {
                let entry = ds.hk.read(*id);
                warn!("{} out of limits: {:?}", id, entry);
            }
        }
        ds.make_safe(SafeModeCause::LimitAlarm);
    }
}
