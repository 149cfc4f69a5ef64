//! # Telecommand processor module
//!
//! The telecommand processor handles uplinked HK payloads coming from any
//! source.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, warn};

// Internal
use comms_if::tc::{HkTc, TcParseError};
use crate::data_store::DataStore;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Execute an uplinked telecommand payload.
///
/// Mutates the datastore to send commands to different modules. Malformed or
/// unknown payloads are logged and dropped, they never stop the exec.
pub fn exec(ds: &mut DataStore, payload: &[u8]) {

    let tc = match HkTc::from_bytes(payload) {
        Ok(tc) => tc,
        Err(TcParseError::Empty) => {
            debug!("Ignoring empty TC payload");
            return
        },
        Err(e) => {
            warn!("HK Error: {}", e);
            return
        }
    };

    debug!("Recieved {:?} command", tc);

    // Handle different Tcs
    match tc {
        HkTc::SetInterval { interval_s } => {
            ds.report_scheduler.set_interval_s(interval_s);
            info!("HK: Interval updated to {} ms", ds.report_scheduler.interval_ms());
        },
        HkTc::ForceReport => {
            info!("HK: Manual report requested");
            ds.report_requested = true;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_set_interval() {
        let mut ds = DataStore::default();

        exec(&mut ds, &HkTc::SetInterval { interval_s: 10 }.to_bytes());
        assert_eq!(ds.report_scheduler.interval_ms(), 10_000);
        assert!(!ds.report_requested);

        // Missing argument leaves the interval unchanged
        exec(&mut ds, &[0x01]);
        assert_eq!(ds.report_scheduler.interval_ms(), 10_000);
    }

    #[test]
    fn test_force_report() {
        let mut ds = DataStore::default();

        exec(&mut ds, &[0x02]);
        assert!(ds.report_requested);
    }

    #[test]
    fn test_unknown_and_empty_ignored() {
        let mut ds = DataStore::default();
        let interval = ds.report_scheduler.interval_ms();

        exec(&mut ds, &[]);
        exec(&mut ds, &[0xEE, 0x05]);

        assert_eq!(ds.report_scheduler.interval_ms(), interval);
        assert!(!ds.report_requested);
    }
}
