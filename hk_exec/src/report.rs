//! # HK Report Generation
//!
//! Schedules the periodic housekeeping reports and builds the packets sent to
//! the downlink.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::{debug, info};

use comms_if::tm::{HkSummary, APID_HK_PARAMS, APID_HK_SUMMARY};

use crate::{
    fdir::ModeSource,
    hk::HkService,
    tm_sender::{Downlink, DownlinkError},
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Report interval used until one is commanded.
pub const DEFAULT_REPORT_INTERVAL_MS: u32 = 5000;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Decides when the periodic report is due, from an external millisecond tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReportScheduler {
    interval_ms: u32,
    last_report_ms: u32,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for ReportScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_INTERVAL_MS)
    }
}

impl ReportScheduler {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_report_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Set the interval from a commanded number of seconds.
    ///
    /// An interval of zero makes every call to `run_periodic` due.
    pub fn set_interval_s(&mut self, interval_s: u8) {
        self.interval_ms = u32::from(interval_s) * 1000;
    }

    /// Returns true if a report is due at `now_ms`, in which case `now_ms`
    /// becomes the time of the last report.
    ///
    /// The tick is allowed to wrap.
    pub fn run_periodic(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_report_ms) >= self.interval_ms {
            self.last_report_ms = now_ms;
            true
        }
        else {
            false
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Generate a housekeeping report.
///
/// The summary is sent first, followed by the full parameter packet.
pub fn generate<M, D>(mode_source: &M, hk: &HkService, downlink: &mut D)
    -> Result<(), DownlinkError>
where
    M: ModeSource,
    D: Downlink
{
    let summary = HkSummary::new(mode_source.current_mode());

    info!(
        "HK report: mode {:?}, {} alarms, {} stale",
        summary.mode,
        hk.report().num_alarms,
        hk.report().num_stale
    );

    downlink.send_report(APID_HK_SUMMARY, &summary.to_bytes())?;

    let packet = hk.to_packet();
    debug!("Sending {} byte HK parameter packet", packet.len());
    downlink.send_report(APID_HK_PARAMS, &packet)
}

#[cfg(test)]
mod test {
    use super::*;
    use comms_if::tm::FdirMode;
    use crate::hk::{ParamId, HK_PACKET_SIZE};

    /// Downlink recording every packet sent.
    #[derive(Default)]
    struct RecordingDownlink {
        sent: Vec<(u16, Vec<u8>)>,
        fail: bool,
    }

    impl Downlink for RecordingDownlink {
        fn send_report(&mut self, apid: u16, data: &[u8]) -> Result<(), DownlinkError> {
            if self.fail {
                return Err(DownlinkError::PacketTooLong(data.len(), 0));
            }
            self.sent.push((apid, data.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn test_run_periodic() {
        let mut sched = ReportScheduler::default();
        assert_eq!(sched.interval_ms(), 5000);

        assert!(!sched.run_periodic(0));
        assert!(!sched.run_periodic(4999));
        assert!(sched.run_periodic(5000));
        assert!(!sched.run_periodic(9999));
        assert!(sched.run_periodic(10_001));
    }

    #[test]
    fn test_set_interval() {
        let mut sched = ReportScheduler::default();

        sched.set_interval_s(2);
        assert_eq!(sched.interval_ms(), 2000);
        assert!(sched.run_periodic(2000));

        sched.set_interval_s(255);
        assert_eq!(sched.interval_ms(), 255_000);

        sched.set_interval_s(0);
        assert!(sched.run_periodic(2000));
        assert!(sched.run_periodic(2000));
    }

    #[test]
    fn test_run_periodic_wraps() {
        let mut sched = ReportScheduler::new(1000);

        assert!(sched.run_periodic(u32::MAX - 100));
        assert!(!sched.run_periodic(u32::MAX));
        assert!(!sched.run_periodic(500));
        assert!(sched.run_periodic(899));
    }

    #[test]
    fn test_generate() {
        let mut hk = HkService::new();
        hk.update(ParamId::BattVoltage, 3700, 100).unwrap();

        let mut downlink = RecordingDownlink::default();
        generate(&FdirMode::Safe, &hk, &mut downlink).unwrap();

        assert_eq!(downlink.sent.len(), 2);
        assert_eq!(downlink.sent[0], (APID_HK_SUMMARY, vec![0x01, 0xFF, 0x00, 0x01]));
        assert_eq!(downlink.sent[1].0, APID_HK_PARAMS);
        assert_eq!(downlink.sent[1].1.len(), HK_PACKET_SIZE);
        assert_eq!(downlink.sent[1].1[0..5], [0x00u8, 0x00, 0x0E, 0x74, 0x01]);
    }

    #[test]
    fn test_generate_propagates_downlink_errors() {
        let hk = HkService::new();
        let mut downlink = RecordingDownlink { fail: true, ..Default::default() };

        assert!(generate(&FdirMode::Nominal, &hk, &mut downlink).is_err());
        assert!(downlink.sent.is_empty());
    }
}
