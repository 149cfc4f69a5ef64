//! Implementations for the HK service state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::convert::TryFrom;

use log::{debug, warn};
use serde::Serialize;

// Internal
use super::{
    evaluate, serialize,
    HkError, HkParams, LimitEntry, LimitStatus, LimitsTable, ParamId, ParamStatus,
    TelemetryTable, TmEntry,
    HK_PACKET_SIZE, NUM_PARAMS};
use util::{
    params,
    module::State,
    archive::{Archived, Archiver},
    session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Housekeeping service state.
///
/// Owns the telemetry and limits tables. Access is single threaded, a caller
/// sharing the service between threads must lock around it so that a packet is
/// never built from a half updated table.
#[derive(Default)]
pub struct HkService {

    pub(crate) params: HkParams,

    table: TelemetryTable,

    limits: LimitsTable,

    report: StatusReport,
    arch_table: Archiver,

    /// Tick of the last processed input, used to timestamp archives.
    last_proc_ms: u32,
}

/// A single sensor reading to be applied to the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sample {
    /// Raw parameter identifier, validated when the sample is applied.
    pub id: usize,

    pub value: u32,

    /// Tick at which the value was acquired.
    pub timestamp: u32,
}

/// Input data to the HK service.
#[derive(Debug, Clone, Default)]
pub struct InputData {
    /// Current monotonic tick in milliseconds.
    pub time_ms: u32,

    /// New sensor readings acquired this cycle.
    pub samples: Vec<Sample>,
}

/// Status report for HK processing.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize)]
pub struct StatusReport {
    /// Status of each parameter, in ascending identifier order.
    pub status: [ParamStatus; NUM_PARAMS],

    /// Number of parameters in alarm.
    pub num_alarms: usize,

    /// Number of parameters without valid data.
    pub num_stale: usize,

    /// Number of samples rejected for having an invalid identifier.
    pub num_rejected_samples: usize,
}

/// Initialisation errors.
#[derive(Debug, thiserror::Error)]
pub enum HkInitError {
    #[error("Could not load the HK parameters: {0}")]
    ParamLoadError(params::LoadError),

    #[error("Could not create the HK archive: {0}")]
    ArchiveError(String),
}

/// One row of the table archive.
#[derive(Serialize)]
struct TableRecord {
    time_ms: u32,
    param: &'static str,
    value: u32,
    timestamp: u32,
    valid: bool,
    status: ParamStatus,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State for HkService {
    type InitData = &'static str;
    type InitError = HkInitError;

    type InputData = InputData;
    type OutputData = ();
    type StatusReport = StatusReport;
    type ProcError = HkError;

    /// Initialise the HK service.
    ///
    /// Expected init data is the path to the parameter file.
    fn init(&mut self, init_data: Self::InitData, session: &Session)
        -> Result<(), Self::InitError>
    {
        self.params = params::load(init_data)
            .map_err(HkInitError::ParamLoadError)?;

        self.arch_table = Archiver::from_path(session, "hk/table.csv")
            .map_err(|e| HkInitError::ArchiveError(e.to_string()))?;

        self.initialize();
        self.apply_params();

        Ok(())
    }

    /// Apply this cycle's samples then evaluate every parameter.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        let mut report = StatusReport::default();

        for sample in input_data.samples.iter() {
            if let Err(e) = self.update(sample.id, sample.value, sample.timestamp) {
                warn!("Rejected sample {:?}: {}", sample, e);
                report.num_rejected_samples += 1;
            }
        }

        for id in ParamId::ALL.iter() {
            let status = self.status(*id);
            match status {
                ParamStatus::Alarm => report.num_alarms += 1,
                ParamStatus::Stale => report.num_stale += 1,
                ParamStatus::Nominal => ()
            }
            report.status[id.index()] = status;
        }

        self.last_proc_ms = input_data.time_ms;
        self.report = report;

        Ok(((), report))
    }
}

impl Archived for HkService {
    fn write(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        for (id, entry) in self.table.iter() {
            self.arch_table.serialise(TableRecord {
                time_ms: self.last_proc_ms,
                param: id.name(),
                value: entry.value,
                timestamp: entry.timestamp,
                valid: entry.valid,
                status: self.report.status[id.index()],
            })?;
        }

        Ok(())
    }
}

impl HkService {

    /// Create a new service with every parameter invalid and all limits at
    /// `(0, 0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new service with the limits from the given parameters.
    pub fn with_params(params: HkParams) -> Self {
        let mut hk = Self {
            params,
            ..Self::default()
        };
        hk.apply_params();
        hk
    }

    /// Reset the telemetry table to all invalid.
    ///
    /// Limits are kept.
    pub fn initialize(&mut self) {
        self.table.initialize();
        self.report = StatusReport::default();
        debug!("HK table initialised");
    }

    /// Store a new value for a parameter.
    pub fn update<I: Into<usize>>(&mut self, id: I, value: u32, timestamp: u32)
        -> Result<(), HkError>
    {
        self.table.update(id, value, timestamp)
    }

    /// Read a parameter's entry.
    pub fn read<I: Into<usize>>(&self, id: I) -> Result<TmEntry, HkError> {
        self.table.read(id)
    }

    /// Set the limits of a parameter, silently ignored for invalid identifiers.
    pub fn set_limits<I: Into<usize>>(&mut self, id: I, low: u32, high: u32) {
        self.limits.set_limits(id, low, high)
    }

    /// Read a parameter's limits.
    pub fn limits<I: Into<usize>>(&self, id: I) -> Result<LimitEntry, HkError> {
        self.limits.get(id)
    }

    /// Check a parameter against its limits.
    ///
    /// The identifier is validated before freshness, so an invalid identifier
    /// is always `InvalidId` and never `Stale`.
    pub fn check_limits<I: Into<usize>>(&self, id: I) -> Result<LimitStatus, HkError> {
        let id = ParamId::try_from(id.into())?;
        let entry = self.table.read(id)?;
        let limits = self.limits.get(id)?;

        evaluate(id, &entry, &limits)
    }

    /// Tri-state status of a parameter.
    pub fn status(&self, id: ParamId) -> ParamStatus {
        ParamStatus::from_check(self.check_limits(id))
            .unwrap_or_default()
    }

    /// Pack the table into `buffer`, returning the number of bytes written.
    pub fn serialize(&self, buffer: &mut [u8]) -> Result<usize, HkError> {
        serialize(&self.table, buffer)
    }

    /// Build the full downlink packet.
    pub fn to_packet(&self) -> [u8; HK_PACKET_SIZE] {
        let mut packet = [0u8; HK_PACKET_SIZE];

        // The packet is exactly the required size so this can't fail
        if let Err(e) = self.serialize(&mut packet) {
            warn!("Could not serialize the HK table: {}", e);
        }

        packet
    }

    /// Status report from the last call to `proc`.
    pub fn report(&self) -> &StatusReport {
        &self.report
    }

    /// Apply the limits from the parameters.
    fn apply_params(&mut self) {
        for l in self.params.limits.iter() {
            self.limits.set_limits(l.param, l.low, l.high);
            debug!("{} limits set to [{}, {}]", l.param, l.low, l.high);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hk::LimitParams;

    fn sample(id: ParamId, value: u32, timestamp: u32) -> Sample {
        Sample { id: id.index(), value, timestamp }
    }

    #[test]
    fn test_initial_state_is_invalid() {
        let hk = HkService::new();

        for id in ParamId::ALL.iter() {
            assert_eq!(hk.read(*id).map(|e| e.valid), Ok(false));
        }
    }

    #[test]
    fn test_update_and_read_success() -> Result<(), HkError> {
        let mut hk = HkService::new();

        hk.update(ParamId::BattVoltage, 3700, 500)?;

        assert_eq!(hk.read(ParamId::BattVoltage)?, TmEntry {
            value: 3700,
            timestamp: 500,
            valid: true
        });

        Ok(())
    }

    #[test]
    fn test_rejects_invalid_ids() {
        let mut hk = HkService::new();

        assert_eq!(hk.update(NUM_PARAMS + 1, 999, 10), Err(HkError::InvalidId(NUM_PARAMS + 1)));
        assert_eq!(hk.read(NUM_PARAMS), Err(HkError::InvalidId(NUM_PARAMS)));
        assert_eq!(hk.check_limits(NUM_PARAMS), Err(HkError::InvalidId(NUM_PARAMS)));
        assert_eq!(hk.limits(NUM_PARAMS), Err(HkError::InvalidId(NUM_PARAMS)));

        assert!(hk.to_packet().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_stale_data_is_not_nominal() {
        let hk = HkService::new();

        // Default value 0 against default limits (0, 0) would be nominal, and
        // against any other limits an alarm, but it has never been sampled.
        assert_eq!(
            hk.check_limits(ParamId::Altitude),
            Err(HkError::Stale(ParamId::Altitude))
        );
    }

    #[test]
    fn test_difference_between_nominal_and_stale() -> Result<(), HkError> {
        let mut hk = HkService::new();

        hk.set_limits(ParamId::BattVoltage, 3000, 4200);

        // Sensor disconnected
        assert_eq!(
            hk.check_limits(ParamId::BattVoltage),
            Err(HkError::Stale(ParamId::BattVoltage))
        );
        assert_ne!(
            hk.check_limits(ParamId::BattVoltage),
            hk.check_limits(NUM_PARAMS)
        );

        // Sensor connected and nominal
        hk.update(ParamId::BattVoltage, 3700, 1000)?;
        assert_eq!(hk.check_limits(ParamId::BattVoltage)?, LimitStatus::Nominal);

        // Sensor connected but under voltage
        hk.update(ParamId::BattVoltage, 2500, 1100)?;
        assert_eq!(hk.check_limits(ParamId::BattVoltage)?, LimitStatus::Alarm);

        Ok(())
    }

    #[test]
    fn test_default_limits_alarm_on_nonzero() -> Result<(), HkError> {
        let mut hk = HkService::new();

        hk.update(ParamId::CpuLoad, 0, 1)?;
        assert_eq!(hk.check_limits(ParamId::CpuLoad)?, LimitStatus::Nominal);

        hk.update(ParamId::CpuLoad, 1, 2)?;
        assert_eq!(hk.check_limits(ParamId::CpuLoad)?, LimitStatus::Alarm);

        Ok(())
    }

    #[test]
    fn test_initialize_keeps_limits() -> Result<(), HkError> {
        let mut hk = HkService::new();
        hk.set_limits(ParamId::BattTemp, 0, 45);
        hk.update(ParamId::BattTemp, 25, 10)?;

        hk.initialize();
        hk.initialize();

        assert!(!hk.read(ParamId::BattTemp)?.valid);
        assert_eq!(hk.limits(ParamId::BattTemp)?, LimitEntry { low: 0, high: 45 });
        assert_eq!(hk.to_packet(), [0u8; HK_PACKET_SIZE]);

        Ok(())
    }

    #[test]
    fn test_to_packet() -> Result<(), HkError> {
        let mut hk = HkService::new();
        hk.update(ParamId::BattVoltage, 3700, 100)?;
        hk.update(ParamId::BattTemp, 25, 100)?;

        let packet = hk.to_packet();
        assert_eq!(packet[0..10], [0x00u8, 0x00, 0x0E, 0x74, 0x01, 0x00, 0x00, 0x00, 0x19, 0x01]);

        let mut small = [0u8; 8];
        assert_eq!(
            hk.serialize(&mut small),
            Err(HkError::BufferTooSmall { required: HK_PACKET_SIZE, available: 8 })
        );

        Ok(())
    }

    #[test]
    fn test_with_params() -> Result<(), HkError> {
        let hk = HkService::with_params(HkParams {
            limits: vec![
                LimitParams { param: ParamId::Altitude, low: 350, high: 450 },
            ]
        });

        assert_eq!(hk.limits(ParamId::Altitude)?, LimitEntry { low: 350, high: 450 });
        assert_eq!(hk.limits(ParamId::CpuLoad)?, LimitEntry::default());

        Ok(())
    }

    #[test]
    fn test_proc() {
        let mut hk = HkService::with_params(HkParams {
            limits: vec![
                LimitParams { param: ParamId::BattVoltage, low: 3000, high: 4200 },
                LimitParams { param: ParamId::BattTemp, low: 0, high: 45 },
            ]
        });

        let input = InputData {
            time_ms: 200,
            samples: vec![
                sample(ParamId::BattVoltage, 3700, 200),
                sample(ParamId::BattTemp, 60, 200),
                Sample { id: NUM_PARAMS + 3, value: 1, timestamp: 200 },
            ]
        };

        let ((), report) = hk.proc(&input).unwrap();

        assert_eq!(report.status, [
            ParamStatus::Nominal,
            ParamStatus::Alarm,
            ParamStatus::Stale,
            ParamStatus::Stale,
            ParamStatus::Stale,
        ]);
        assert_eq!(report.num_alarms, 1);
        assert_eq!(report.num_stale, 3);
        assert_eq!(report.num_rejected_samples, 1);
        assert_eq!(hk.report(), &report);

        // Without session the archive is discarded
        assert!(hk.write().is_ok());
    }
}
