//! # Simulated sensors
//!
//! Provides HK samples when no real sensor suite is attached. Every sensor
//! follows a sine wave around its nominal value.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

use crate::hk::{ParamId, Sample};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters of one simulated sensor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSensorParams {
    /// The parameter measured by this sensor.
    pub param: ParamId,

    /// Centre value of the signal.
    pub nominal: f64,

    /// Amplitude of the signal around `nominal`.
    #[serde(default)]
    pub amplitude: f64,

    /// Period of the signal, a non-positive period gives a constant signal.
    ///
    /// Units: seconds
    #[serde(default)]
    pub period_s: f64,

    /// Time before the sensor produces its first sample.
    ///
    /// Units: seconds
    #[serde(default)]
    pub start_delay_s: f64,
}

/// Suite of simulated sensors.
#[derive(Debug, Clone, Default)]
pub struct SensorSim {
    sensors: Vec<SimSensorParams>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SensorSim {
    pub fn new(sensors: Vec<SimSensorParams>) -> Self {
        Self { sensors }
    }

    /// Sample every started sensor at `time_s`, stamping the samples with `time_ms`.
    pub fn sample(&self, time_s: f64, time_ms: u32) -> Vec<Sample> {
        self.sensors.iter()
            .filter(|s| time_s >= s.start_delay_s)
            .map(|s| Sample {
                id: s.param.index(),
                value: s.value_at(time_s),
                timestamp: time_ms,
            })
            .collect()
    }
}

impl SimSensorParams {
    /// Value of the signal at `time_s`, saturated to the u32 range.
    pub fn value_at(&self, time_s: f64) -> u32 {
        let v = if self.period_s > 0.0 {
            self.nominal
                + self.amplitude * (std::f64::consts::TAU * time_s / self.period_s).sin()
        }
        else {
            self.nominal
        };

        // Float to int casts saturate, negative values give 0
        v.round() as u32
    }
}
