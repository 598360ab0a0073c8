//! Telemetry record and its wire form
//!
//! A [`TelemetryRecord`] keeps absent readings as `None`. The lossy
//! substitution of absent readings by `0` only happens when the record is
//! rendered into its [`WireForm`], which is shared by the HTTP body and the
//! fallback log line.

use alloc::string::{String, ToString};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::sensors::{AirQualitySensor, ClimateSensor, PressureSensor, SensorBank, SensorError};

/// Measurements captured at one sampling instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetryRecord {
    pub station_id: u32,
    pub temperature_celsius: Option<f32>,
    pub humidity_percent: Option<f32>,
    pub air_quality_ppm: Option<f32>,
    pub pressure_hpa: Option<f32>,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
}

impl TelemetryRecord {
    pub fn new(station_id: u32) -> Self {
        Self {
            station_id,
            ..Self::default()
        }
    }

    /// Overwrite every reading with a fresh sample taken at `now`.
    ///
    /// Climate is read first since the air-quality correction needs it, then
    /// air quality, then pressure. Absent sensors leave their fields `None`;
    /// only a failing measurement of a present sensor is an error.
    pub fn collect<C, A, P>(
        &mut self,
        sensors: &mut SensorBank<C, A, P>,
        now: u64,
    ) -> Result<(), SensorError>
    where
        C: ClimateSensor,
        A: AirQualitySensor,
        P: PressureSensor,
    {
        self.timestamp = now;
        self.temperature_celsius = None;
        self.humidity_percent = None;
        self.air_quality_ppm = None;
        self.pressure_hpa = None;

        let climate = sensors.read_climate()?;
        if let Some(climate) = climate {
            self.temperature_celsius = Some(climate.temperature_celsius);
            self.humidity_percent = Some(climate.humidity_percent);
        }

        self.air_quality_ppm = sensors.read_air_quality(climate)?;
        self.pressure_hpa = sensors.read_pressure()?;

        debug!("Collected {:?}", self);
        Ok(())
    }

    /// Render the record for transport and logging.
    ///
    /// Absent readings become `0`, indistinguishable from a real zero.
    pub fn to_wire_form(&self) -> WireForm {
        WireForm {
            weather_station_id: self.station_id.to_string(),
            temperature_celsius: self.temperature_celsius.unwrap_or(0.0),
            air_pressure_hpa: self.pressure_hpa.unwrap_or(0.0),
            air_quality_ppm: self.air_quality_ppm.unwrap_or(0.0),
            humidity_percent: self.humidity_percent.unwrap_or(0.0),
            timestamp: self.timestamp.to_string(),
        }
    }
}

/// Body of a collector request and content of a fallback log line.
///
/// Field order is part of the format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireForm {
    pub weather_station_id: String,
    pub temperature_celsius: f32,
    pub air_pressure_hpa: f32,
    pub air_quality_ppm: f32,
    pub humidity_percent: f32,
    pub timestamp: String,
}

impl WireForm {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
