//! Sensor traits and the station's sensor bank
//!
//! Every physical sensor kind is reached through a narrow trait. The
//! [`SensorBank`] owns at most one handle per kind; a kind whose sensor is not
//! installed (or failed to come up at boot) stays absent for the whole run and
//! every read of it yields `None`.

mod bank;
#[cfg(feature = "sensor-bmp280")]
mod bmp280;
mod mq135;

pub use bank::*;
#[cfg(feature = "sensor-bmp280")]
pub use bmp280::{BMP280_ADDRESS, Bmp280Sensor};
pub use mq135::{AnalogInput, Mq135, correction_factor};

use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    #[error("{sensor} initialization failed: {details}")]
    InitializationFailed {
        sensor: &'static str,
        details: &'static str,
    },
    #[error("{sensor} failed to {operation}: {details}")]
    ReadFailed {
        sensor: &'static str,
        operation: &'static str,
        details: &'static str,
    },
}

/// Combined temperature and relative humidity sensor (DHT11 class).
pub trait ClimateSensor {
    /// Trigger a physical measurement cycle.
    ///
    /// The results are read back through [`temperature`](Self::temperature)
    /// and [`humidity`](Self::humidity). A checksum or framing error surfaces
    /// here.
    fn measure(&mut self) -> Result<(), SensorError>;

    /// Temperature of the last measurement in °C.
    fn temperature(&self) -> f32;

    /// Relative humidity of the last measurement in %.
    fn humidity(&self) -> f32;
}

/// Gas sensor producing a temperature/humidity corrected concentration.
pub trait AirQualitySensor {
    /// Sample the sensor and convert the reading to ppm, correcting the
    /// baseline with the given ambient conditions.
    fn corrected_ppm(
        &mut self,
        temperature_celsius: f32,
        humidity_percent: f32,
    ) -> Result<f32, SensorError>;
}

/// Barometer running in continuous ("normal") sampling mode.
pub trait PressureSensor {
    /// Latest pressure sampled by the device, in hPa.
    ///
    /// Does not trigger a conversion; the device updates the value on its own.
    fn pressure_hpa(&mut self) -> Result<f32, SensorError>;
}

/// Sensor type for a kind that is never installed.
///
/// Uninhabited, so an `Option<Absent>` can only ever be `None`.
#[derive(Debug)]
pub enum Absent {}

impl ClimateSensor for Absent {
    fn measure(&mut self) -> Result<(), SensorError> {
        match *self {}
    }

    fn temperature(&self) -> f32 {
        match *self {}
    }

    fn humidity(&self) -> f32 {
        match *self {}
    }
}

impl AirQualitySensor for Absent {
    fn corrected_ppm(&mut self, _: f32, _: f32) -> Result<f32, SensorError> {
        match *self {}
    }
}

impl PressureSensor for Absent {
    fn pressure_hpa(&mut self) -> Result<f32, SensorError> {
        match *self {}
    }
}

/// Temperature and humidity captured by one climate measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    pub temperature_celsius: f32,
    pub humidity_percent: f32,
}

/// Which sensor kinds are present in a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub climate: bool,
    pub air_quality: bool,
    pub pressure: bool,
}
