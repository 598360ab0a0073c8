//! BMP280 barometer wrapper.
//!
//! Uses the bme280-rs crate which is compatible with BMP280.
//! The sensor is left in normal mode so the pressure register is refreshed
//! continuously and reads never trigger a conversion.

use bme280_rs::{Bme280, Configuration, Oversampling, SensorMode};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{error, info};

use super::{PressureSensor, SensorError};

/// BMP280 I2C address with SDO pulled low
pub const BMP280_ADDRESS: u8 = 0x76;

pub struct Bmp280Sensor<I2C, D> {
    sensor: Bme280<I2C, D>,
}

impl<I2C: I2c, D: DelayNs> Bmp280Sensor<I2C, D> {
    /// Initialize the sensor and switch it to continuous sampling.
    pub fn new(i2c: I2C, address: u8, delay: D) -> Result<Self, SensorError> {
        let mut sensor = Bme280::new_with_address(i2c, address, delay);

        sensor.init().map_err(|e| {
            error!("BMP280 initialization failed: {:?}", e);
            SensorError::InitializationFailed {
                sensor: "BMP280",
                details: "chip did not answer on I2C",
            }
        })?;

        let config = Configuration::default()
            .with_temperature_oversampling(Oversampling::Oversample1)
            .with_pressure_oversampling(Oversampling::Oversample1)
            .with_sensor_mode(SensorMode::Normal);

        sensor.set_sampling_configuration(config).map_err(|e| {
            error!("BMP280 configuration failed: {:?}", e);
            SensorError::InitializationFailed {
                sensor: "BMP280",
                details: "failed to enter normal mode",
            }
        })?;

        info!("BMP280 initialized in normal mode");

        Ok(Self { sensor })
    }
}

impl<I2C: I2c, D: DelayNs> PressureSensor for Bmp280Sensor<I2C, D> {
    fn pressure_hpa(&mut self) -> Result<f32, SensorError> {
        let pressure_pa = self
            .sensor
            .read_pressure()
            .map_err(|e| {
                error!("BMP280 pressure read failed: {:?}", e);
                SensorError::ReadFailed {
                    sensor: "BMP280",
                    operation: "read pressure",
                    details: "I2C communication error",
                }
            })?
            .ok_or(SensorError::ReadFailed {
                sensor: "BMP280",
                operation: "read pressure",
                details: "pressure sampling disabled",
            })?;

        Ok(pressure_pa / 100.0)
    }
}
