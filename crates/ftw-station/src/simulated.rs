//! Synthetic sensors for running the station without hardware
//!
//! Readings follow slow sinusoids of the time since the sensor was created, so
//! consecutive cycles produce plausible, slowly drifting values.

use std::time::Instant;

use ftw_core::sensors::{AnalogInput, ClimateSensor, PressureSensor, SensorError};

/// Simulated DHT11: temperature and humidity.
pub struct SimulatedClimate {
    started: Instant,
    temperature: f32,
    humidity: f32,
}

impl SimulatedClimate {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            temperature: 0.0,
            humidity: 0.0,
        }
    }
}

impl Default for SimulatedClimate {
    fn default() -> Self {
        Self::new()
    }
}

impl ClimateSensor for SimulatedClimate {
    fn measure(&mut self) -> Result<(), SensorError> {
        let t = self.started.elapsed().as_secs_f64();

        // 14-22 °C with a slow drift
        self.temperature = (18.0 + 4.0 * (t / 3600.0).sin() + 0.5 * (t / 370.0).cos()) as f32;

        // 45-75 %
        self.humidity = (60.0 + 12.0 * (t / 5400.0).sin() + 3.0 * (t / 230.0).cos()) as f32;

        Ok(())
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn humidity(&self) -> f32 {
        self.humidity
    }
}

/// Simulated MQ135 divider output, around the clean-air resistance.
pub struct SimulatedGasAdc {
    started: Instant,
}

impl SimulatedGasAdc {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SimulatedGasAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogInput for SimulatedGasAdc {
    fn read_u16(&mut self) -> Result<u16, SensorError> {
        let t = self.started.elapsed().as_secs_f64();

        // 7565 is the reading at R = R0 with a 10 kΩ load.
        let raw = 7565.0 + 600.0 * (t / 900.0).sin() + 80.0 * (t / 61.0).cos();

        Ok(raw.clamp(1.0, 65534.0) as u16)
    }
}

/// Simulated BMP280 in normal mode.
pub struct SimulatedBarometer {
    started: Instant,
}

impl SimulatedBarometer {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SimulatedBarometer {
    fn default() -> Self {
        Self::new()
    }
}

impl PressureSensor for SimulatedBarometer {
    fn pressure_hpa(&mut self) -> Result<f32, SensorError> {
        let t = self.started.elapsed().as_secs_f64();
        Ok((1013.25 + 8.0 * (t / 7200.0).sin()) as f32)
    }
}
