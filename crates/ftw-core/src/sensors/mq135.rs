//! MQ135 gas sensor on an analog input
//!
//! The sensor's resistance drops as the gas concentration rises. The raw
//! resistance is corrected for ambient temperature and humidity, then mapped
//! onto the CO2-equivalent ppm curve from the datasheet.

use libm::powf;

use super::{AirQualitySensor, SensorError};

/// Analog input scaled to the full `0..=65535` range.
pub trait AnalogInput {
    fn read_u16(&mut self) -> Result<u16, SensorError>;
}

/// Load resistance on the breakout board, in kΩ.
const RLOAD_KOHM: f32 = 10.0;
/// Sensor resistance in clean air at atmospheric CO2 level, in kΩ.
const RZERO_KOHM: f32 = 76.63;

// ppm = PARA * (R / R0) ^ -PARB
const PARA: f32 = 116.602_07;
const PARB: f32 = 2.769_035;

// Temperature/humidity dependency, fitted on the datasheet curves
const CORA: f32 = 0.000_35;
const CORB: f32 = 0.027_18;
const CORC: f32 = 1.395_38;
const CORD: f32 = 0.001_8;
const CORE: f32 = -0.003_333_333;
const CORF: f32 = -0.001_923_077;
const CORG: f32 = 1.130_128_2;

const ADC_FULL_SCALE: f32 = 65535.0;

/// Factor the measured resistance is divided by for the given conditions.
pub fn correction_factor(temperature_celsius: f32, humidity_percent: f32) -> f32 {
    let t = temperature_celsius;
    let h = humidity_percent;

    if t < 20.0 {
        CORA * t * t - CORB * t + CORC - (h - 33.0) * CORD
    } else {
        CORE * t + CORF * h + CORG
    }
}

pub struct Mq135<A> {
    adc: A,
}

impl<A: AnalogInput> Mq135<A> {
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    fn resistance_kohm(&mut self) -> Result<f32, SensorError> {
        let raw = self.adc.read_u16()?;

        // Both rails put the divider out of its usable range.
        if raw == 0 || raw == u16::MAX {
            return Err(SensorError::ReadFailed {
                sensor: "MQ135",
                operation: "read gas resistance",
                details: "ADC reading at rail",
            });
        }

        Ok((ADC_FULL_SCALE / f32::from(raw) - 1.0) * RLOAD_KOHM)
    }
}

impl<A: AnalogInput> AirQualitySensor for Mq135<A> {
    fn corrected_ppm(
        &mut self,
        temperature_celsius: f32,
        humidity_percent: f32,
    ) -> Result<f32, SensorError> {
        let resistance = self.resistance_kohm()?
            / correction_factor(temperature_celsius, humidity_percent);

        Ok(PARA * powf(resistance / RZERO_KOHM, -PARB))
    }
}
