use log::{error, info, warn};

use super::{
    Absent, AirQualitySensor, Capabilities, ClimateReading, ClimateSensor, PressureSensor,
    SensorError,
};

/// Measurements attempted before a climate sensor is declared missing.
///
/// DHT-class sensors often fail their very first read after power-up.
pub const CLIMATE_PROBE_ATTEMPTS: u8 = 2;

/// Container for the station's sensors
///
/// Holds one optional handle per sensor kind. Handles are decided once, when
/// the bank is built; a kind that is absent then stays absent for the run.
pub struct SensorBank<C, A, P> {
    climate: Option<C>,
    air_quality: Option<A>,
    pressure: Option<P>,
}

impl SensorBank<Absent, Absent, Absent> {
    /// A bank with no sensor installed.
    pub fn empty() -> Self {
        Self {
            climate: None,
            air_quality: None,
            pressure: None,
        }
    }
}

impl<C, A, P> SensorBank<C, A, P>
where
    C: ClimateSensor,
    A: AirQualitySensor,
    P: PressureSensor,
{
    /// Build the bank from whatever sensors came up at boot.
    ///
    /// The climate sensor is probed here: its first measurement is retried
    /// once and the sensor is dropped if the retry fails too. Air-quality and
    /// pressure sensors are expected to have been initialized by their
    /// drivers already.
    pub fn new(climate: Option<C>, air_quality: Option<A>, pressure: Option<P>) -> Self {
        let bank = Self {
            climate: climate.and_then(probe_climate),
            air_quality,
            pressure,
        };

        let caps = bank.capabilities();
        info!(
            "Sensors: climate={} air_quality={} pressure={}",
            caps.climate, caps.air_quality, caps.pressure
        );

        bank
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            climate: self.climate.is_some(),
            air_quality: self.air_quality.is_some(),
            pressure: self.pressure.is_some(),
        }
    }

    /// Measure temperature and humidity.
    ///
    /// A failed measurement is not retried here; it fails the whole cycle.
    pub fn read_climate(&mut self) -> Result<Option<ClimateReading>, SensorError> {
        let Some(sensor) = self.climate.as_mut() else {
            return Ok(None);
        };

        sensor.measure()?;

        Ok(Some(ClimateReading {
            temperature_celsius: sensor.temperature(),
            humidity_percent: sensor.humidity(),
        }))
    }

    /// Read the air-quality sensor, corrected with a fresh climate reading.
    ///
    /// Without a climate reading there is nothing to correct against, which
    /// yields no value rather than an error.
    pub fn read_air_quality(
        &mut self,
        climate: Option<ClimateReading>,
    ) -> Result<Option<f32>, SensorError> {
        let (Some(sensor), Some(climate)) = (self.air_quality.as_mut(), climate) else {
            return Ok(None);
        };

        sensor
            .corrected_ppm(climate.temperature_celsius, climate.humidity_percent)
            .map(Some)
    }

    /// Latest value of the continuously sampling barometer.
    pub fn read_pressure(&mut self) -> Result<Option<f32>, SensorError> {
        match self.pressure.as_mut() {
            Some(sensor) => sensor.pressure_hpa().map(Some),
            None => Ok(None),
        }
    }
}

fn probe_climate<C: ClimateSensor>(mut sensor: C) -> Option<C> {
    for attempt in 1..=CLIMATE_PROBE_ATTEMPTS {
        match sensor.measure() {
            Ok(()) => return Some(sensor),
            Err(e) => warn!(
                "Climate sensor probe {}/{} failed: {}",
                attempt, CLIMATE_PROBE_ATTEMPTS, e
            ),
        }
    }

    error!("Climate sensor not responding, disabled for this run");
    None
}
