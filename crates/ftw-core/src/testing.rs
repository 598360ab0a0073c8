//! Fakes shared by the unit tests

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::Cell;

use embedded_hal::delay::DelayNs;

use crate::network::{Collector, CollectorResponse, RadioError, TransportError, WifiRadio};
use crate::sensors::{AirQualitySensor, ClimateSensor, PressureSensor, SensorError};
use crate::storage::{MemoryStorage, Storage, StorageError};
use crate::time::Clock;

pub const CHECKSUM_ERROR: SensorError = SensorError::ReadFailed {
    sensor: "DHT11",
    operation: "measure",
    details: "checksum mismatch",
};

/// Records every requested wait instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    pub waits_ms: Vec<u32>,
    pub total_ns: u64,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

/// Climate sensor answering from a script, then repeating its last reading.
pub struct ScriptedClimate {
    script: VecDeque<Result<(), SensorError>>,
    pub measurements: usize,
    pub temperature: f32,
    pub humidity: f32,
}

impl ScriptedClimate {
    pub fn new(script: &[Result<(), SensorError>]) -> Self {
        Self {
            script: script.iter().cloned().collect(),
            measurements: 0,
            temperature: 21.5,
            humidity: 48.0,
        }
    }

    pub fn healthy() -> Self {
        Self::new(&[])
    }
}

impl ClimateSensor for ScriptedClimate {
    fn measure(&mut self) -> Result<(), SensorError> {
        self.measurements += 1;
        self.script.pop_front().unwrap_or(Ok(()))
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn humidity(&self) -> f32 {
        self.humidity
    }
}

/// Air-quality sensor returning a fixed ppm and remembering its inputs.
pub struct FixedAirQuality {
    pub ppm: f32,
    pub inputs: Vec<(f32, f32)>,
}

impl FixedAirQuality {
    pub fn new(ppm: f32) -> Self {
        Self {
            ppm,
            inputs: Vec::new(),
        }
    }
}

impl AirQualitySensor for FixedAirQuality {
    fn corrected_ppm(
        &mut self,
        temperature_celsius: f32,
        humidity_percent: f32,
    ) -> Result<f32, SensorError> {
        self.inputs.push((temperature_celsius, humidity_percent));
        Ok(self.ppm)
    }
}

pub struct FixedPressure(pub f32);

impl PressureSensor for FixedPressure {
    fn pressure_hpa(&mut self) -> Result<f32, SensorError> {
        Ok(self.0)
    }
}

pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

/// Clock advancing by one sampling period on every reading.
pub struct TickingClock {
    next: Cell<u64>,
    step: u64,
}

impl TickingClock {
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> u64 {
        let now = self.next.get();
        self.next.set(now + self.step);
        now
    }
}

/// Radio that reports a link after a given number of connectivity polls.
pub struct ScriptedRadio {
    pub active: bool,
    pub activations: usize,
    pub association: Option<(String, String)>,
    pub reject_association: bool,
    pub connected_on_poll: Option<u32>,
    pub polls: u32,
}

impl ScriptedRadio {
    pub fn connecting_on_poll(poll: u32) -> Self {
        Self {
            active: false,
            activations: 0,
            association: None,
            reject_association: false,
            connected_on_poll: Some(poll),
            polls: 0,
        }
    }

    pub fn never_connecting() -> Self {
        Self {
            connected_on_poll: None,
            ..Self::connecting_on_poll(0)
        }
    }
}

impl WifiRadio for ScriptedRadio {
    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self) -> Result<(), RadioError> {
        self.activations += 1;
        self.active = true;
        Ok(())
    }

    fn connect(&mut self, ssid: &str, psk: &str) -> Result<(), RadioError> {
        if self.reject_association {
            return Err(RadioError::Association("authentication rejected"));
        }
        self.association = Some((ssid.to_string(), psk.to_string()));
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        self.polls += 1;
        self.connected_on_poll.is_some_and(|poll| self.polls >= poll)
    }
}

/// Collector answering from a queue of canned responses.
#[derive(Default)]
pub struct ScriptedCollector {
    responses: VecDeque<Result<CollectorResponse, TransportError>>,
    pub bodies: Vec<String>,
}

impl ScriptedCollector {
    pub fn answering(status: u16) -> Self {
        let mut collector = Self::default();
        collector.responses.push_back(Ok(CollectorResponse {
            status,
            body: "ok".to_string(),
        }));
        collector
    }

    pub fn failing(error: TransportError) -> Self {
        let mut collector = Self::default();
        collector.responses.push_back(Err(error));
        collector
    }
}

impl Collector for ScriptedCollector {
    fn endpoint(&self) -> &str {
        "http://collector.test/ws/weather/data"
    }

    fn post_json(&mut self, body: &str) -> Result<CollectorResponse, TransportError> {
        self.bodies.push(body.to_string());
        self.responses
            .pop_front()
            .unwrap_or(Err(TransportError::Failed("no scripted response".to_string())))
    }
}

/// Storage accepting a fixed number of appends before failing.
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub appends_left: usize,
}

impl Storage for FlakyStorage {
    fn read(&mut self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.inner.read(path)
    }

    fn write(&mut self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        self.inner.write(path, contents)
    }

    fn append(&mut self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        if self.appends_left == 0 {
            return Err(StorageError::Io("no space left on device".to_string()));
        }
        self.appends_left -= 1;
        self.inner.append(path, contents)
    }
}
