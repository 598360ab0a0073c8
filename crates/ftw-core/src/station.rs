//! Main sampling cycle
//!
//! A [`Station`] owns the record, the sensors, the delivery router and the
//! clock. Each cycle it collects, delivers, then sleeps for
//! [`SAMPLE_INTERVAL_MS`]. There is no jitter and no drift correction: the
//! period is the sleep plus however long the cycle itself took.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use log::{debug, error, info};
use thiserror_no_std::Error;

use crate::config::StationConfig;
use crate::network::{Collector, Delivery, DeliveryRouter};
use crate::sensors::{AirQualitySensor, ClimateSensor, PressureSensor, SensorBank, SensorError};
use crate::storage::{Storage, StorageError};
use crate::telemetry::TelemetryRecord;
use crate::time::Clock;

/// Sleep between the end of one cycle and the start of the next.
pub const SAMPLE_INTERVAL_MS: u32 = 60_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StationError {
    #[error("durable log unavailable: {0}")]
    Storage(StorageError),
}

/// What happened to one cycle's record.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Delivered(Delivery),
    /// A present sensor failed to measure; nothing was sent or logged.
    Skipped(SensorError),
}

pub struct Station<C, A, P, K, S, T> {
    record: TelemetryRecord,
    sensors: SensorBank<C, A, P>,
    router: DeliveryRouter<K, S>,
    clock: T,
}

impl<C, A, P, K, S, T> Station<C, A, P, K, S, T>
where
    C: ClimateSensor,
    A: AirQualitySensor,
    P: PressureSensor,
    K: Collector,
    S: Storage,
    T: Clock,
{
    pub fn new(
        config: &StationConfig,
        sensors: SensorBank<C, A, P>,
        router: DeliveryRouter<K, S>,
        clock: T,
    ) -> Self {
        Self {
            record: TelemetryRecord::new(config.id),
            sensors,
            router,
            clock,
        }
    }

    /// Collect one record and route it.
    ///
    /// A sensor failure skips the cycle. Only a failed write to the durable
    /// log is an error.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome, StationError> {
        let now = self.clock.now();

        if let Err(e) = self.record.collect(&mut self.sensors, now) {
            error!("Skipping cycle at {}: {}", now, e);
            return Ok(CycleOutcome::Skipped(e));
        }

        let delivery = self
            .router
            .deliver(&self.record)
            .map_err(StationError::Storage)?;

        debug!("Cycle at {} ended with {:?}", now, delivery);
        Ok(CycleOutcome::Delivered(delivery))
    }

    /// Run cycles until the durable log fails.
    ///
    /// The failure is returned, not logged; reporting it is up to the caller.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> Result<Infallible, StationError> {
        info!(
            "Station {} sampling every {} s",
            self.record.station_id,
            SAMPLE_INTERVAL_MS / 1_000
        );

        loop {
            self.run_cycle()?;
            delay.delay_ms(SAMPLE_INTERVAL_MS);
        }
    }

    pub fn router(&self) -> &DeliveryRouter<K, S> {
        &self.router
    }
}
