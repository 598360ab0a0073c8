use log::{info, warn};
use thiserror_no_std::Error;

use super::{Collector, NetworkMode, TransportError};
use crate::storage::{DurableLog, Storage, StorageError};
use crate::telemetry::TelemetryRecord;

/// Why a record ended up in the durable log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    #[error("station is offline")]
    Offline,
    #[error("collector answered with status {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(TransportError),
    #[error("record could not be encoded")]
    Encode,
}

/// Where a record went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The collector accepted the record.
    Sent,
    /// The record was appended to the durable log instead.
    Logged(FallbackReason),
}

/// Routes each record to the collector or to the durable log
///
/// Offline stations go straight to the log. Online stations try exactly one
/// POST per record; anything but a 200 sends the record to the log, and it is
/// never retried against the network.
pub struct DeliveryRouter<C, S> {
    mode: NetworkMode,
    collector: C,
    log: DurableLog<S>,
}

impl<C: Collector, S: Storage> DeliveryRouter<C, S> {
    pub fn new(mode: NetworkMode, collector: C, log: DurableLog<S>) -> Self {
        Self {
            mode,
            collector,
            log,
        }
    }

    /// Deliver one record.
    ///
    /// The only error is a failed write to the durable log: at that point the
    /// record has nowhere left to go.
    pub fn deliver(&mut self, record: &TelemetryRecord) -> Result<Delivery, StorageError> {
        let reason = match self.mode {
            NetworkMode::Offline => FallbackReason::Offline,
            NetworkMode::Online => match self.send(record) {
                Ok(()) => return Ok(Delivery::Sent),
                Err(reason) => {
                    warn!(
                        "An error occurred when sending request ({}). Falling back to logfile...",
                        reason
                    );
                    reason
                }
            },
        };

        self.log.append(record)?;
        Ok(Delivery::Logged(reason))
    }

    pub fn collector(&self) -> &C {
        &self.collector
    }

    pub fn log(&self) -> &DurableLog<S> {
        &self.log
    }

    fn send(&mut self, record: &TelemetryRecord) -> Result<(), FallbackReason> {
        let body = record
            .to_wire_form()
            .to_json()
            .map_err(|_| FallbackReason::Encode)?;

        match self.collector.post_json(&body) {
            Ok(response) if response.status == 200 => {
                info!("200 from {}: {}", self.collector.endpoint(), response.body);
                Ok(())
            }
            Ok(response) => Err(FallbackReason::Status(response.status)),
            Err(e) => Err(FallbackReason::Transport(e)),
        }
    }
}
