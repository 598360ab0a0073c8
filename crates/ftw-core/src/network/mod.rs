//! Network attachment and telemetry delivery
//!
//! The [`NetworkSession`] brings the Wi-Fi link up once at boot and settles on
//! a [`NetworkMode`]. The [`DeliveryRouter`] is handed that mode and decides,
//! record by record, between the collector and the durable log.

mod router;
mod session;

pub use router::*;
pub use session::*;

use alloc::string::String;
use thiserror_no_std::Error;

/// Fixed collector endpoint records are posted to.
pub const COLLECTOR_URL: &str = "https://ftw.pietr.dev/ws/weather/data";

/// Network attachment decided at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkMode {
    #[default]
    Offline,
    Online,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadioError {
    #[error("radio could not be activated")]
    Activation,
    #[error("association request failed: {0}")]
    Association(&'static str),
}

/// Station-mode Wi-Fi interface.
pub trait WifiRadio {
    fn is_active(&self) -> bool;

    fn activate(&mut self) -> Result<(), RadioError>;

    /// Request association with an access point. Returns once the request is
    /// issued; the link comes up asynchronously.
    fn connect(&mut self, ssid: &str, psk: &str) -> Result<(), RadioError>;

    /// Whether the link is up and addressed.
    fn is_connected(&mut self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Failed(String),
}

/// HTTP client for the remote collector.
pub trait Collector {
    /// URL requests are sent to.
    fn endpoint(&self) -> &str;

    /// POST `body` as `application/json`.
    ///
    /// Blocks for at most the client's transport timeout. Any response that
    /// arrives is returned, whatever its status.
    fn post_json(&mut self, body: &str) -> Result<CollectorResponse, TransportError>;
}
