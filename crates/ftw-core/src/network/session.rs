use embedded_hal::delay::DelayNs;
use log::{error, info, warn};

use super::{NetworkMode, WifiRadio};
use crate::config::NetworkConfig;

/// Connectivity checks made after requesting association.
pub const CONNECT_POLL_ATTEMPTS: u32 = 10;

/// Wait between two connectivity checks.
pub const CONNECT_POLL_INTERVAL_MS: u32 = 1_000;

/// Wi-Fi association lifecycle
///
/// Starts [`Offline`](NetworkMode::Offline) and moves to
/// [`Online`](NetworkMode::Online) at most once, in [`connect`](Self::connect).
/// Only the first call to `connect` touches the radio.
/// A link lost later is not tracked here: the station stays `Online` and each
/// failed delivery falls back to the durable log on its own.
pub struct NetworkSession<R> {
    radio: R,
    mode: NetworkMode,
    attempted: bool,
}

impl<R: WifiRadio> NetworkSession<R> {
    pub fn new(radio: R) -> Self {
        Self {
            radio,
            mode: NetworkMode::Offline,
            attempted: false,
        }
    }

    pub fn mode(&self) -> NetworkMode {
        self.mode
    }

    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// Associate with the configured network, polling the link once per
    /// second for up to [`CONNECT_POLL_ATTEMPTS`] checks.
    ///
    /// Returns as soon as the link is up. On failure the session stays
    /// offline for the rest of the run; later calls return the settled mode.
    pub fn connect<D: DelayNs>(&mut self, network: &NetworkConfig, delay: &mut D) -> NetworkMode {
        if self.attempted {
            warn!("Network already settled as {:?}", self.mode);
            return self.mode;
        }
        self.attempted = true;

        if !self.radio.is_active() {
            if let Err(e) = self.radio.activate() {
                error!("{}, running in offline mode", e);
                return self.mode;
            }
        }

        if let Err(e) = self.radio.connect(&network.ssid, &network.psk) {
            error!("{}, running in offline mode", e);
            return self.mode;
        }

        for attempt in 1..=CONNECT_POLL_ATTEMPTS {
            if self.radio.is_connected() {
                info!(
                    "Connected to network {} (check {}/{})",
                    network.ssid, attempt, CONNECT_POLL_ATTEMPTS
                );
                self.mode = NetworkMode::Online;
                return self.mode;
            }
            delay.delay_ms(CONNECT_POLL_INTERVAL_MS);
        }

        error!("Failed to connect to network, running in offline mode");
        self.mode
    }
}
