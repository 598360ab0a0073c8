//! Station identity and network credentials
//!
//! Stored as a JSON document:
//!
//! ```json
//! {"id": 123456, "network": {"ssid": "home", "psk": "secret"}, "logfile": "/log.txt"}
//! ```
//!
//! Every key is required. A document missing one, or failing to parse, is
//! rejected as a whole and the station keeps running on the defaults.

use alloc::string::{String, ToString};
use log::{error, info, warn};
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::storage::{Storage, StorageError};

/// Location of the configuration file on the device.
pub const CONFIG_FILE: &str = "/config.json";

pub const DEFAULT_LOG_FILE: &str = "/log.txt";

/// Identity of a station that has not been assigned one yet.
pub const UNASSIGNED_ID: u32 = 0;

/// Largest identity handed out by self-assignment.
pub const MAX_IDENTITY: u32 = 999_999_999;

/// 802.11 limits: SSID up to 32 bytes, WPA2 passphrase up to 63 characters.
pub type Ssid = heapless::String<32>;
pub type Psk = heapless::String<64>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StationConfig {
    pub id: u32,
    pub network: NetworkConfig,
    pub logfile: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkConfig {
    pub ssid: Ssid,
    pub psk: Psk,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            network: NetworkConfig::default(),
            logfile: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configuration storage: {0}")]
    Storage(StorageError),
    #[error("invalid configuration file: {0}")]
    Invalid(String),
    #[error("failed to encode configuration")]
    Encode,
}

/// Which path [`StationConfig::load`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The stored configuration was valid and already had an identity.
    Loaded,
    /// A fresh identity was drawn and persisted.
    IdentityAssigned(u32),
    /// The stored configuration was unreadable or invalid; defaults kept.
    KeptDefault,
}

impl StationConfig {
    /// Overlay the configuration stored at `path`, then make sure the station
    /// has an identity.
    ///
    /// - Invalid or unreadable file: warn, keep the defaults untouched and
    ///   write nothing back, so an operator's broken file is not clobbered.
    /// - No file at all: start from the defaults.
    /// - Identity still unassigned: draw one in `1..=MAX_IDENTITY` and persist
    ///   the whole configuration immediately.
    pub fn load<S, R>(&mut self, storage: &mut S, path: &str, rng: &mut R) -> LoadOutcome
    where
        S: Storage,
        R: RngCore,
    {
        match Self::read(storage, path) {
            Ok(stored) => *self = stored,
            Err(ConfigError::Storage(StorageError::NotFound)) => {
                warn!("No configuration at {}, starting from defaults", path);
            }
            Err(e) => {
                error!("{}", e);
                info!("Sticking with default configuration");
                return LoadOutcome::KeptDefault;
            }
        }

        if self.id != UNASSIGNED_ID {
            info!("Loaded configuration for station {}", self.id);
            return LoadOutcome::Loaded;
        }

        info!("Detected default ID, setting a new ID...");
        let id = random_identity(rng);
        self.id = id;

        // The identity is used for this run even if it could not be saved.
        if let Err(e) = self.persist(storage, path) {
            error!("Failed to persist station identity: {}", e);
        }

        info!("ID: {} => {}", UNASSIGNED_ID, id);
        LoadOutcome::IdentityAssigned(id)
    }

    /// Overwrite the stored configuration with this one.
    pub fn persist<S: Storage>(&self, storage: &mut S, path: &str) -> Result<(), ConfigError> {
        let bytes = serde_json::to_vec(self).map_err(|_| ConfigError::Encode)?;
        storage.write(path, &bytes).map_err(ConfigError::Storage)
    }

    fn read<S: Storage>(storage: &mut S, path: &str) -> Result<Self, ConfigError> {
        let bytes = storage.read(path).map_err(ConfigError::Storage)?;
        serde_json::from_slice(&bytes).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Draw a station identity uniformly from `1..=MAX_IDENTITY`.
pub fn random_identity<R: RngCore>(rng: &mut R) -> u32 {
    loop {
        // 30 bits cover the range; fewer than 7% of draws are rejected.
        let candidate = rng.next_u32() & 0x3FFF_FFFF;
        if (1..=MAX_IDENTITY).contains(&candidate) {
            return candidate;
        }
    }
}
