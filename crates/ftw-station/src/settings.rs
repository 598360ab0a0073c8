//! Runner settings read from the environment
//!
//! | Variable          | Default       | Meaning                                   |
//! |-------------------|---------------|-------------------------------------------|
//! | `FTW_DATA_DIR`    | `.`           | Directory standing in for device storage  |
//! | `FTW_CONFIG_FILE` | `config.json` | Configuration file inside the data dir    |
//! | `FTW_SENSORS`     | all           | Simulated sensors: `climate,air,pressure` |
//!
//! `RUST_LOG` is read by `env_logger` directly.

use std::env;
use std::path::PathBuf;

use log::warn;

pub const DATA_DIR_VAR: &str = "FTW_DATA_DIR";
pub const CONFIG_FILE_VAR: &str = "FTW_CONFIG_FILE";
pub const SENSORS_VAR: &str = "FTW_SENSORS";

/// Simulated sensors to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSelection {
    pub climate: bool,
    pub air_quality: bool,
    pub pressure: bool,
}

impl SensorSelection {
    pub const ALL: Self = Self {
        climate: true,
        air_quality: true,
        pressure: true,
    };

    pub const NONE: Self = Self {
        climate: false,
        air_quality: false,
        pressure: false,
    };

    /// Parse a comma separated list. Unknown names are ignored with a warning.
    pub fn parse(list: &str) -> Self {
        let mut selection = Self::NONE;

        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name {
                "climate" => selection.climate = true,
                "air" => selection.air_quality = true,
                "pressure" => selection.pressure = true,
                other => warn!("Ignoring unknown sensor {:?} in {}", other, SENSORS_VAR),
            }
        }

        selection
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSettings {
    pub data_dir: PathBuf,
    pub config_file: String,
    pub sensors: SensorSelection,
}

impl RunnerSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: lookup(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            config_file: lookup(CONFIG_FILE_VAR).unwrap_or_else(|| "config.json".to_string()),
            sensors: lookup(SENSORS_VAR)
                .map(|list| SensorSelection::parse(&list))
                .unwrap_or(SensorSelection::ALL),
        }
    }
}
