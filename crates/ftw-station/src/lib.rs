//! Host runner for the Fetch The Weather station
//!
//! Backs the `ftw-core` traits with desktop facilities so the whole station
//! can run without hardware: files under a data directory stand in for the
//! device's flash, `reqwest` talks to the collector, and synthetic sensors
//! produce slowly drifting readings.

pub mod clock;
pub mod collector;
pub mod fs_storage;
pub mod radio;
pub mod settings;
pub mod simulated;

pub use clock::{StdDelay, SystemClock};
pub use collector::HttpCollector;
pub use fs_storage::FsStorage;
pub use radio::HostRadio;
pub use settings::RunnerSettings;
