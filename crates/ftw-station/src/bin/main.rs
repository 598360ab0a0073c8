//! Fetch The Weather station, host build.
//!
//! Boots like the device does: load the configuration (assigning an identity
//! on first run), bring up the sensors, try the network once, then sample
//! every minute until the durable log becomes unwritable.

use std::process::ExitCode;

use ftw_core::config::StationConfig;
use ftw_core::network::{COLLECTOR_URL, DeliveryRouter, NetworkSession};
use ftw_core::sensors::{Mq135, SensorBank};
use ftw_core::station::Station;
use ftw_core::storage::DurableLog;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use ftw_station::simulated::{SimulatedBarometer, SimulatedClimate, SimulatedGasAdc};
use ftw_station::{FsStorage, HostRadio, HttpCollector, RunnerSettings, StdDelay, SystemClock};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Fetch The Weather station {}", env!("CARGO_PKG_VERSION"));

    let settings = RunnerSettings::from_env();
    info!("Data directory: {}", settings.data_dir.display());

    let mut storage = FsStorage::new(&settings.data_dir);
    let mut config = StationConfig::default();
    config.load(&mut storage, &settings.config_file, &mut StdRng::from_entropy());

    let sensors = SensorBank::new(
        settings.sensors.climate.then(SimulatedClimate::new),
        settings
            .sensors
            .air_quality
            .then(|| Mq135::new(SimulatedGasAdc::new())),
        settings.sensors.pressure.then(SimulatedBarometer::new),
    );

    let mut session = NetworkSession::new(HostRadio::new(COLLECTOR_URL));
    let mode = session.connect(&config.network, &mut StdDelay);

    let collector = match HttpCollector::new(COLLECTOR_URL) {
        Ok(collector) => collector,
        Err(e) => {
            error!("Failed to set up HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log = DurableLog::new(storage, config.logfile.clone());
    let router = DeliveryRouter::new(mode, collector, log);
    let mut station = Station::new(&config, sensors, router, SystemClock);

    info!("Station {} initialized ({:?})", config.id, mode);

    let Err(e) = station.run(&mut StdDelay);
    error!("Station stopped: {}", e);
    ExitCode::FAILURE
}
