//! BMP280 adapter against a scripted I2C bus

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use ftw_core::sensors::{BMP280_ADDRESS, Bmp280Sensor, SensorError};
use ftw_station::StdDelay;

/// Bus with nothing attached: every transfer is NACKed.
#[derive(Default)]
struct EmptyBus {
    addresses: Vec<u8>,
}

impl ErrorType for EmptyBus {
    type Error = ErrorKind;
}

impl I2c for EmptyBus {
    fn transaction(
        &mut self,
        address: u8,
        _operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.addresses.push(address);
        Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
    }
}

#[test]
fn test_missing_chip_fails_initialization() {
    let mut bus = EmptyBus::default();

    let rejected = matches!(
        Bmp280Sensor::new(&mut bus, BMP280_ADDRESS, StdDelay),
        Err(SensorError::InitializationFailed {
            sensor: "BMP280",
            ..
        })
    );

    assert!(rejected);
    assert!(!bus.addresses.is_empty());
    assert!(bus.addresses.iter().all(|a| *a == BMP280_ADDRESS));
}
