use alloc::string::String;
use log::info;

use super::{Storage, StorageError};
use crate::telemetry::TelemetryRecord;

/// Append-only log of telemetry that could not be delivered.
///
/// One wire-form record per line. The log is never truncated, rotated or read
/// back, so it grows for as long as the station stays offline.
pub struct DurableLog<S> {
    storage: S,
    path: String,
}

impl<S: Storage> DurableLog<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    /// Append one record as a newline-terminated line.
    pub fn append(&mut self, record: &TelemetryRecord) -> Result<(), StorageError> {
        let mut line = record
            .to_wire_form()
            .to_json()
            .map_err(|_| StorageError::Encode)?;
        line.push('\n');

        self.storage.append(&self.path, line.as_bytes())?;

        info!("LOG: {}", line.trim_end());
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn record(station_id: u32, timestamp: u64) -> TelemetryRecord {
        TelemetryRecord {
            timestamp,
            pressure_hpa: Some(1013.25),
            ..TelemetryRecord::new(station_id)
        }
    }

    #[test]
    fn test_append_writes_one_line_per_record() {
        let mut log = DurableLog::new(MemoryStorage::new(), "/log.txt");

        log.append(&record(7, 100)).unwrap();
        log.append(&record(7, 160)).unwrap();

        let contents = core::str::from_utf8(log.storage().contents("/log.txt").unwrap()).unwrap();
        let lines: alloc::vec::Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(contents.ends_with('\n'));
        assert_eq!(
            lines[0],
            r#"{"weatherStationId":"7","temperatureCelsius":0.0,"airPressureHpa":1013.25,"airQualityPpm":0.0,"humidityPercent":0.0,"timestamp":"100"}"#
        );
        assert!(lines[1].ends_with(r#""timestamp":"160"}"#));
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let storage = MemoryStorage::with_file("/log.txt", b"earlier line\n");
        let mut log = DurableLog::new(storage, "/log.txt");

        log.append(&record(1, 5)).unwrap();

        let contents = log.storage().contents("/log.txt").unwrap();
        assert!(contents.starts_with(b"earlier line\n{"));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut storage = MemoryStorage::new();
        storage.set_read_only(true);
        let mut log = DurableLog::new(storage, "/log.txt");

        assert!(matches!(log.append(&record(1, 5)), Err(StorageError::Io(_))));
        assert_eq!(log.storage().contents("/log.txt"), None);
    }
}
