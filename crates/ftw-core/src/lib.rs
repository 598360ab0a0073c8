//! Hardware-independent core library for the Fetch The Weather station
//!
//! This crate contains the whole telemetry pipeline of a weather station node:
//! sensor abstraction, record assembly, network-aware delivery routing and the
//! durable fallback log. Radios, storage, clocks and sensors are reached
//! through traits so the same code drives the device and the desktop host.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the host runner and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod network;
pub mod sensors;
pub mod station;
pub mod storage;
pub mod telemetry;
pub mod time;

#[cfg(test)]
pub(crate) mod testing;
