//! fibdev library — harness logic for the Fibonacci device.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
