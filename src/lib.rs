//! Wiiext-rs: Wii Extension Controller Driver
//!
//! This library polls Nintendo-style extension controllers (Nunchuk,
//! Classic Controller, instrument and tablet peripherals) over an
//! I2C-like bus, identifying the connected device and exposing its raw
//! control bytes after a verification pass.

pub mod bus;
pub mod config;
pub mod extension;

// Re-export commonly used items
pub use bus::{BusError, ExtensionBus, MockExtensionBus};
pub use config::PollerConfig;
pub use extension::{ControllerSession, ExtensionType};
