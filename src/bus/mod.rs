//! Bus transport abstraction for extension controllers
//!
//! This module defines the contract the driver consumes to talk to an
//! extension controller over an I2C-like bus. Concrete transports (a
//! platform I2C peripheral, a bit-banged adapter, or the mock used in
//! tests) implement [`ExtensionBus`]; the session layer never touches
//! the wire directly.

pub mod mock_bus;

pub use mock_bus::MockExtensionBus;

use thiserror::Error;

use crate::extension::constants::ID_SIZE;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("bus initialization failed: {0}")]
    Init(String),

    #[error("bus transfer failed: {0}")]
    Transfer(String),

    #[error("device did not acknowledge")]
    Nack,
}

/// Transport contract for a single extension controller port.
///
/// All operations are synchronous and block until the transport returns.
/// Implementations own any addressing and timing details (the standard
/// port sits at I2C address 0x52 and wants a short delay between a
/// register-pointer write and the following read).
pub trait ExtensionBus {
    /// Bring up the underlying bus peripheral. Side effect only; a
    /// transport that needs no bring-up may make this a no-op.
    fn begin(&mut self);

    /// Run the extension initialization handshake (the two unencrypted
    /// register writes). The controller will not answer data requests
    /// until this succeeds.
    fn init(&mut self) -> Result<(), BusError>;

    /// Read `dest.len()` bytes of control data into `dest`.
    fn request_bytes(&mut self, dest: &mut [u8]) -> Result<(), BusError>;

    /// Read the 6-byte identity signature into `dest`.
    fn request_identity(&mut self, dest: &mut [u8; ID_SIZE]) -> Result<(), BusError>;
}
