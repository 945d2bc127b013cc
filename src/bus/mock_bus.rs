//! Mock bus transport for testing.
//!
//! This transport answers from scripted byte tables instead of touching
//! real hardware. Useful for testing the session protocol sequence
//! (init, identify, poll, verify) without a controller plugged in.

use log::debug;

use crate::bus::{BusError, ExtensionBus};
use crate::extension::constants::{ID_SIZE, MAX_REQUEST_SIZE};

/// Mock extension bus that replays scripted responses.
#[derive(Debug, Clone)]
pub struct MockExtensionBus {
    /// Identity signature returned by `request_identity`
    identity: [u8; ID_SIZE],

    /// Control data returned by `request_bytes` (prefix of the request length)
    report: [u8; MAX_REQUEST_SIZE],

    /// When set, `init` fails
    fail_init: bool,

    /// When set, `request_bytes` fails
    fail_request: bool,

    /// When set, `request_identity` fails
    fail_identity: bool,

    /// Number of `init` calls observed
    pub init_calls: usize,

    /// Number of `request_bytes` calls observed
    pub request_calls: usize,

    /// Number of `request_identity` calls observed
    pub identity_calls: usize,
}

impl MockExtensionBus {
    /// Create a mock with the given identity signature and an
    /// alternating-byte report that passes the bus-noise check.
    pub fn new(identity: [u8; ID_SIZE]) -> Self {
        let mut report = [0u8; MAX_REQUEST_SIZE];
        for (i, byte) in report.iter_mut().enumerate() {
            *byte = if i % 2 == 0 { 0xA5 } else { 0x5A };
        }

        Self {
            identity,
            report,
            fail_init: false,
            fail_request: false,
            fail_identity: false,
            init_calls: 0,
            request_calls: 0,
            identity_calls: 0,
        }
    }

    /// Replace the scripted control data report.
    pub fn set_report(&mut self, data: &[u8]) {
        let len = data.len().min(MAX_REQUEST_SIZE);
        self.report[..len].copy_from_slice(&data[..len]);
    }

    /// Make `init` fail.
    pub fn fail_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// Make `request_bytes` fail.
    pub fn fail_request(mut self) -> Self {
        self.fail_request = true;
        self
    }

    /// Make `request_identity` fail.
    pub fn fail_identity(mut self) -> Self {
        self.fail_identity = true;
        self
    }
}

impl ExtensionBus for MockExtensionBus {
    fn begin(&mut self) {
        debug!("[MOCK BUS] begin");
    }

    fn init(&mut self) -> Result<(), BusError> {
        self.init_calls += 1;

        if self.fail_init {
            debug!("[MOCK BUS] init -> scripted failure");
            return Err(BusError::Init("scripted failure".to_string()));
        }

        debug!("[MOCK BUS] init -> ok");
        Ok(())
    }

    fn request_bytes(&mut self, dest: &mut [u8]) -> Result<(), BusError> {
        self.request_calls += 1;

        if self.fail_request {
            debug!("[MOCK BUS] request_bytes({}) -> scripted NACK", dest.len());
            return Err(BusError::Nack);
        }

        if dest.len() > MAX_REQUEST_SIZE {
            return Err(BusError::Transfer(format!(
                "request of {} bytes exceeds report size",
                dest.len()
            )));
        }

        dest.copy_from_slice(&self.report[..dest.len()]);
        debug!("[MOCK BUS] request_bytes({}) -> ok", dest.len());
        Ok(())
    }

    fn request_identity(&mut self, dest: &mut [u8; ID_SIZE]) -> Result<(), BusError> {
        self.identity_calls += 1;

        if self.fail_identity {
            debug!("[MOCK BUS] request_identity -> scripted NACK");
            return Err(BusError::Nack);
        }

        dest.copy_from_slice(&self.identity);
        debug!("[MOCK BUS] request_identity -> {:02X?}", self.identity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::constants::ID_NUNCHUK;

    #[test]
    fn mock_bus_replays_identity() {
        let mut bus = MockExtensionBus::new(ID_NUNCHUK);
        let mut id = [0u8; ID_SIZE];

        assert!(bus.request_identity(&mut id).is_ok());
        assert_eq!(id, ID_NUNCHUK);
        assert_eq!(bus.identity_calls, 1);
    }

    #[test]
    fn mock_bus_scripted_failures() {
        let mut bus = MockExtensionBus::new(ID_NUNCHUK).fail_init();
        assert!(bus.init().is_err());

        let mut bus = MockExtensionBus::new(ID_NUNCHUK).fail_request();
        let mut buf = [0u8; 6];
        assert!(bus.request_bytes(&mut buf).is_err());
    }

    #[test]
    fn mock_bus_report_prefix() {
        let mut bus = MockExtensionBus::new(ID_NUNCHUK);
        bus.set_report(&[1, 2, 3, 4, 5, 6]);

        let mut buf = [0u8; 4];
        assert!(bus.request_bytes(&mut buf).is_ok());
        assert_eq!(buf, [1, 2, 3, 4]);
    }
}
