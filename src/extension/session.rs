//! Extension controller session management
//!
//! This module owns the connect / identify / poll / verify sequence for a
//! single extension controller port. The session holds the connection
//! state (identified type, raw control buffer, request size) and drives
//! the bus transport; it never interprets the control bytes themselves.

use std::fmt;

use log::{debug, info, warn};

use crate::bus::ExtensionBus;
use crate::extension::constants::{ID_SIZE, MAX_REQUEST_SIZE, MIN_REQUEST_SIZE};
use crate::extension::types::{identify_device, ExtensionType};

/// A polling session with one extension controller.
///
/// All operations are synchronous and return plain success/failure; the
/// session never retries on its own. Callers own the retry policy by
/// re-invoking [`connect`](Self::connect) or [`update`](Self::update).
pub struct ControllerSession<B: ExtensionBus> {
    bus: B,

    /// Controller type this session expects (`Any` accepts everything)
    expected: ExtensionType,

    /// Type identified on the last successful connect
    connected_type: ExtensionType,

    /// Raw control data from the last poll
    control_data: [u8; MAX_REQUEST_SIZE],

    /// Bytes requested per poll, within [MIN_REQUEST_SIZE, MAX_REQUEST_SIZE]
    request_size: usize,
}

impl<B: ExtensionBus> ControllerSession<B> {
    /// Create a session that accepts any connected controller.
    pub fn new(bus: B) -> Self {
        Self::with_expected(bus, ExtensionType::Any)
    }

    /// Create a session that only polls the given controller type.
    pub fn with_expected(bus: B, expected: ExtensionType) -> Self {
        Self {
            bus,
            expected,
            connected_type: ExtensionType::None,
            control_data: [0u8; MAX_REQUEST_SIZE],
            request_size: MIN_REQUEST_SIZE,
        }
    }

    /// Bring up the underlying bus transport. Side effect only.
    pub fn begin(&mut self) {
        self.bus.begin();
    }

    /// Connect to the controller: clear current state, run the bus init
    /// handshake, identify the device, and seed the buffer with an
    /// initial poll. Returns false if init or the initial poll fails.
    pub fn connect(&mut self) -> bool {
        self.disconnect();
        self.reconnect()
    }

    /// Same as [`connect`](Self::connect) but without pre-clearing the
    /// old state. Used for retries where the caller has not issued a
    /// disconnect in between.
    pub fn reconnect(&mut self) -> bool {
        match self.bus.init() {
            Ok(()) => {
                self.identify();
                let success = self.update();

                if success {
                    info!("Connected: {}", self.connected_type);
                } else {
                    debug!("Initial poll failed for {}", self.connected_type);
                }

                success
            }
            Err(e) => {
                warn!("Bus init failed: {}", e);
                self.connected_type = ExtensionType::None;
                false
            }
        }
    }

    /// Drop the connection: type back to `None`, control buffer zeroed.
    /// Always succeeds.
    pub fn disconnect(&mut self) {
        self.connected_type = ExtensionType::None;
        self.control_data.fill(0x00);
    }

    /// [`disconnect`](Self::disconnect) plus request size back to the
    /// minimum default.
    pub fn reset(&mut self) {
        self.disconnect();
        self.request_size = MIN_REQUEST_SIZE;
    }

    /// Query the bus for the device identity signature and store the
    /// decoded type.
    pub fn identify(&mut self) {
        self.connected_type = identify_device(&mut self.bus);
    }

    /// True if the connected type equals `expected`, or if `expected` is
    /// the wildcard `Any` and some controller is connected.
    pub fn type_matches(&self, expected: ExtensionType) -> bool {
        if self.connected_type == expected {
            return true;
        }

        expected == ExtensionType::Any && self.connected_type != ExtensionType::None
    }

    /// Poll the controller for fresh control data.
    ///
    /// Fails if the connected type does not match the session's
    /// expectation, if the bus request fails, or if the polled bytes do
    /// not verify for the identified type. The bus is not touched when
    /// the type check fails.
    pub fn update(&mut self) -> bool {
        if !self.type_matches(self.expected) {
            debug!(
                "Type mismatch: connected {} but expecting {}",
                self.connected_type, self.expected
            );
            return false;
        }

        let dest = &mut self.control_data[..self.request_size];
        match self.bus.request_bytes(dest) {
            Ok(()) => self.connected_type.verify_data(dest),
            Err(e) => {
                warn!("Control data request failed: {}", e);
                false
            }
        }
    }

    /// Controller type identified on the last connect.
    pub fn controller_type(&self) -> ExtensionType {
        self.connected_type
    }

    /// Read one byte of control data. Caller owns bounds
    /// (`index < request_size()`).
    pub fn control_data(&self, index: usize) -> u8 {
        self.control_data[index]
    }

    /// Overwrite one byte of control data. Caller owns bounds.
    pub fn set_control_data(&mut self, index: usize, value: u8) {
        self.control_data[index] = value;
    }

    /// The control bytes from the last poll, `request_size` long.
    pub fn control_bytes(&self) -> &[u8] {
        &self.control_data[..self.request_size]
    }

    /// Bytes requested per poll.
    pub fn request_size(&self) -> usize {
        self.request_size
    }

    /// Set the per-poll request size. Values outside
    /// [MIN_REQUEST_SIZE, MAX_REQUEST_SIZE] are silently ignored.
    pub fn set_request_size(&mut self, size: usize) {
        if (MIN_REQUEST_SIZE..=MAX_REQUEST_SIZE).contains(&size) {
            self.request_size = size;
        }
    }

    /// Access the underlying bus transport.
    pub fn bus(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Write the current control buffer as hex to `out`, e.g.
    /// `Raw[6]: A1 02 9F 00 12 03`. Observational only.
    pub fn write_debug_raw(&self, out: &mut impl fmt::Write) -> fmt::Result {
        write!(out, "Raw[{}]: ", self.request_size)?;
        write_hex(out, self.control_bytes())
    }

    /// Read the identity signature fresh off the bus and write it as hex
    /// to `out`, e.g. `ID: 00 00 A4 20 00 00`.
    pub fn write_debug_id(&mut self, out: &mut impl fmt::Write) -> fmt::Result {
        let mut id = [0u8; ID_SIZE];

        match self.bus.request_identity(&mut id) {
            Ok(()) => {
                write!(out, "ID: ")?;
                write_hex(out, &id)
            }
            Err(_) => write!(out, "Bad ID read"),
        }
    }

    /// Log the current buffer at info level.
    pub fn print_debug(&self) {
        let mut line = String::new();
        // Writing to a String cannot fail
        let _ = self.write_debug_raw(&mut line);
        info!("{}", line);
    }
}

fn write_hex(out: &mut impl fmt::Write, bytes: &[u8]) -> fmt::Result {
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{:02X}", byte)?;
    }
    Ok(())
}
