//! Extension controller type definitions
//!
//! This module defines the closed set of controller types the driver can
//! identify, the identity-signature decoding that maps raw bytes to a
//! type, and the per-type control data verification.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::bus::ExtensionBus;
use crate::extension::constants::{ID_SIGNATURE_TAG, ID_SIZE, MIN_REQUEST_SIZE};

/// Identified extension controller type.
///
/// `None` means nothing answered on the bus; `Unknown` means something
/// answered with a signature the driver does not recognize. `Any` is a
/// wildcard used only as a match expectation, never as an identification
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtensionType {
    /// No controller connected
    None,
    /// Wildcard: accept any connected controller
    Any,
    /// Controller present but signature not recognized
    Unknown,
    Nunchuk,
    ClassicController,
    GuitarController,
    DrumController,
    DJTurntableController,
    UDrawTablet,
    DrawsomeTablet,
}

impl Default for ExtensionType {
    fn default() -> Self {
        Self::None
    }
}

impl ExtensionType {
    /// Decode a 6-byte identity signature into a controller type.
    ///
    /// Every valid signature carries 0xA4 0x20 at bytes 2..4; anything
    /// else is `Unknown`. The remaining bytes select the variant.
    pub fn decode_identity(id: &[u8; ID_SIZE]) -> Self {
        if id[2] != ID_SIGNATURE_TAG[0] || id[3] != ID_SIGNATURE_TAG[1] {
            return Self::Unknown;
        }

        match (id[0], id[4], id[5]) {
            (_, 0x00, 0x00) => Self::Nunchuk,
            // Classic Controller Pro reports 0x01 in byte 0
            (_, 0x01, 0x01) => Self::ClassicController,
            (0x00, _, 0x03) => Self::GuitarController,
            (0x01, _, 0x03) => Self::DrumController,
            (0x03, _, 0x03) => Self::DJTurntableController,
            (0xFF, 0x00, 0x13) => Self::UDrawTablet,
            (0xFF, 0x01, 0x13) => Self::DrawsomeTablet,
            _ => Self::Unknown,
        }
    }

    /// Human-readable name for logging and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Any => "Any",
            Self::Unknown => "Unknown",
            Self::Nunchuk => "Nunchuk",
            Self::ClassicController => "Classic Controller",
            Self::GuitarController => "Guitar Controller",
            Self::DrumController => "Drum Controller",
            Self::DJTurntableController => "DJ Turntable",
            Self::UDrawTablet => "uDraw Tablet",
            Self::DrawsomeTablet => "Drawsome Tablet",
        }
    }

    /// Smallest control report this type produces.
    ///
    /// Every known extension reports at least the standard six bytes;
    /// the driver may request more (up to the buffer capacity) for
    /// controllers with extended report modes.
    pub fn min_report_size(&self) -> usize {
        MIN_REQUEST_SIZE
    }

    /// Verify a polled control data block for this controller type.
    ///
    /// The shared check rejects bus-noise reads: an unpowered or
    /// disconnected bus floats to all 0x00 or all 0xFF. Per-variant
    /// checks then enforce the minimum report length.
    pub fn verify_data(&self, data: &[u8]) -> bool {
        if matches!(self, Self::None) {
            return false;
        }

        let mut or_check = 0x00u8;
        let mut and_check = 0xFFu8;
        for &byte in data {
            or_check |= byte;
            and_check &= byte;
        }

        if or_check == 0x00 || and_check == 0xFF {
            debug!("{}: rejected bus-noise read", self.name());
            return false;
        }

        data.len() >= self.min_report_size()
    }
}

impl std::fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Query the bus for the device identity and decode it.
///
/// A failed identity read maps to `None` (nothing answering), while an
/// unrecognized signature maps to `Unknown` (something answering that
/// the driver cannot name).
pub fn identify_device<B: ExtensionBus>(bus: &mut B) -> ExtensionType {
    let mut id = [0u8; ID_SIZE];

    match bus.request_identity(&mut id) {
        Ok(()) => {
            let device = ExtensionType::decode_identity(&id);
            debug!("Identity {:02X?} -> {}", id, device);
            device
        }
        Err(e) => {
            warn!("Identity read failed: {}", e);
            ExtensionType::None
        }
    }
}
