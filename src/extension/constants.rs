//! Extension controller protocol constants
//!
//! This module contains all the constants needed for extension controller
//! communication:
//! - I2C address and register pointers
//! - Initialization handshake bytes
//! - Request size bounds and identity signatures

// ============================================================================
// Bus Addressing
// ============================================================================

/// 7-bit I2C address shared by every extension controller
pub const I2C_ADDRESS: u8 = 0x52;

/// Register pointer for control data reads
pub const DATA_REGISTER: u8 = 0x00;

/// Register pointer for the identity signature
pub const ID_REGISTER: u8 = 0xFA;

// ============================================================================
// Initialization Handshake
// ============================================================================

/// First handshake write: register 0xF0 <- 0x55
///
/// Writing these two registers initializes the controller in unencrypted
/// mode. The order matters; the controller will not respond to data
/// requests until both writes have been acknowledged.
pub const INIT_STEP1: [u8; 2] = [0xF0, 0x55];

/// Second handshake write: register 0xFB <- 0x00
pub const INIT_STEP2: [u8; 2] = [0xFB, 0x00];

/// Delay between a register-pointer write and the following read
/// (microseconds). The controller needs time to latch new data.
pub const CONVERSION_DELAY_US: u64 = 175;

// ============================================================================
// Report Sizes
// ============================================================================

/// Smallest valid control data request (standard 6-byte report)
pub const MIN_REQUEST_SIZE: usize = 6;

/// Largest valid control data request, and the control buffer capacity
pub const MAX_REQUEST_SIZE: usize = 21;

/// Identity signature length in bytes
pub const ID_SIZE: usize = 6;

// ============================================================================
// Identity Signatures
// ============================================================================

/// Bytes 2..4 of every valid identity signature
pub const ID_SIGNATURE_TAG: [u8; 2] = [0xA4, 0x20];

/// Nunchuk identity: 00 00 A4 20 00 00
pub const ID_NUNCHUK: [u8; 6] = [0x00, 0x00, 0xA4, 0x20, 0x00, 0x00];

/// Classic Controller identity: 00 00 A4 20 01 01
/// (the Classic Controller Pro reports 01 in byte 0 instead)
pub const ID_CLASSIC: [u8; 6] = [0x00, 0x00, 0xA4, 0x20, 0x01, 0x01];

/// Guitar Hero guitar identity: 00 00 A4 20 01 03
pub const ID_GUITAR: [u8; 6] = [0x00, 0x00, 0xA4, 0x20, 0x01, 0x03];

/// Guitar Hero World Tour drums identity: 01 00 A4 20 01 03
pub const ID_DRUMS: [u8; 6] = [0x01, 0x00, 0xA4, 0x20, 0x01, 0x03];

/// DJ Hero turntable identity: 03 00 A4 20 01 03
pub const ID_DJ_TURNTABLE: [u8; 6] = [0x03, 0x00, 0xA4, 0x20, 0x01, 0x03];

/// uDraw GameTablet identity: FF 00 A4 20 00 13
pub const ID_UDRAW: [u8; 6] = [0xFF, 0x00, 0xA4, 0x20, 0x00, 0x13];

/// Drawsome tablet identity: FF 00 A4 20 01 13
pub const ID_DRAWSOME: [u8; 6] = [0xFF, 0x00, 0xA4, 0x20, 0x01, 0x13];
