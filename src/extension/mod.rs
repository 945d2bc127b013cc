//! Extension controller support
//!
//! This module provides the extension controller protocol core:
//! - Protocol constants (address, registers, identity signatures)
//! - Controller type identification
//! - The connect / poll / verify session

pub mod constants;
pub mod types;
pub mod session;

// Re-export commonly used items
pub use constants::*;
pub use types::*;
pub use session::*;
