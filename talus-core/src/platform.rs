//! Platform-device registration seam
//!
//! Board-wired devices are not discoverable; a board file describes each
//! one with static platform data and registers it on the platform bus
//! during bring-up. The bus itself is external infrastructure, modelled
//! here as a trait so init code can run against a recording fake in
//! tests.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{InterruptKeysConfig, KeypadConfig};

/// Board identity number read from the identification EEPROM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardId(pub u16);

/// Board identification record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardInfo {
    /// Board identity number
    pub board_id: BoardId,
    /// Stock-keeping unit
    pub sku: u16,
    /// Fabrication run
    pub fab: u8,
    /// Major board revision
    pub major_revision: u8,
    /// Minor board revision
    pub minor_revision: u8,
}

impl BoardInfo {
    /// Create a board record with only the identity set
    pub const fn with_id(board_id: BoardId) -> Self {
        Self {
            board_id,
            sku: 0,
            fab: 0,
            major_revision: 0,
            minor_revision: 0,
        }
    }
}

/// A board-wired device and its platform data
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformDevice {
    /// Matrix keypad controller
    Keypad(KeypadConfig),
    /// Interrupt-backed button set
    InterruptKeys(InterruptKeysConfig),
}

impl PlatformDevice {
    /// Driver name the device binds to
    pub fn driver_name(&self) -> &'static str {
        match self {
            PlatformDevice::Keypad(_) => "talus-keypad",
            PlatformDevice::InterruptKeys(_) => "interrupt-keys",
        }
    }
}

/// The platform bus a board file registers devices on
///
/// Registration returns nothing; failure handling is internal to the
/// external device model, matching the contract board glue is written
/// against.
pub trait PlatformBus {
    /// Hand a device and its platform data to the device model
    fn register(&mut self, device: PlatformDevice);
}
