//! Interrupt-backed button platform data
//!
//! Some logical buttons on this board have no GPIO of their own; the PMIC
//! raises a dedicated interrupt line for each press variant instead. The
//! button driver only needs the interrupt number, the key code to report
//! and a debounce interval.

use super::types::KeyCode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One interrupt-backed logical button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InterruptKey {
    /// Key code reported when the line fires
    pub code: KeyCode,
    /// Interrupt line owned by the PMIC interrupt controller
    pub irq: u16,
    /// Line may wake the system from suspend
    pub wakeup: bool,
    /// Minimum stable time before a transition is accepted
    pub debounce_ms: u16,
}

impl InterruptKey {
    /// Create a non-wake interrupt button
    pub const fn new(code: KeyCode, irq: u16, debounce_ms: u16) -> Self {
        Self {
            code,
            irq,
            wakeup: false,
            debounce_ms,
        }
    }

    /// Create a wake-capable interrupt button
    pub const fn wake(code: KeyCode, irq: u16, debounce_ms: u16) -> Self {
        Self {
            code,
            irq,
            wakeup: true,
            debounce_ms,
        }
    }
}

/// Interrupt-button platform data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptKeysConfig {
    /// Buttons served by this device
    pub keys: &'static [InterruptKey],
    /// Report auto-repeat events while a button is held
    pub auto_repeat: bool,
}

impl InterruptKeysConfig {
    /// Create the platform data for a button set
    pub const fn new(keys: &'static [InterruptKey]) -> Self {
        Self {
            keys,
            auto_repeat: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_wake_flag() {
        let short = InterruptKey::new(KeyCode::Power, 390, 100);
        assert!(!short.wakeup);
        assert_eq!(short.debounce_ms, 100);

        let wake = InterruptKey::wake(KeyCode::Power, 390, 100);
        assert!(wake.wakeup);
    }

    #[test]
    fn config_defaults_to_no_auto_repeat() {
        const KEYS: [InterruptKey; 1] = [InterruptKey::new(KeyCode::Power, 390, 100)];
        let cfg = InterruptKeysConfig::new(&KEYS);
        assert!(!cfg.auto_repeat);
        assert_eq!(cfg.keys.len(), 1);
    }
}
