//! Static key tables for the Talus tablet
//!
//! The Talus matrix wires three rows and three columns of the keypad
//! controller. Power and Home double as wake sources; the PMIC power key
//! additionally reports short-press and 1-second-hold events on its own
//! interrupt lines.

use talus_core::config::{
    InterruptKey, InterruptKeysConfig, KeyCode, KeyEntry, KeypadConfig, PinAssignment, WakeKey,
    MAX_PINS, SCAN_CLOCK_CYCLES_PER_MS,
};

use crate::pmic;

/// Matrix rows wired on this board
pub const ROW_COUNT: u8 = 3;

/// Matrix columns wired on this board
pub const COL_COUNT: u8 = 3;

/// Matrix keymap
pub static KEYMAP: [KeyEntry; 7] = [
    KeyEntry::new(0, 0, KeyCode::Power),
    KeyEntry::new(0, 1, KeyCode::Home),
    KeyEntry::new(1, 0, KeyCode::Reserved),
    KeyEntry::new(1, 1, KeyCode::VolumeDown),
    KeyEntry::new(2, 0, KeyCode::Camera),
    KeyEntry::new(2, 1, KeyCode::VolumeUp),
    KeyEntry::new(2, 2, KeyCode::Num2),
];

/// Matrix positions allowed to wake the system (Power and Home)
pub static WAKE_KEYS: [WakeKey; 2] = [WakeKey::new(0, 0), WakeKey::new(0, 1)];

/// PMIC-routed power-key buttons: short press and 1-second hold
pub static INTERRUPT_KEYS: [InterruptKey; 2] = [
    InterruptKey::new(KeyCode::Power, pmic::ONKEY_FALLING_IRQ, 100),
    InterruptKey::new(KeyCode::Power, pmic::ONKEY_HOLD_1S_IRQ, 3000),
];

/// Keypad-controller platform data for this board
///
/// Pin roles are left unassigned; the init routine fills them before
/// registration.
pub fn keypad_config() -> KeypadConfig {
    KeypadConfig {
        row_count: ROW_COUNT,
        col_count: COL_COUNT,
        // 20 ms debounce at the 32 kHz scan clock
        debounce_cycles: 20 * SCAN_CLOCK_CYCLES_PER_MS,
        repeat_cycles: 1,
        scan_count: 30,
        wakeup: true,
        keymap: &KEYMAP,
        wake_keys: &WAKE_KEYS,
        wakeup_key: KeyCode::Power,
        // the shell generates its own key repeat
        suppress_event_repeat: true,
        pins: [PinAssignment::default(); MAX_PINS],
    }
}

/// Interrupt-button platform data for this board
pub const fn interrupt_keys_config() -> InterruptKeysConfig {
    InterruptKeysConfig::new(&INTERRUPT_KEYS)
}
