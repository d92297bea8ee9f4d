//! Board key-device bring-up
//!
//! Runs once during board init: fills the keypad controller's pin roles
//! from the board's row/column counts, registers the keypad device, and
//! registers the PMIC interrupt-keys device on every board variant that
//! does not carry its own power-key path.

use talus_core::platform::{BoardId, BoardInfo, PlatformBus, PlatformDevice};

use crate::keymap::{interrupt_keys_config, keypad_config};

/// Board variant whose power key is handled by its own PMIC glue
///
/// This variant must not get the interrupt-keys device; registering it
/// would report every power-key edge twice.
pub const BOARD_ONKEY_VARIANT: BoardId = BoardId(0x064B);

/// Register the key input devices for this board
///
/// The keypad controller is registered unconditionally. The pin-budget
/// invariant is checked inside [`KeypadConfig::fill_pins`] and halts
/// boot on violation; there is no recoverable failure path.
///
/// [`KeypadConfig::fill_pins`]: talus_core::config::KeypadConfig::fill_pins
pub fn board_keys_init(bus: &mut impl PlatformBus, board: &BoardInfo) {
    let mut keypad = keypad_config();
    keypad.fill_pins();
    debug_assert!(keypad.validate().is_ok());

    #[cfg(feature = "defmt")]
    defmt::info!("registering keypad controller");
    bus.register(PlatformDevice::Keypad(keypad));

    if board.board_id != BOARD_ONKEY_VARIANT {
        #[cfg(feature = "defmt")]
        defmt::info!("registering PMIC interrupt keys");
        bus.register(PlatformDevice::InterruptKeys(interrupt_keys_config()));
    }
}
