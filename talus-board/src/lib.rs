//! Board glue for the Talus tablet reference board
//!
//! Static key configuration for the Talus tablet: the matrix keymap and
//! wake keys scanned by the keypad controller, the PMIC-routed power-key
//! interrupt buttons, and the init routine that fills the controller pin
//! roles and registers both devices on the platform bus.

#![no_std]
#![deny(unsafe_code)]

pub mod init;
pub mod keymap;
pub mod pmic;

pub use init::{board_keys_init, BOARD_ONKEY_VARIANT};
