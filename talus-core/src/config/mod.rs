//! Platform data types
//!
//! Board-agnostic configuration structures handed to drivers at
//! registration time.

pub mod flash;
pub mod keypad;
pub mod keys;
pub mod types;

pub use flash::*;
pub use keypad::*;
pub use keys::*;
pub use types::*;
