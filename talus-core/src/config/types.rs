//! Shared configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum device-name length
pub const MAX_NAME_LEN: usize = 16;

/// Logical key codes reported by the input devices on this board
///
/// Only the codes actually wired on the Talus matrix and the PMIC power
/// key are listed; `Reserved` marks a populated matrix position with no
/// function assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyCode {
    /// No function assigned
    #[default]
    Reserved,
    Power,
    Home,
    VolumeUp,
    VolumeDown,
    Camera,
    Num2,
}
