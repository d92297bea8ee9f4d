//! Keypad-controller platform data
//!
//! The keypad controller scans a row/column matrix through a shared pool of
//! controller pins. A board file supplies the keymap, the wake-key list and
//! the row/column counts; [`KeypadConfig::fill_pins`] then assigns every
//! pin its matrix role before the device is registered.

use super::types::KeyCode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum matrix rows the controller can scan
pub const MAX_ROWS: usize = 16;

/// Maximum matrix columns the controller can scan
pub const MAX_COLS: usize = 8;

/// Controller pins available for row/column duty
pub const MAX_PINS: usize = 24;

/// First controller pin the mux can route as a column
pub const COL_PIN_BASE: usize = 11;

/// Scan-clock cycles per millisecond (32 kHz scan clock)
pub const SCAN_CLOCK_CYCLES_PER_MS: u16 = 32;

/// One keymap entry: matrix position to key code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyEntry {
    /// Matrix row index
    pub row: u8,
    /// Matrix column index
    pub col: u8,
    /// Key code reported for this position
    pub code: KeyCode,
}

impl KeyEntry {
    /// Create a keymap entry
    pub const fn new(row: u8, col: u8, code: KeyCode) -> Self {
        Self { row, col, code }
    }
}

/// A matrix position allowed to wake the system from suspend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WakeKey {
    /// Matrix row index
    pub row: u8,
    /// Matrix column index
    pub col: u8,
}

impl WakeKey {
    /// Create a wake-key entry
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Role assigned to one controller pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinRole {
    /// Pin not used by the matrix
    #[default]
    Unused,
    /// Pin drives a matrix row
    Row,
    /// Pin senses a matrix column
    Col,
}

/// One controller pin with its matrix role
///
/// `num` is the row or column index the pin serves, not the pin number;
/// the pin number is the entry's position in the pin array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinAssignment {
    /// Row or column index served by this pin
    pub num: u8,
    /// Matrix role of this pin
    pub role: PinRole,
}

/// Keymap consistency errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadConfigError {
    /// Keymap entry row index outside the board's row count
    RowOutOfRange { row: u8 },
    /// Keymap entry column index outside the board's column count
    ColOutOfRange { col: u8 },
    /// Two keymap entries claim the same matrix position
    DuplicateEntry { row: u8, col: u8 },
    /// Wake-key position has no keymap entry
    WakeKeyNotMapped { row: u8, col: u8 },
    /// The designated wakeup key is missing from the wake-key list
    WakeupKeyNotWakeCapable,
    /// The designated wakeup key does not appear in the keymap
    WakeupKeyNotMapped,
}

/// Keypad-controller platform data
///
/// Filled by the board file before registration and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadConfig {
    /// Rows wired on this board
    pub row_count: u8,
    /// Columns wired on this board
    pub col_count: u8,
    /// Debounce time in scan-clock cycles
    pub debounce_cycles: u16,
    /// Repeat delay in scan-clock cycles
    pub repeat_cycles: u16,
    /// Matrix scans per debounce decision
    pub scan_count: u8,
    /// Controller may wake the system from suspend
    pub wakeup: bool,
    /// Matrix keymap
    pub keymap: &'static [KeyEntry],
    /// Matrix positions allowed to wake the system
    pub wake_keys: &'static [WakeKey],
    /// Key code of the designated wakeup key
    pub wakeup_key: KeyCode,
    /// Suppress key auto-repeat events
    pub suppress_event_repeat: bool,
    /// Per-pin matrix roles, indexed by pin number
    pub pins: [PinAssignment; MAX_PINS],
}

impl KeypadConfig {
    /// Assign matrix roles to the controller pins
    ///
    /// Rows occupy pins `[0, row_count)` with `num` equal to the pin
    /// number; columns occupy pins `[COL_PIN_BASE, COL_PIN_BASE +
    /// col_count)` with `num` counted from the base. Every other pin is
    /// left `Unused`.
    ///
    /// # Panics
    ///
    /// Panics when the row/column counts exceed the controller pin budget.
    /// A board definition that overflows the budget is a build-time bug,
    /// not a recoverable runtime condition, so boot halts here.
    pub fn fill_pins(&mut self) {
        let rows = self.row_count as usize;
        let cols = self.col_count as usize;

        assert!(
            rows + cols <= MAX_PINS,
            "keypad pin budget exceeded: {} rows + {} cols > {} pins",
            rows,
            cols,
            MAX_PINS
        );
        assert!(rows <= COL_PIN_BASE, "keypad rows overlap the column pins");
        assert!(
            COL_PIN_BASE + cols <= MAX_PINS,
            "keypad columns run past the last controller pin"
        );

        for pin in 0..rows {
            self.pins[pin] = PinAssignment {
                num: pin as u8,
                role: PinRole::Row,
            };
        }
        for col in 0..cols {
            self.pins[COL_PIN_BASE + col] = PinAssignment {
                num: col as u8,
                role: PinRole::Col,
            };
        }
    }

    /// Check keymap and wake-key consistency
    ///
    /// Verifies that every keymap entry stays inside the wired matrix,
    /// that no position is mapped twice, that every wake key resolves to
    /// a keymap entry, and that the designated wakeup key is both mapped
    /// and wake-capable.
    pub fn validate(&self) -> Result<(), KeypadConfigError> {
        for entry in self.keymap {
            if entry.row >= self.row_count {
                return Err(KeypadConfigError::RowOutOfRange { row: entry.row });
            }
            if entry.col >= self.col_count {
                return Err(KeypadConfigError::ColOutOfRange { col: entry.col });
            }
        }

        for (i, entry) in self.keymap.iter().enumerate() {
            let duplicate = self.keymap[..i]
                .iter()
                .any(|other| other.row == entry.row && other.col == entry.col);
            if duplicate {
                return Err(KeypadConfigError::DuplicateEntry {
                    row: entry.row,
                    col: entry.col,
                });
            }
        }

        for wake in self.wake_keys {
            let mapped = self
                .keymap
                .iter()
                .any(|entry| entry.row == wake.row && entry.col == wake.col);
            if !mapped {
                return Err(KeypadConfigError::WakeKeyNotMapped {
                    row: wake.row,
                    col: wake.col,
                });
            }
        }

        if self.wakeup {
            let wakeup_entry = self
                .keymap
                .iter()
                .find(|entry| entry.code == self.wakeup_key)
                .ok_or(KeypadConfigError::WakeupKeyNotMapped)?;

            let wake_capable = self
                .wake_keys
                .iter()
                .any(|wake| wake.row == wakeup_entry.row && wake.col == wakeup_entry.col);
            if !wake_capable {
                return Err(KeypadConfigError::WakeupKeyNotWakeCapable);
            }
        }

        Ok(())
    }

    /// Look up the key code at a matrix position
    pub fn key_at(&self, row: u8, col: u8) -> Option<KeyCode> {
        self.keymap
            .iter()
            .find(|entry| entry.row == row && entry.col == col)
            .map(|entry| entry.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYMAP: [KeyEntry; 3] = [
        KeyEntry::new(0, 0, KeyCode::Power),
        KeyEntry::new(0, 1, KeyCode::Home),
        KeyEntry::new(1, 0, KeyCode::VolumeUp),
    ];

    const WAKE_KEYS: [WakeKey; 1] = [WakeKey::new(0, 0)];

    fn config() -> KeypadConfig {
        KeypadConfig {
            row_count: 2,
            col_count: 2,
            debounce_cycles: 20 * SCAN_CLOCK_CYCLES_PER_MS,
            repeat_cycles: 1,
            scan_count: 30,
            wakeup: true,
            keymap: &KEYMAP,
            wake_keys: &WAKE_KEYS,
            wakeup_key: KeyCode::Power,
            suppress_event_repeat: false,
            pins: [PinAssignment::default(); MAX_PINS],
        }
    }

    #[test]
    fn fill_pins_assigns_rows_then_columns() {
        let mut cfg = config();
        cfg.fill_pins();

        for pin in 0..2 {
            assert_eq!(cfg.pins[pin].role, PinRole::Row);
            assert_eq!(cfg.pins[pin].num, pin as u8);
        }
        for col in 0..2 {
            assert_eq!(cfg.pins[COL_PIN_BASE + col].role, PinRole::Col);
            assert_eq!(cfg.pins[COL_PIN_BASE + col].num, col as u8);
        }

        let assigned: usize = cfg
            .pins
            .iter()
            .filter(|pin| pin.role != PinRole::Unused)
            .count();
        assert_eq!(assigned, 4);
    }

    #[test]
    #[should_panic(expected = "pin budget exceeded")]
    fn fill_pins_panics_on_pin_budget_overflow() {
        let mut cfg = config();
        cfg.row_count = 20;
        cfg.col_count = 8;
        cfg.fill_pins();
    }

    #[test]
    fn validate_accepts_consistent_tables() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_out_of_range_row() {
        const BAD: [KeyEntry; 1] = [KeyEntry::new(5, 0, KeyCode::Home)];
        let mut cfg = config();
        cfg.keymap = &BAD;
        cfg.wake_keys = &[];
        cfg.wakeup = false;
        assert_eq!(cfg.validate(), Err(KeypadConfigError::RowOutOfRange { row: 5 }));
    }

    #[test]
    fn validate_rejects_duplicate_position() {
        const BAD: [KeyEntry; 2] = [
            KeyEntry::new(0, 0, KeyCode::Power),
            KeyEntry::new(0, 0, KeyCode::Home),
        ];
        let mut cfg = config();
        cfg.keymap = &BAD;
        assert_eq!(
            cfg.validate(),
            Err(KeypadConfigError::DuplicateEntry { row: 0, col: 0 })
        );
    }

    #[test]
    fn validate_rejects_unmapped_wake_key() {
        const WAKE: [WakeKey; 1] = [WakeKey::new(1, 1)];
        let mut cfg = config();
        cfg.wake_keys = &WAKE;
        assert_eq!(
            cfg.validate(),
            Err(KeypadConfigError::WakeKeyNotMapped { row: 1, col: 1 })
        );
    }

    #[test]
    fn validate_rejects_wakeup_key_outside_wake_list() {
        let mut cfg = config();
        cfg.wakeup_key = KeyCode::Home;
        assert_eq!(
            cfg.validate(),
            Err(KeypadConfigError::WakeupKeyNotWakeCapable)
        );
    }

    #[test]
    fn key_lookup() {
        let cfg = config();
        assert_eq!(cfg.key_at(0, 1), Some(KeyCode::Home));
        assert_eq!(cfg.key_at(1, 1), None);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fill_pins_layout(rows in 0..=COL_PIN_BASE, cols in 0..=MAX_COLS) {
                let mut cfg = config();
                cfg.row_count = rows as u8;
                cfg.col_count = cols as u8;
                cfg.fill_pins();

                for (pin, assignment) in cfg.pins.iter().enumerate() {
                    if pin < rows {
                        prop_assert_eq!(assignment.role, PinRole::Row);
                        prop_assert_eq!(assignment.num as usize, pin);
                    } else if pin >= COL_PIN_BASE && pin < COL_PIN_BASE + cols {
                        prop_assert_eq!(assignment.role, PinRole::Col);
                        prop_assert_eq!(assignment.num as usize, pin - COL_PIN_BASE);
                    } else {
                        prop_assert_eq!(assignment.role, PinRole::Unused);
                    }
                }
            }
        }
    }
}
