//! PMIC interrupt numbering
//!
//! The PMIC's interrupt controller owns a block of lines above the SoC
//! interrupts. The ON/OFF key reports two press variants on separate
//! lines; both are wired to the interrupt-keys device rather than a
//! GPIO.

/// First interrupt line owned by the PMIC interrupt controller
pub const PMIC_IRQ_BASE: u16 = 384;

/// ON/OFF key released (falling edge on the EN0 input)
pub const ONKEY_FALLING_OFFSET: u16 = 5;

/// ON/OFF key held for one second
pub const ONKEY_HOLD_1S_OFFSET: u16 = 6;

/// Interrupt line for the short-press power key
pub const ONKEY_FALLING_IRQ: u16 = PMIC_IRQ_BASE + ONKEY_FALLING_OFFSET;

/// Interrupt line for the 1-second-hold power key
pub const ONKEY_HOLD_1S_IRQ: u16 = PMIC_IRQ_BASE + ONKEY_HOLD_1S_OFFSET;
