//! Board-agnostic platform data schemas for the Talus tablet
//!
//! This crate contains the shared shapes a board file fills in and the
//! matching drivers consume:
//!
//! - Keypad-controller platform data (matrix keymap, wake keys, pin roles)
//! - Interrupt-backed button platform data (PMIC-routed power key)
//! - Flash/torch LED chip platform data (electrical limits, trigger modes,
//!   calibration tables)
//! - The platform-device registration seam and the regulator seam
//!
//! No driver logic lives here; everything is populated once during board
//! bring-up and treated as read-only afterwards.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod platform;
pub mod traits;
