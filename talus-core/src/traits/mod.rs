//! Seams to external frameworks
//!
//! These traits stand in for infrastructure owned elsewhere: the
//! regulator framework and the platform-device model. Board code talks
//! to them through these interfaces so the glue stays testable on the
//! host.

pub mod regulator;

pub use regulator::{Regulator, RegulatorError};
