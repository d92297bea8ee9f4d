//! Voltage regulator seam

/// Errors reported by a regulator handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegulatorError {
    /// Rail not present or not yet registered
    Unavailable,
    /// The rail refused to switch on
    EnableFailed,
    /// The rail refused to switch off
    DisableFailed,
}

/// Handle to one voltage rail
///
/// The rail itself is owned by the external regulator framework; this
/// trait only exposes the switching operations board glue needs.
pub trait Regulator {
    /// Switch the rail on
    fn enable(&mut self) -> Result<(), RegulatorError>;

    /// Switch the rail off
    fn disable(&mut self) -> Result<(), RegulatorError>;

    /// Whether the rail is currently on
    fn is_enabled(&self) -> bool;
}
