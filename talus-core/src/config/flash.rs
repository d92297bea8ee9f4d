//! Flash/torch LED chip platform data
//!
//! Data-only contract between a board file and the flash driver for the
//! two-LED flash/torch chip. The board file supplies electrical limits,
//! trigger modes and per-LED calibration tables; the driver programs the
//! chip from them. [`FlashUnitConfig::validate`] checks the structural
//! contract (calibration table sizes, datasheet ranges) before the data
//! is handed over.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::MAX_NAME_LEN;
use crate::traits::{Regulator, RegulatorError};

/// Calibrated flash levels per LED must stay below this
pub const MAX_FLASH_LEVELS: usize = 32;

/// Per-LED peak flash current limit
pub const PEAK_CURRENT_LIMIT_MA: u16 = 1000;

/// Combined peak current limit for both LEDs
pub const TOTAL_CURRENT_LIMIT_MA: u16 = 1250;

/// Per-LED sustained torch current limit
pub const TORCH_CURRENT_LIMIT_MA: u16 = 250;

/// Boost output voltage range for flash mode
pub const BOOST_VOUT_MIN_MV: u16 = 3300;
pub const BOOST_VOUT_MAX_MV: u16 = 5000;

/// Low-battery detection threshold range
pub const LOW_BATTERY_THRESHOLD_MIN_MV: u16 = 2400;
pub const LOW_BATTERY_THRESHOLD_MAX_MV: u16 = 3400;

/// Low-battery detection hysteresis range
pub const LOW_BATTERY_HYSTERESIS_MIN_MV: u16 = 100;
pub const LOW_BATTERY_HYSTERESIS_MAX_MV: u16 = 300;

/// Low-battery delay timer range and step
pub const LOW_BATTERY_DELAY_MIN_US: u16 = 256;
pub const LOW_BATTERY_DELAY_MAX_US: u16 = 2048;
pub const LOW_BATTERY_DELAY_STEP_US: u16 = 256;

/// LEDs driven by the chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LedMask {
    Left,
    Right,
    #[default]
    Both,
}

impl LedMask {
    /// Left LED enabled
    pub const fn has_left(self) -> bool {
        matches!(self, LedMask::Left | LedMask::Both)
    }

    /// Right LED enabled
    pub const fn has_right(self) -> bool {
        matches!(self, LedMask::Right | LedMask::Both)
    }
}

/// How a flash pulse is terminated once triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlashTriggerMode {
    /// Triggered on the rising edge, terminated by the safety timer alone
    OneShot,
    /// Terminated by the falling edge or the safety timer, whichever
    /// comes first
    #[default]
    MaxTimer,
}

/// Which signal turns the torch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TorchTriggerSource {
    /// Torch is controlled over the control bus only
    #[default]
    I2c,
    /// High level on the flash-enable pin turns the torch on
    FlashPin,
    /// High level on the torch-enable pin turns the torch on
    TorchPin,
}

/// How a torch phase is terminated once triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TorchTimerMode {
    /// Safety timer disabled, torch follows the trigger signal
    Disabled,
    /// Triggered on the rising edge, terminated by the safety timer alone
    OneShot,
    /// Terminated by the falling edge or the safety timer, whichever
    /// comes first
    #[default]
    MaxTimer,
}

/// Boost converter output behaviour during flash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoostMode {
    /// Output stays at the configured flash voltage
    #[default]
    Fixed,
    /// Output steps up in 100 mV increments until the programmed LED
    /// current is reached
    Adaptive,
}

/// One calibration pair: calibrated flash level to measured luminance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LumiLevel {
    /// Guide number for this level
    pub guide_number: u32,
    /// Measured luminance
    pub luminance: u32,
}

impl LumiLevel {
    /// Create a calibration pair
    pub const fn new(guide_number: u32, luminance: u32) -> Self {
        Self {
            guide_number,
            luminance,
        }
    }
}

/// Per-LED configuration and calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashLedConfig {
    /// Color bin of the fitted LED
    pub color_setting: u16,
    /// Max flash to max torch current ratio, in 1/1000
    pub flash_torch_ratio: u16,
    /// Scale factor carrying fractional settings (1, 10, 100, ...)
    pub granularity: u16,
    /// Declared number of calibrated flash levels
    pub flash_levels: u16,
    /// Calibrated flash level / luminance pairs
    pub lumi_levels: &'static [LumiLevel],
}

impl Default for FlashLedConfig {
    fn default() -> Self {
        Self {
            color_setting: 0,
            flash_torch_ratio: 1000,
            granularity: 1,
            flash_levels: 0,
            lumi_levels: &[],
        }
    }
}

/// Flash config validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashConfigError {
    /// Declared flash-level count does not match the calibration table
    LevelCountMismatch { led: u8 },
    /// Too many calibrated flash levels
    TooManyLevels { led: u8 },
    /// Per-LED peak current above the datasheet limit
    PeakCurrentTooHigh,
    /// Combined peak current above the datasheet limit
    TotalCurrentTooHigh,
    /// Peak current above the combined limit
    PeakAboveTotal,
    /// Torch current above the datasheet limit
    TorchCurrentTooHigh,
    /// Boost output voltage outside the datasheet range
    BoostVoltageOutOfRange,
    /// Low-battery threshold outside the datasheet range
    ThresholdOutOfRange,
    /// Low-battery hysteresis outside the datasheet range
    HysteresisOutOfRange,
    /// Low-battery delay outside the datasheet range
    DelayOutOfRange,
    /// Low-battery delay not a multiple of the timer step
    DelayMisaligned,
}

/// Flash/torch chip configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashUnitConfig {
    /// LED(s) driven by the chip
    pub led_mask: LedMask,
    /// Treat both LEDs as a single light when both are enabled
    pub synchronized_led: bool,
    /// High level on the torch-enable pin fires the flash
    pub flash_on_torch: bool,
    /// Flash pulse termination mode
    pub flash_trigger: FlashTriggerMode,
    /// Torch trigger source
    pub torch_trigger: TorchTriggerSource,
    /// Torch phase termination mode
    pub torch_timer: TorchTimerMode,
    /// Boost converter behaviour during flash
    pub boost_mode: BoostMode,
    /// Boost output voltage for flash mode in mV
    pub boost_vout_flash_mv: u16,
    /// Combined peak current for both LEDs in mA
    pub max_total_current_ma: u16,
    /// Per-LED peak flash current in mA
    pub max_peak_current_ma: u16,
    /// Per-LED sustained torch current in mA
    pub max_torch_current_ma: u16,
    /// Longest time the peak current may be applied, in ms
    pub max_peak_duration_ms: u16,
    /// Low-battery detection threshold in mV
    pub low_battery_threshold_mv: u16,
    /// Low-battery detection hysteresis in mV
    pub low_battery_hysteresis_mv: u16,
    /// Low-battery delay for falling-edge detection, in µs
    pub low_battery_delay_falling_us: u16,
    /// Low-battery delay for rising-edge detection, in µs
    pub low_battery_delay_rising_us: u16,
    /// Per-LED configuration; two identical LEDs are fitted
    pub leds: [FlashLedConfig; 2],
}

impl Default for FlashUnitConfig {
    fn default() -> Self {
        Self {
            led_mask: LedMask::Both,
            synchronized_led: false,
            flash_on_torch: false,
            flash_trigger: FlashTriggerMode::MaxTimer,
            torch_trigger: TorchTriggerSource::I2c,
            torch_timer: TorchTimerMode::MaxTimer,
            boost_mode: BoostMode::Fixed,
            boost_vout_flash_mv: BOOST_VOUT_MIN_MV,
            max_total_current_ma: TOTAL_CURRENT_LIMIT_MA,
            max_peak_current_ma: PEAK_CURRENT_LIMIT_MA,
            max_torch_current_ma: TORCH_CURRENT_LIMIT_MA,
            max_peak_duration_ms: 0,
            low_battery_threshold_mv: LOW_BATTERY_THRESHOLD_MIN_MV,
            low_battery_hysteresis_mv: LOW_BATTERY_HYSTERESIS_MIN_MV,
            low_battery_delay_falling_us: LOW_BATTERY_DELAY_MIN_US,
            low_battery_delay_rising_us: LOW_BATTERY_DELAY_MIN_US,
            leds: [FlashLedConfig::default(); 2],
        }
    }
}

impl FlashUnitConfig {
    /// Check the structural contract of this configuration
    ///
    /// Enabled LEDs must carry a calibration table whose length matches
    /// the declared level count; currents, voltages and delay timers must
    /// stay within the chip's datasheet ranges.
    pub fn validate(&self) -> Result<(), FlashConfigError> {
        let enabled = [self.led_mask.has_left(), self.led_mask.has_right()];
        for (i, led) in self.leds.iter().enumerate() {
            if !enabled[i] {
                continue;
            }
            if led.lumi_levels.len() != led.flash_levels as usize {
                return Err(FlashConfigError::LevelCountMismatch { led: i as u8 });
            }
            if led.flash_levels as usize >= MAX_FLASH_LEVELS {
                return Err(FlashConfigError::TooManyLevels { led: i as u8 });
            }
        }

        if self.max_peak_current_ma > PEAK_CURRENT_LIMIT_MA {
            return Err(FlashConfigError::PeakCurrentTooHigh);
        }
        if self.max_total_current_ma > TOTAL_CURRENT_LIMIT_MA {
            return Err(FlashConfigError::TotalCurrentTooHigh);
        }
        if self.max_peak_current_ma > self.max_total_current_ma {
            return Err(FlashConfigError::PeakAboveTotal);
        }
        if self.max_torch_current_ma > TORCH_CURRENT_LIMIT_MA {
            return Err(FlashConfigError::TorchCurrentTooHigh);
        }
        if self.boost_vout_flash_mv < BOOST_VOUT_MIN_MV
            || self.boost_vout_flash_mv > BOOST_VOUT_MAX_MV
        {
            return Err(FlashConfigError::BoostVoltageOutOfRange);
        }
        if self.low_battery_threshold_mv < LOW_BATTERY_THRESHOLD_MIN_MV
            || self.low_battery_threshold_mv > LOW_BATTERY_THRESHOLD_MAX_MV
        {
            return Err(FlashConfigError::ThresholdOutOfRange);
        }
        if self.low_battery_hysteresis_mv < LOW_BATTERY_HYSTERESIS_MIN_MV
            || self.low_battery_hysteresis_mv > LOW_BATTERY_HYSTERESIS_MAX_MV
        {
            return Err(FlashConfigError::HysteresisOutOfRange);
        }
        for delay in [
            self.low_battery_delay_falling_us,
            self.low_battery_delay_rising_us,
        ] {
            if delay < LOW_BATTERY_DELAY_MIN_US || delay > LOW_BATTERY_DELAY_MAX_US {
                return Err(FlashConfigError::DelayOutOfRange);
            }
            if delay % LOW_BATTERY_DELAY_STEP_US != 0 {
                return Err(FlashConfigError::DelayMisaligned);
            }
        }

        Ok(())
    }
}

/// Strobe pin state to apply while the flash is active
///
/// `mask` selects the pins the driver touches, `values` the level to
/// drive on each selected pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrobePinState {
    pub mask: u16,
    pub values: u16,
}

/// Complete flash-chip platform data handed to the driver
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashPlatformData {
    /// Chip configuration
    pub config: FlashUnitConfig,
    /// Device instance number
    pub instance: u8,
    /// Instance this one is synchronized with, if any
    pub sync_instance: Option<u8>,
    /// Device name exposed to userspace
    pub dev_name: String<MAX_NAME_LEN>,
    /// Pin state to apply while the flash is active
    pub strobe_pin_state: StrobePinState,
    /// GPIO wired to the strobe signal, if any
    pub strobe_gpio: Option<u8>,
}

impl Default for FlashPlatformData {
    fn default() -> Self {
        Self {
            config: FlashUnitConfig::default(),
            instance: 0,
            sync_instance: None,
            dev_name: String::new(),
            strobe_pin_state: StrobePinState::default(),
            strobe_gpio: None,
        }
    }
}

/// Power rails feeding the flash chip
///
/// Handles to the three regulators the chip depends on. The rails are
/// owned by the external regulator framework; this structure only
/// sequences them.
#[derive(Debug)]
pub struct FlashPowerRail<R: Regulator> {
    /// Module power
    pub vbus: R,
    /// Host interface power
    pub vio: R,
    /// Control bus power
    pub i2c: R,
}

impl<R: Regulator> FlashPowerRail<R> {
    /// Create the rail set
    pub fn new(vbus: R, vio: R, i2c: R) -> Self {
        Self { vbus, vio, i2c }
    }

    /// Bring the rails up: module power first, then host interface,
    /// then control bus
    pub fn power_on(&mut self) -> Result<(), RegulatorError> {
        self.vbus.enable()?;
        self.vio.enable()?;
        self.i2c.enable()
    }

    /// Bring the rails down in reverse order
    pub fn power_off(&mut self) -> Result<(), RegulatorError> {
        self.i2c.disable()?;
        self.vio.disable()?;
        self.vbus.disable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LUMI: [LumiLevel; 3] = [
        LumiLevel::new(140, 100),
        LumiLevel::new(200, 210),
        LumiLevel::new(280, 420),
    ];

    fn led() -> FlashLedConfig {
        FlashLedConfig {
            color_setting: 0,
            flash_torch_ratio: 1824,
            granularity: 10,
            flash_levels: 3,
            lumi_levels: &LUMI,
        }
    }

    fn config() -> FlashUnitConfig {
        FlashUnitConfig {
            led_mask: LedMask::Both,
            synchronized_led: true,
            boost_vout_flash_mv: 4200,
            max_total_current_ma: 1000,
            max_peak_current_ma: 600,
            max_torch_current_ma: 150,
            max_peak_duration_ms: 800,
            low_battery_threshold_mv: 3000,
            low_battery_hysteresis_mv: 100,
            low_battery_delay_falling_us: 256,
            low_battery_delay_rising_us: 512,
            leds: [led(), led()],
            ..FlashUnitConfig::default()
        }
    }

    #[test]
    fn validate_accepts_datasheet_ranges() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_level_count_mismatch() {
        let mut cfg = config();
        cfg.leds[1].flash_levels = 5;
        assert_eq!(
            cfg.validate(),
            Err(FlashConfigError::LevelCountMismatch { led: 1 })
        );
    }

    #[test]
    fn validate_skips_disabled_led() {
        let mut cfg = config();
        cfg.led_mask = LedMask::Left;
        cfg.leds[1].flash_levels = 5;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_peak_current_over_limit() {
        let mut cfg = config();
        cfg.max_peak_current_ma = PEAK_CURRENT_LIMIT_MA + 1;
        assert_eq!(cfg.validate(), Err(FlashConfigError::PeakCurrentTooHigh));
    }

    #[test]
    fn validate_rejects_peak_above_total() {
        let mut cfg = config();
        cfg.max_total_current_ma = 500;
        assert_eq!(cfg.validate(), Err(FlashConfigError::PeakAboveTotal));
    }

    #[test]
    fn validate_rejects_misaligned_delay() {
        let mut cfg = config();
        cfg.low_battery_delay_rising_us = 300;
        assert_eq!(cfg.validate(), Err(FlashConfigError::DelayMisaligned));
    }

    #[test]
    fn validate_rejects_threshold_out_of_range() {
        let mut cfg = config();
        cfg.low_battery_threshold_mv = 2000;
        assert_eq!(cfg.validate(), Err(FlashConfigError::ThresholdOutOfRange));
    }

    #[test]
    fn led_mask_selection() {
        assert!(LedMask::Both.has_left() && LedMask::Both.has_right());
        assert!(LedMask::Left.has_left() && !LedMask::Left.has_right());
        assert!(!LedMask::Right.has_left() && LedMask::Right.has_right());
    }

    mod power {
        use super::*;

        #[derive(Default)]
        struct FakeRegulator {
            enabled: bool,
            transitions: u8,
        }

        impl Regulator for FakeRegulator {
            fn enable(&mut self) -> Result<(), RegulatorError> {
                self.enabled = true;
                self.transitions += 1;
                Ok(())
            }

            fn disable(&mut self) -> Result<(), RegulatorError> {
                self.enabled = false;
                self.transitions += 1;
                Ok(())
            }

            fn is_enabled(&self) -> bool {
                self.enabled
            }
        }

        #[test]
        fn power_on_enables_all_rails() {
            let mut rail = FlashPowerRail::new(
                FakeRegulator::default(),
                FakeRegulator::default(),
                FakeRegulator::default(),
            );
            rail.power_on().unwrap();
            assert!(rail.vbus.is_enabled());
            assert!(rail.vio.is_enabled());
            assert!(rail.i2c.is_enabled());

            rail.power_off().unwrap();
            assert!(!rail.vbus.is_enabled());
            assert_eq!(rail.vbus.transitions, 2);
        }
    }
}
