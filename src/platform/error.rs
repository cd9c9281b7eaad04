//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All backends map their hardware-specific failures to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// GPIO operation failed
    Gpio(GpioError),
    /// ADC operation failed
    Adc(AdcError),
    /// Board description rejected during validation
    InvalidConfig(ConfigError),
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Pin id is not below the platform pin count
    OutOfRange { pin: u8, pin_count: u8 },
    /// Write or toggle attempted while the pin is an input or has no direction
    DirectionViolation { pin: u8 },
    /// Pin exists but cannot be used as a GPIO
    Unsupported(u8),
    /// Handle was released or never issued by this backend
    InvalidHandle,
    /// Integer level other than 0 or 1
    InvalidLevel(u8),
    /// Too many simultaneous handles on one pin
    HandleLimit(u8),
}

/// ADC-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Channel index is not below the platform channel count
    ChannelOutOfRange { channel: u8, channel_count: u8 },
    /// Requested value resolution outside 1..=16 bits
    InvalidResolution(u8),
}

/// Board description validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Board declares no pins
    NoPins,
    /// Board declares more pins than the backend can track
    TooManyPins(usize),
    /// Two pins share the same name (index of the second one)
    DuplicatePinName(u8),
    /// ADC resolution of zero bits with ADC channels declared
    ZeroAdcResolution,
    /// Native ADC resolution wider than a raw sample can hold
    AdcResolutionTooHigh(u8),
    /// Supported ADC resolution exceeds the raw maximum
    SupportedAboveMax { supported: u8, max: u8 },
    /// Board declares more ADC channels than the backend can track
    TooManyAdcChannels(u8),
}

impl From<GpioError> for PlatformError {
    fn from(e: GpioError) -> Self {
        PlatformError::Gpio(e)
    }
}

impl From<AdcError> for PlatformError {
    fn from(e: AdcError) -> Self {
        PlatformError::Adc(e)
    }
}

impl From<ConfigError> for PlatformError {
    fn from(e: ConfigError) -> Self {
        PlatformError::InvalidConfig(e)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Gpio(e) => write!(f, "GPIO error: {}", e),
            PlatformError::Adc(e) => write!(f, "ADC error: {}", e),
            PlatformError::InvalidConfig(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::OutOfRange { pin, pin_count } => {
                write!(f, "pin {} out of range (platform has {} pins)", pin, pin_count)
            }
            GpioError::DirectionViolation { pin } => {
                write!(f, "pin {} is not configured as an output", pin)
            }
            GpioError::Unsupported(pin) => write!(f, "pin {} has no GPIO capability", pin),
            GpioError::InvalidHandle => write!(f, "invalid or released pin handle"),
            GpioError::InvalidLevel(v) => write!(f, "invalid logic level {}", v),
            GpioError::HandleLimit(pin) => write!(f, "too many open handles on pin {}", pin),
        }
    }
}

impl fmt::Display for AdcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdcError::ChannelOutOfRange {
                channel,
                channel_count,
            } => write!(
                f,
                "ADC channel {} out of range (platform has {} channels)",
                channel, channel_count
            ),
            AdcError::InvalidResolution(bits) => write!(f, "invalid ADC resolution {} bits", bits),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoPins => write!(f, "board declares no pins"),
            ConfigError::TooManyPins(count) => write!(f, "board declares {} pins", count),
            ConfigError::DuplicatePinName(index) => {
                write!(f, "pin {} reuses an earlier pin name", index)
            }
            ConfigError::ZeroAdcResolution => write!(f, "ADC resolution of 0 bits"),
            ConfigError::AdcResolutionTooHigh(bits) => {
                write!(f, "ADC resolution {} bits exceeds 16", bits)
            }
            ConfigError::SupportedAboveMax { supported, max } => write!(
                f,
                "supported ADC resolution {} bits above maximum {} bits",
                supported, max
            ),
            ConfigError::TooManyAdcChannels(count) => {
                write!(f, "board declares {} ADC channels", count)
            }
        }
    }
}

impl embedded_hal::digital::Error for PlatformError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}
