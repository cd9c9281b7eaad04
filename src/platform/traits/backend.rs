//! Hardware backend trait
//!
//! This module defines the boundary between the typed handles in [`crate::hal`]
//! and whatever drives the pins underneath: real registers or an in-memory
//! simulation.

use super::{Direction, Level};
use crate::platform::Result;

/// Opaque token for one acquired GPIO handle
///
/// Issued by [`HalBackend::gpio_acquire`] and only meaningful to the backend
/// that issued it. Several tokens may refer to the same physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawGpio {
    pin: u8,
    token: u16,
}

impl RawGpio {
    /// Create a token for `pin`
    ///
    /// Backends pick `token` so it is unique among the live handles of
    /// that pin.
    pub const fn new(pin: u8, token: u16) -> Self {
        Self { pin, token }
    }

    /// Physical pin the token refers to
    pub const fn pin(&self) -> u8 {
        self.pin
    }

    /// Backend-specific handle number
    pub const fn token(&self) -> u16 {
        self.token
    }
}

/// Hardware backend trait
///
/// Backends take `&self` everywhere and use interior mutability, so several
/// handles can share one backend by reference.
///
/// # Safety Invariants
///
/// - The platform description (`platform_name`, `pin_count`, ADC figures)
///   never changes for the lifetime of the backend
/// - No concurrent access to the same GPIO pin from multiple contexts;
///   concurrent writers produce last-write-wins state
pub trait HalBackend {
    /// Human-readable platform name
    fn platform_name(&self) -> &'static str;

    /// Total number of GPIO pins exposed by the platform
    fn pin_count(&self) -> u8;

    /// Native (raw) ADC resolution in bits
    fn adc_max_resolution_bits(&self) -> u8;

    /// Standard ADC resolution in bits reported to callers by default
    fn adc_supported_resolution_bits(&self) -> u8;

    /// Number of ADC input channels
    fn adc_channel_count(&self) -> u8;

    /// Acquire a handle on `pin`
    ///
    /// # Errors
    ///
    /// Returns `GpioError::OutOfRange` if `pin >= pin_count()` and
    /// `GpioError::Unsupported` if the pin cannot act as a GPIO.
    fn gpio_acquire(&self, pin: u8) -> Result<RawGpio>;

    /// Set the direction of the pin behind `handle`
    ///
    /// `OutHigh`/`OutLow` drive the level in the same step.
    fn gpio_set_direction(&self, handle: RawGpio, direction: Direction) -> Result<()>;

    /// Last direction set on the pin, `None` if never set
    fn gpio_read_direction(&self, handle: RawGpio) -> Result<Option<Direction>>;

    /// Drive the pin to `level`
    ///
    /// # Errors
    ///
    /// Returns `GpioError::DirectionViolation` unless the pin is an output.
    fn gpio_write(&self, handle: RawGpio, level: Level) -> Result<()>;

    /// Read the pin level
    ///
    /// Outputs return the driven level, inputs the sampled line level.
    fn gpio_read(&self, handle: RawGpio) -> Result<Level>;

    /// Release `handle`
    ///
    /// Never fails; releasing an unknown handle is a no-op.
    fn gpio_release(&self, handle: RawGpio);

    /// Raw ADC sample at `adc_max_resolution_bits()` precision
    fn adc_read_raw(&self, channel: u8) -> Result<u16>;
}
