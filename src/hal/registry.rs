//! Pin registry
//!
//! Entry point for callers: validates ids against the platform description
//! and hands out [`GpioPin`] and [`AdcChannel`] handles.

use super::{AdcChannel, GpioPin};
use crate::platform::{
    error::{AdcError, GpioError},
    HalBackend, PlatformInfo, Result,
};

/// Hands out typed handles on a backend
///
/// The platform description is queried once in [`new`](Self::new) and kept
/// for the registry's lifetime.
pub struct PinRegistry<'a, B: HalBackend + ?Sized> {
    backend: &'a B,
    info: PlatformInfo,
}

impl<'a, B: HalBackend + ?Sized> PinRegistry<'a, B> {
    /// Create a registry over `backend`
    pub fn new(backend: &'a B) -> Self {
        let info = PlatformInfo::query(backend);
        crate::log_info!(
            "platform '{}': {} GPIO pins, ADC {}/{} bits",
            info.name(),
            info.pin_count(),
            info.adc_supported_resolution_bits(),
            info.adc_max_resolution_bits()
        );
        Self { backend, info }
    }

    /// Platform description
    pub fn info(&self) -> &PlatformInfo {
        &self.info
    }

    /// Acquire a handle on `pin`
    ///
    /// The same pin may be acquired more than once; the handles share state.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::OutOfRange)` if `pin` is not
    /// below the platform pin count, or whatever the backend reports.
    pub fn acquire(&self, pin: u8) -> Result<GpioPin<'a, B>> {
        if !self.info.is_valid_pin(pin) {
            crate::log_warn!(
                "pin {} out of range (pin count {})",
                pin,
                self.info.pin_count()
            );
            return Err(GpioError::OutOfRange {
                pin,
                pin_count: self.info.pin_count(),
            }
            .into());
        }
        let raw = self.backend.gpio_acquire(pin)?;
        crate::log_debug!("pin {} acquired", pin);
        Ok(GpioPin::new(self.backend, raw))
    }

    /// Release a handle
    ///
    /// Equivalent to dropping it.
    pub fn release(&self, pin: GpioPin<'a, B>) {
        pin.release();
    }

    /// Run `f` with a freshly acquired handle on `pin`
    ///
    /// The handle is released when `f` returns, whatever it returns.
    pub fn with_pin<R>(&self, pin: u8, f: impl FnOnce(&mut GpioPin<'a, B>) -> R) -> Result<R> {
        let mut handle = self.acquire(pin)?;
        Ok(f(&mut handle))
    }

    /// Open ADC input `channel` at the platform's supported resolution
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc(AdcError::ChannelOutOfRange)` if the
    /// platform has no such channel.
    pub fn adc(&self, channel: u8) -> Result<AdcChannel<'a, B>> {
        let channel_count = self.info.adc_channel_count();
        if channel >= channel_count {
            return Err(AdcError::ChannelOutOfRange {
                channel,
                channel_count,
            }
            .into());
        }
        Ok(AdcChannel::new(self.backend, channel, self.info.adc()))
    }
}

impl<B: HalBackend + ?Sized> core::fmt::Debug for PinRegistry<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PinRegistry")
            .field("info", &self.info)
            .finish()
    }
}
