//! ADC channel handle

use crate::platform::{board::AdcInfo, error::AdcError, HalBackend, Result};

/// Highest value resolution a channel can report at
pub const MAX_VALUE_BITS: u8 = 16;

/// Handle on one ADC input channel
///
/// The resolution figures are fixed by the platform. The value resolution
/// (what [`read`](Self::read) scales samples to) defaults to the supported
/// resolution and can be changed with [`with_value_bits`](Self::with_value_bits).
pub struct AdcChannel<'a, B: HalBackend + ?Sized> {
    backend: &'a B,
    channel: u8,
    adc: AdcInfo,
    value_bits: u8,
}

impl<'a, B: HalBackend + ?Sized> AdcChannel<'a, B> {
    pub(crate) fn new(backend: &'a B, channel: u8, adc: AdcInfo) -> Self {
        Self {
            backend,
            channel,
            adc,
            value_bits: adc.supported_resolution_bits,
        }
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    /// Native converter resolution in bits
    pub fn max_resolution_bits(&self) -> u8 {
        self.adc.max_resolution_bits
    }

    /// Default reporting resolution in bits
    pub fn supported_resolution_bits(&self) -> u8 {
        self.adc.supported_resolution_bits
    }

    /// Resolution samples are scaled to by `read`
    pub fn value_bits(&self) -> u8 {
        self.value_bits
    }

    /// Report samples at `bits` of resolution instead
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc(AdcError::InvalidResolution)` unless
    /// `bits` is in `1..=MAX_VALUE_BITS`.
    pub fn with_value_bits(self, bits: u8) -> Result<Self> {
        if bits == 0 || bits > MAX_VALUE_BITS {
            return Err(AdcError::InvalidResolution(bits).into());
        }
        Ok(Self {
            value_bits: bits,
            ..self
        })
    }

    /// Raw sample at the native resolution
    pub fn read_raw(&self) -> Result<u16> {
        self.backend.adc_read_raw(self.channel)
    }

    /// Sample scaled to `value_bits()` of resolution
    pub fn read(&self) -> Result<u32> {
        let raw = self.read_raw()?;
        Ok(rescale(raw, self.adc.max_resolution_bits, self.value_bits))
    }

    /// Sample as a fraction of full scale, in `0.0..=1.0`
    pub fn read_normalized(&self) -> Result<f32> {
        let full_scale = (1u32 << self.value_bits) - 1;
        Ok(self.read()? as f32 / full_scale as f32)
    }
}

impl<B: HalBackend + ?Sized> core::fmt::Debug for AdcChannel<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdcChannel")
            .field("channel", &self.channel)
            .field("adc", &self.adc)
            .field("value_bits", &self.value_bits)
            .finish()
    }
}

/// Shift `raw` from `from_bits` to `to_bits` of resolution
fn rescale(raw: u16, from_bits: u8, to_bits: u8) -> u32 {
    let raw = u32::from(raw);
    if from_bits > to_bits {
        raw.checked_shr(u32::from(from_bits - to_bits)).unwrap_or(0)
    } else {
        raw.checked_shl(u32::from(to_bits - from_bits)).unwrap_or(0)
    }
}
