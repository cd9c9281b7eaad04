//! Platform description snapshot

use super::board::AdcInfo;
use super::traits::HalBackend;

/// Read-only description of the running platform
///
/// Built once from a backend and passed around by reference. It never
/// changes afterwards, so any number of readers may share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    name: &'static str,
    pin_count: u8,
    adc: AdcInfo,
    adc_channel_count: u8,
}

impl PlatformInfo {
    /// Create a platform description from its parts
    pub const fn new(
        name: &'static str,
        pin_count: u8,
        adc: AdcInfo,
        adc_channel_count: u8,
    ) -> Self {
        Self {
            name,
            pin_count,
            adc,
            adc_channel_count,
        }
    }

    /// Snapshot the description a backend reports
    pub fn query<B: HalBackend + ?Sized>(backend: &B) -> Self {
        Self::new(
            backend.platform_name(),
            backend.pin_count(),
            AdcInfo {
                max_resolution_bits: backend.adc_max_resolution_bits(),
                supported_resolution_bits: backend.adc_supported_resolution_bits(),
            },
            backend.adc_channel_count(),
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Total number of GPIO pins
    pub fn pin_count(&self) -> u8 {
        self.pin_count
    }

    /// Native ADC resolution in bits
    pub fn adc_max_resolution_bits(&self) -> u8 {
        self.adc.max_resolution_bits
    }

    /// Default ADC reporting resolution in bits
    pub fn adc_supported_resolution_bits(&self) -> u8 {
        self.adc.supported_resolution_bits
    }

    pub fn adc_channel_count(&self) -> u8 {
        self.adc_channel_count
    }

    pub fn adc(&self) -> AdcInfo {
        self.adc
    }

    /// Whether `pin` lies in `0..pin_count()`
    pub fn is_valid_pin(&self, pin: u8) -> bool {
        pin < self.pin_count
    }
}
