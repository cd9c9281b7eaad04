//! Board description types and validation
//!
//! A board is described statically: a name, one [`PinInfo`] per physical pin
//! and the ADC characteristics. Backends validate the description once at
//! start-up and treat it as immutable afterwards.

use bitflags::bitflags;

use crate::platform::error::ConfigError;

/// Maximum number of pins a board description may declare
pub const MAX_PINS: usize = 32;

/// Widest native ADC resolution a raw `u16` sample can carry
pub const MAX_ADC_RESOLUTION_BITS: u8 = 16;

bitflags! {
    /// Functions a physical pin can take on
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PinCapabilities: u8 {
        /// Pin is wired and usable at all
        const VALID = 0b0000_0001;
        /// Digital input/output
        const GPIO = 0b0000_0010;
        /// PWM output
        const PWM = 0b0000_0100;
        /// Memory-mapped fast GPIO
        const FAST_GPIO = 0b0000_1000;
        /// SPI signal
        const SPI = 0b0001_0000;
        /// I2C signal
        const I2C = 0b0010_0000;
        /// Analog input
        const AIO = 0b0100_0000;
        /// UART signal
        const UART = 0b1000_0000;
    }
}

/// Static description of one physical pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinInfo {
    /// Board silkscreen name
    pub name: &'static str,
    /// What the pin can do
    pub capabilities: PinCapabilities,
}

impl PinInfo {
    /// Create a pin description
    pub const fn new(name: &'static str, capabilities: PinCapabilities) -> Self {
        Self { name, capabilities }
    }

    /// Whether the pin can be acquired as a GPIO
    pub fn is_gpio(&self) -> bool {
        self.capabilities
            .contains(PinCapabilities::VALID | PinCapabilities::GPIO)
    }
}

/// ADC characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcInfo {
    /// Native converter resolution in bits
    pub max_resolution_bits: u8,
    /// Resolution samples are reported at by default
    pub supported_resolution_bits: u8,
}

/// Board-level description
#[derive(Debug, Clone, Copy)]
pub struct BoardDescription {
    /// Platform name
    pub name: &'static str,
    /// Pins indexed by pin id
    pub pins: &'static [PinInfo],
    /// ADC characteristics
    pub adc: AdcInfo,
    /// Number of ADC input channels
    pub adc_channels: u8,
}

const MOCK_PINS: [PinInfo; 1] = [PinInfo::new(
    "GPIO0",
    PinCapabilities::VALID.union(PinCapabilities::GPIO),
)];

/// The simulated board: a single GPIO pin and a 12-bit ADC reported at 10 bits
pub const MOCK_BOARD: BoardDescription = BoardDescription {
    name: "pin_hal mock platform",
    pins: &MOCK_PINS,
    adc: AdcInfo {
        max_resolution_bits: 12,
        supported_resolution_bits: 10,
    },
    adc_channels: 1,
};

impl BoardDescription {
    /// Validate the description
    ///
    /// Checks that:
    /// - At least one and at most `MAX_PINS` pins are declared
    /// - Pin names are unique
    /// - ADC resolutions are non-zero when channels are declared
    /// - The native resolution fits a `u16` sample
    /// - The supported resolution does not exceed the native one
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        use heapless::index_set::FnvIndexSet;

        if self.pins.is_empty() {
            return Err(ConfigError::NoPins);
        }
        if self.pins.len() > MAX_PINS {
            return Err(ConfigError::TooManyPins(self.pins.len()));
        }

        let mut names = FnvIndexSet::<&'static str, MAX_PINS>::new();
        for (index, pin) in self.pins.iter().enumerate() {
            if !names.insert(pin.name).unwrap_or(false) {
                return Err(ConfigError::DuplicatePinName(index as u8));
            }
        }

        let adc = self.adc;
        if self.adc_channels > 0
            && (adc.max_resolution_bits == 0 || adc.supported_resolution_bits == 0)
        {
            return Err(ConfigError::ZeroAdcResolution);
        }
        if adc.max_resolution_bits > MAX_ADC_RESOLUTION_BITS {
            return Err(ConfigError::AdcResolutionTooHigh(adc.max_resolution_bits));
        }
        if adc.supported_resolution_bits > adc.max_resolution_bits {
            return Err(ConfigError::SupportedAboveMax {
                supported: adc.supported_resolution_bits,
                max: adc.max_resolution_bits,
            });
        }

        Ok(())
    }

    /// Number of pins, saturating at `u8::MAX`
    pub fn pin_count(&self) -> u8 {
        u8::try_from(self.pins.len()).unwrap_or(u8::MAX)
    }

    /// Description of `pin`, if the board has it
    pub fn pin(&self, pin: u8) -> Option<&PinInfo> {
        self.pins.get(pin as usize)
    }
}
