//! Mock board implementation for testing

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Vec;

use super::MockPin;
use crate::platform::{
    board::{BoardDescription, MAX_PINS, MOCK_BOARD},
    error::{AdcError, ConfigError, GpioError},
    traits::{Direction, HalBackend, Level, RawGpio},
    Result,
};

/// Maximum number of ADC channels on a mock board
pub const MAX_ADC_CHANNELS: usize = 8;

#[derive(Debug)]
struct MockState {
    pins: Vec<MockPin, MAX_PINS>,
    adc_raw: Vec<u16, MAX_ADC_CHANNELS>,
    next_token: u16,
}

/// Mock board implementation
///
/// Simulates the pins and ADC of a [`BoardDescription`] in memory. State is
/// kept behind a critical-section mutex, so one board can be shared by
/// reference between any number of pin handles.
///
/// # Example
///
/// ```
/// use pin_hal::platform::mock::MockBoard;
/// use pin_hal::{Direction, Level, PinRegistry};
///
/// let board = MockBoard::new();
/// let registry = PinRegistry::new(&board);
/// let mut pin = registry.acquire(0).unwrap();
/// pin.set_direction(Direction::Out).unwrap();
/// pin.write(Level::High).unwrap();
/// ```
pub struct MockBoard {
    description: BoardDescription,
    state: Mutex<RefCell<MockState>>,
}

impl MockBoard {
    /// Create the default mock board (one GPIO, 12-bit ADC reported at 10 bits)
    pub fn new() -> Self {
        Self::build(MOCK_BOARD)
    }

    /// Create a mock board from a custom description
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if the description fails
    /// validation or declares more than `MAX_ADC_CHANNELS` channels.
    pub fn with_description(description: BoardDescription) -> Result<Self> {
        description.validate()?;
        if description.adc_channels as usize > MAX_ADC_CHANNELS {
            return Err(ConfigError::TooManyAdcChannels(description.adc_channels).into());
        }
        Ok(Self::build(description))
    }

    fn build(description: BoardDescription) -> Self {
        let pin_count = description.pins.len().min(MAX_PINS);
        let channel_count = (description.adc_channels as usize).min(MAX_ADC_CHANNELS);
        crate::log_debug!(
            "mock board '{}': {} pins, {} ADC channels",
            description.name,
            pin_count,
            channel_count
        );
        Self {
            description,
            state: Mutex::new(RefCell::new(MockState {
                pins: (0..pin_count).map(|_| MockPin::new()).collect(),
                adc_raw: (0..channel_count).map(|_| 0).collect(),
                next_token: 0,
            })),
        }
    }

    /// The board description this mock simulates
    pub fn description(&self) -> &BoardDescription {
        &self.description
    }

    /// Set the level of the external line on `pin` (for simulating input reads)
    pub fn inject_level(&self, pin: u8, level: Level) -> Result<()> {
        let pin_count = self.pin_count();
        self.with_state(|state| {
            let mock = state
                .pins
                .get_mut(pin as usize)
                .ok_or(GpioError::OutOfRange { pin, pin_count })?;
            mock.set_line(level);
            Ok(())
        })
    }

    /// Set the raw sample returned by `channel`
    ///
    /// Values above the native resolution are clamped to full scale.
    pub fn set_adc_raw(&self, channel: u8, value: u16) -> Result<()> {
        let full_scale = 1u32
            .checked_shl(u32::from(self.adc_max_resolution_bits()))
            .map_or(u32::MAX, |v| v - 1);
        let clamped = u32::from(value).min(full_scale) as u16;
        let channel_count = self.adc_channel_count();
        self.with_state(|state| {
            let slot = state
                .adc_raw
                .get_mut(channel as usize)
                .ok_or(AdcError::ChannelOutOfRange {
                    channel,
                    channel_count,
                })?;
            *slot = clamped;
            Ok(())
        })
    }

    /// Number of handles currently open on `pin` (0 for unknown pins)
    pub fn open_handles(&self, pin: u8) -> usize {
        self.with_state(|state| {
            state
                .pins
                .get(pin as usize)
                .map_or(0, MockPin::open_handles)
        })
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        critical_section::with(|cs| f(&mut self.state.borrow_ref_mut(cs)))
    }

    fn with_pin<R>(
        &self,
        handle: RawGpio,
        f: impl FnOnce(&mut MockPin) -> Result<R>,
    ) -> Result<R> {
        self.with_state(|state| match state.pins.get_mut(handle.pin() as usize) {
            Some(pin) if pin.is_open(handle.token()) => f(pin),
            _ => Err(GpioError::InvalidHandle.into()),
        })
    }
}

impl core::fmt::Debug for MockBoard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MockBoard")
            .field("description", &self.description)
            .finish()
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl HalBackend for MockBoard {
    fn platform_name(&self) -> &'static str {
        self.description.name
    }

    fn pin_count(&self) -> u8 {
        self.description.pin_count()
    }

    fn adc_max_resolution_bits(&self) -> u8 {
        self.description.adc.max_resolution_bits
    }

    fn adc_supported_resolution_bits(&self) -> u8 {
        self.description.adc.supported_resolution_bits
    }

    fn adc_channel_count(&self) -> u8 {
        self.description.adc_channels
    }

    fn gpio_acquire(&self, pin: u8) -> Result<RawGpio> {
        let pin_count = self.pin_count();
        let info = self
            .description
            .pin(pin)
            .ok_or(GpioError::OutOfRange { pin, pin_count })?;
        if !info.is_gpio() {
            return Err(GpioError::Unsupported(pin).into());
        }

        self.with_state(|state| {
            let mock = state
                .pins
                .get_mut(pin as usize)
                .ok_or(GpioError::OutOfRange { pin, pin_count })?;
            // Skip tokens still held by live handles after the counter wraps
            let mut token = state.next_token;
            while mock.is_open(token) {
                token = token.wrapping_add(1);
            }
            mock.open(token)
                .map_err(|_| GpioError::HandleLimit(pin))?;
            state.next_token = token.wrapping_add(1);
            Ok(RawGpio::new(pin, token))
        })
    }

    fn gpio_set_direction(&self, handle: RawGpio, direction: Direction) -> Result<()> {
        self.with_pin(handle, |pin| {
            pin.set_direction(direction);
            Ok(())
        })
    }

    fn gpio_read_direction(&self, handle: RawGpio) -> Result<Option<Direction>> {
        self.with_pin(handle, |pin| Ok(pin.direction()))
    }

    fn gpio_write(&self, handle: RawGpio, level: Level) -> Result<()> {
        self.with_pin(handle, |pin| Ok(pin.write(handle.pin(), level)?))
    }

    fn gpio_read(&self, handle: RawGpio) -> Result<Level> {
        self.with_pin(handle, |pin| Ok(pin.read()))
    }

    fn gpio_release(&self, handle: RawGpio) {
        let reset = self.with_state(|state| {
            state
                .pins
                .get_mut(handle.pin() as usize)
                .is_some_and(|pin| pin.close(handle.token()))
        });
        if reset {
            crate::log_trace!("mock pin {} reset after last release", handle.pin());
        }
    }

    fn adc_read_raw(&self, channel: u8) -> Result<u16> {
        let channel_count = self.adc_channel_count();
        self.with_state(|state| {
            state
                .adc_raw
                .get(channel as usize)
                .copied()
                .ok_or(
                    AdcError::ChannelOutOfRange {
                        channel,
                        channel_count,
                    }
                    .into(),
                )
        })
    }
}
