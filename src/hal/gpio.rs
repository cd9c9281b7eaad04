//! GPIO pin handle
//!
//! A [`GpioPin`] is a typed view onto one acquired pin. It enforces the
//! direction rules itself instead of trusting the backend to do so:
//!
//! - Every direction can be set at any time and reads back immediately
//! - Writes and toggles are only legal in an output direction
//! - A pin whose direction was never set rejects writes like an input
//!
//! Dropping the handle releases it on the backend.

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::platform::{
    error::GpioError,
    traits::{Direction, HalBackend, Level, RawGpio},
    PlatformError, Result,
};

/// Handle on one acquired GPIO pin
///
/// Several handles may refer to the same physical pin; they share its state.
/// Concurrent writers through different handles get last-write-wins
/// behaviour, which is unsupported.
pub struct GpioPin<'a, B: HalBackend + ?Sized> {
    backend: &'a B,
    raw: RawGpio,
}

impl<'a, B: HalBackend + ?Sized> GpioPin<'a, B> {
    pub(crate) fn new(backend: &'a B, raw: RawGpio) -> Self {
        Self { backend, raw }
    }

    /// Pin id this handle was acquired with
    pub fn pin(&self) -> u8 {
        self.raw.pin()
    }

    /// Set the pin direction
    ///
    /// `OutHigh` and `OutLow` drive the corresponding level in the same
    /// step; plain `Out` starts low.
    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        self.backend.gpio_set_direction(self.raw, direction)?;
        crate::log_debug!("pin {} direction {:?}", self.pin(), direction);
        Ok(())
    }

    /// Last direction set on the pin, `None` if it was never set
    pub fn read_direction(&self) -> Result<Option<Direction>> {
        self.backend.gpio_read_direction(self.raw)
    }

    /// Drive the pin to `level`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::DirectionViolation)` if the
    /// pin is an input or has no direction yet.
    pub fn write(&mut self, level: Level) -> Result<()> {
        self.ensure_output()?;
        self.backend.gpio_write(self.raw, level)
    }

    /// Read the pin level
    ///
    /// Returns the driven level for outputs and the line level otherwise.
    pub fn read(&self) -> Result<Level> {
        self.backend.gpio_read(self.raw)
    }

    /// Invert the driven level
    ///
    /// Same legality as [`write`](Self::write).
    pub fn toggle(&mut self) -> Result<()> {
        self.ensure_output()?;
        let level = self.backend.gpio_read(self.raw)?;
        self.backend.gpio_write(self.raw, level.toggled())
    }

    /// Release the handle now instead of at end of scope
    pub fn release(self) {}

    fn ensure_output(&self) -> Result<()> {
        let direction = self.read_direction()?;
        if direction.is_some_and(Direction::is_output) {
            return Ok(());
        }
        crate::log_warn!(
            "write rejected on pin {} (direction {:?})",
            self.pin(),
            direction
        );
        Err(GpioError::DirectionViolation { pin: self.pin() }.into())
    }
}

impl<B: HalBackend + ?Sized> Drop for GpioPin<'_, B> {
    fn drop(&mut self) {
        self.backend.gpio_release(self.raw);
        crate::log_trace!("pin {} handle released", self.raw.pin());
    }
}

impl<B: HalBackend + ?Sized> core::fmt::Debug for GpioPin<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GpioPin").field("raw", &self.raw).finish()
    }
}

impl<B: HalBackend + ?Sized> ErrorType for GpioPin<'_, B> {
    type Error = PlatformError;
}

impl<B: HalBackend + ?Sized> OutputPin for GpioPin<'_, B> {
    fn set_low(&mut self) -> Result<()> {
        self.write(Level::Low)
    }

    fn set_high(&mut self) -> Result<()> {
        self.write(Level::High)
    }
}

impl<B: HalBackend + ?Sized> StatefulOutputPin for GpioPin<'_, B> {
    fn is_set_high(&mut self) -> Result<bool> {
        Ok(self.read()? == Level::High)
    }

    fn is_set_low(&mut self) -> Result<bool> {
        Ok(self.read()? == Level::Low)
    }
}

impl<B: HalBackend + ?Sized> InputPin for GpioPin<'_, B> {
    fn is_high(&mut self) -> Result<bool> {
        Ok(self.read()? == Level::High)
    }

    fn is_low(&mut self) -> Result<bool> {
        Ok(self.read()? == Level::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::PinRegistry;
    use crate::platform::mock::MockBoard;

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Out,
        Direction::OutHigh,
        Direction::OutLow,
        Direction::In,
    ];

    #[test]
    fn test_direction_reads_back() {
        let board = MockBoard::new();
        let registry = PinRegistry::new(&board);
        let mut pin = registry.acquire(0).unwrap();

        for direction in ALL_DIRECTIONS {
            pin.set_direction(direction).unwrap();
            assert_eq!(pin.read_direction().unwrap(), Some(direction));
        }
    }

    #[test]
    fn test_unset_direction() {
        let board = MockBoard::new();
        let registry = PinRegistry::new(&board);
        let mut pin = registry.acquire(0).unwrap();

        assert_eq!(pin.read_direction().unwrap(), None);
        assert_eq!(
            pin.write(Level::High),
            Err(PlatformError::Gpio(GpioError::DirectionViolation { pin: 0 }))
        );
    }

    #[test]
    fn test_output_write_both_levels() {
        let board = MockBoard::new();
        let registry = PinRegistry::new(&board);
        let mut pin = registry.acquire(0).unwrap();

        for direction in [Direction::Out, Direction::OutHigh, Direction::OutLow] {
            pin.set_direction(direction).unwrap();
            assert_eq!(pin.write(Level::High), Ok(()));
            assert_eq!(pin.read().unwrap(), Level::High);
            assert_eq!(pin.write(Level::Low), Ok(()));
            assert_eq!(pin.read().unwrap(), Level::Low);
        }
    }

    #[test]
    fn test_input_rejects_writes() {
        let board = MockBoard::new();
        let registry = PinRegistry::new(&board);
        let mut pin = registry.acquire(0).unwrap();
        pin.set_direction(Direction::In).unwrap();

        assert!(pin.write(Level::High).is_err());
        assert!(pin.write(Level::Low).is_err());
        assert!(pin.toggle().is_err());
    }

    #[test]
    fn test_out_high_low_drive_level() {
        let board = MockBoard::new();
        let registry = PinRegistry::new(&board);
        let mut pin = registry.acquire(0).unwrap();

        pin.set_direction(Direction::OutHigh).unwrap();
        assert_eq!(pin.read().unwrap(), Level::High);

        pin.set_direction(Direction::OutLow).unwrap();
        assert_eq!(pin.read().unwrap(), Level::Low);
    }

    #[test]
    fn test_toggle() {
        let board = MockBoard::new();
        let registry = PinRegistry::new(&board);
        let mut pin = registry.acquire(0).unwrap();
        pin.set_direction(Direction::Out).unwrap();

        pin.toggle().unwrap();
        assert_eq!(pin.read().unwrap(), Level::High);
        pin.toggle().unwrap();
        assert_eq!(pin.read().unwrap(), Level::Low);
    }

    #[test]
    fn test_input_reads_line() {
        let board = MockBoard::new();
        let registry = PinRegistry::new(&board);
        let mut pin = registry.acquire(0).unwrap();
        pin.set_direction(Direction::In).unwrap();

        board.inject_level(0, Level::High).unwrap();
        assert_eq!(pin.read().unwrap(), Level::High);
    }

    #[test]
    fn test_handles_share_state() {
        let board = MockBoard::new();
        let registry = PinRegistry::new(&board);
        let mut first = registry.acquire(0).unwrap();
        let second = registry.acquire(0).unwrap();

        first.set_direction(Direction::OutHigh).unwrap();
        assert_eq!(second.read_direction().unwrap(), Some(Direction::OutHigh));
        assert_eq!(second.read().unwrap(), Level::High);
    }

    #[test]
    fn test_drop_releases_handle() {
        let board = MockBoard::new();
        let registry = PinRegistry::new(&board);
        {
            let mut pin = registry.acquire(0).unwrap();
            pin.set_direction(Direction::Out).unwrap();
            assert_eq!(board.open_handles(0), 1);
        }
        assert_eq!(board.open_handles(0), 0);

        // Pin state is discarded with the last handle
        let pin = registry.acquire(0).unwrap();
        assert_eq!(pin.read_direction().unwrap(), None);
    }

    #[test]
    fn test_embedded_hal_traits() {
        let board = MockBoard::new();
        let registry = PinRegistry::new(&board);
        let mut pin = registry.acquire(0).unwrap();
        pin.set_direction(Direction::Out).unwrap();

        OutputPin::set_high(&mut pin).unwrap();
        assert!(pin.is_set_high().unwrap());
        StatefulOutputPin::toggle(&mut pin).unwrap();
        assert!(pin.is_set_low().unwrap());

        pin.set_direction(Direction::In).unwrap();
        assert!(OutputPin::set_high(&mut pin).is_err());
        board.inject_level(0, Level::High).unwrap();
        assert!(pin.is_high().unwrap());
    }
}
