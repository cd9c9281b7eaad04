//! GPIO behaviour checks against the mock board, all on pin 0

use pin_hal::platform::mock::MockBoard;
use pin_hal::{Direction, GpioError, Level, PinRegistry, PlatformError};

const TEST_PIN: u8 = 0;

fn check_direction(direction: Direction) {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    let mut pin = registry.acquire(TEST_PIN).unwrap();

    assert_eq!(pin.set_direction(direction), Ok(()), "Setting GPIO direction failed");
    assert_eq!(
        pin.read_direction().unwrap(),
        Some(direction),
        "GPIO has incorrect direction after set_direction()"
    );
}

#[test]
fn test_get_pin_num() {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    let pin = registry.acquire(TEST_PIN).unwrap();
    assert_eq!(pin.pin(), TEST_PIN, "Returned GPIO pin number is incorrect");
}

#[test]
fn test_set_gpio_as_output() {
    check_direction(Direction::Out);
}

#[test]
fn test_set_gpio_as_output_high() {
    check_direction(Direction::OutHigh);
}

#[test]
fn test_set_gpio_as_output_low() {
    check_direction(Direction::OutLow);
}

#[test]
fn test_set_gpio_as_input() {
    check_direction(Direction::In);
}

#[test]
fn test_gpio_as_output_write_high() {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    let mut pin = registry.acquire(TEST_PIN).unwrap();

    assert_eq!(pin.set_direction(Direction::Out), Ok(()));
    assert_eq!(pin.write(Level::High), Ok(()), "Setting GPIO to HIGH failed");
}

#[test]
fn test_gpio_as_output_write_low() {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    let mut pin = registry.acquire(TEST_PIN).unwrap();

    assert_eq!(pin.set_direction(Direction::Out), Ok(()));
    assert_eq!(pin.write(Level::Low), Ok(()), "Setting GPIO to LOW failed");
}

#[test]
fn test_gpio_as_input_write_high() {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    let mut pin = registry.acquire(TEST_PIN).unwrap();

    pin.set_direction(Direction::In).unwrap();
    assert_eq!(
        pin.write(Level::High),
        Err(PlatformError::Gpio(GpioError::DirectionViolation { pin: TEST_PIN })),
        "Setting GPIO in INPUT to HIGH should have failed"
    );
}

#[test]
fn test_gpio_as_input_write_low() {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    let mut pin = registry.acquire(TEST_PIN).unwrap();

    pin.set_direction(Direction::In).unwrap();
    assert!(
        pin.write(Level::Low).is_err(),
        "Setting GPIO in INPUT to LOW should have failed"
    );
}

#[test]
fn test_write_from_integer_levels() {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    let mut pin = registry.acquire(TEST_PIN).unwrap();
    pin.set_direction(Direction::OutLow).unwrap();

    for value in [0u8, 1] {
        let level = Level::try_from(value).unwrap();
        assert_eq!(pin.write(level), Ok(()));
        assert_eq!(u8::from(pin.read().unwrap()), value);
    }
    assert!(Level::try_from(2).is_err());
}

#[test]
fn test_acquire_out_of_range_pin() {
    let board = MockBoard::new();
    let registry = PinRegistry::new(&board);
    assert_eq!(
        registry.acquire(1).unwrap_err(),
        PlatformError::Gpio(GpioError::OutOfRange { pin: 1, pin_count: 1 })
    );
}
