#![cfg_attr(not(test), no_std)]

//! pin_hal - GPIO and ADC hardware abstraction core
//!
//! This library provides a platform abstraction for digital pins and analog
//! inputs, typed pin handles that enforce direction rules, and a simulated
//! mock platform for hardware-free testing.

// Logging macros
pub mod core;

// Platform abstraction layer: backend trait, board description, errors
pub mod platform;

// Typed handles: pin registry, GPIO pins, ADC channels
pub mod hal;

// Re-export commonly used types
pub use hal::{AdcChannel, GpioPin, PinRegistry};
pub use platform::{
    AdcError, Direction, GpioError, HalBackend, Level, PlatformError, PlatformInfo, Result,
};
