//! Typed pin and ADC handles
//!
//! Everything in here is generic over a [`HalBackend`](crate::platform::HalBackend)
//! and never touches hardware directly.
//!
//! - [`PinRegistry`]: validates ids and hands out handles
//! - [`GpioPin`]: direction and level control for one pin
//! - [`AdcChannel`]: resolution figures and scaled samples for one ADC input

pub mod adc;
pub mod gpio;
pub mod registry;

pub use adc::AdcChannel;
pub use gpio::GpioPin;
pub use registry::PinRegistry;
