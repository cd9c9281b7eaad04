//! Mock platform implementation for testing
//!
//! This module provides an in-memory [`HalBackend`](crate::platform::HalBackend)
//! that can be used for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use pin_hal::platform::mock::MockBoard;
//! use pin_hal::PinRegistry;
//!
//! let board = MockBoard::new();
//! let registry = PinRegistry::new(&board);
//! assert_eq!(registry.info().pin_count(), 1);
//! ```

#![cfg(any(test, feature = "mock"))]

mod board;
mod gpio;

pub use board::{MockBoard, MAX_ADC_CHANNELS};
pub use gpio::{MockPin, MAX_HANDLES_PER_PIN};
