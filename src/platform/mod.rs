//! Platform abstraction layer
//!
//! This module provides the hardware boundary for different platforms.
//! All platform-specific code must be isolated to this module.

pub mod board;
pub mod error;
pub mod info;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use board::{AdcInfo, BoardDescription, PinCapabilities, PinInfo, MOCK_BOARD};
pub use error::{AdcError, ConfigError, GpioError, PlatformError, Result};
pub use info::PlatformInfo;
pub use traits::{Direction, HalBackend, Level, RawGpio};
