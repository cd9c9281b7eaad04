//! GPIO types
//!
//! Direction and logic-level types shared by backends and pin handles.

use crate::platform::{error::GpioError, Result};

/// GPIO pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Output, driven low when the direction is applied
    Out,
    /// Output, driven high atomically with the direction change
    OutHigh,
    /// Output, driven low atomically with the direction change
    OutLow,
    /// Input (high impedance), rejects writes
    In,
}

impl Direction {
    /// Whether the pin drives its line in this direction
    pub fn is_output(self) -> bool {
        !matches!(self, Direction::In)
    }

    /// Level the pin drives as soon as this direction is applied
    ///
    /// `None` for inputs, whose level is sampled from the line.
    pub fn initial_level(self) -> Option<Level> {
        match self {
            Direction::Out | Direction::OutLow => Some(Level::Low),
            Direction::OutHigh => Some(Level::High),
            Direction::In => None,
        }
    }
}

/// Pin logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// The opposite level
    pub fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> bool {
        matches!(level, Level::High)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        match level {
            Level::Low => 0,
            Level::High => 1,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = crate::platform::PlatformError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Level::Low),
            1 => Ok(Level::High),
            other => Err(GpioError::InvalidLevel(other).into()),
        }
    }
}
