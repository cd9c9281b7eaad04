//! Mock GPIO pin state

use heapless::Vec;

use crate::platform::{
    error::GpioError,
    traits::{Direction, Level},
};

/// Maximum simultaneous handles on one mock pin
pub const MAX_HANDLES_PER_PIN: usize = 8;

/// State of one simulated pin
///
/// Tracks direction, the level the pin drives, the level present on the
/// external line, and the handle tokens currently open on it.
#[derive(Debug)]
pub struct MockPin {
    direction: Option<Direction>,
    driven: Level,
    line: Level,
    handles: Vec<u16, MAX_HANDLES_PER_PIN>,
}

impl MockPin {
    /// Create a pin with no direction and both levels low
    pub fn new() -> Self {
        Self {
            direction: None,
            driven: Level::Low,
            line: Level::Low,
            handles: Vec::new(),
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Apply a direction, driving its initial level for outputs
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
        if let Some(level) = direction.initial_level() {
            self.driven = level;
        }
    }

    /// Drive `level`; only legal in an output direction
    pub fn write(&mut self, pin: u8, level: Level) -> Result<(), GpioError> {
        match self.direction {
            Some(direction) if direction.is_output() => {
                self.driven = level;
                Ok(())
            }
            _ => Err(GpioError::DirectionViolation { pin }),
        }
    }

    /// Driven level for outputs, line level otherwise
    pub fn read(&self) -> Level {
        match self.direction {
            Some(direction) if direction.is_output() => self.driven,
            _ => self.line,
        }
    }

    /// Set the level of the external line (simulated input signal)
    pub fn set_line(&mut self, level: Level) {
        self.line = level;
    }

    pub fn open(&mut self, token: u16) -> Result<(), u16> {
        self.handles.push(token)
    }

    pub fn is_open(&self, token: u16) -> bool {
        self.handles.contains(&token)
    }

    /// Close `token`; returns true when it was the last open handle
    pub fn close(&mut self, token: u16) -> bool {
        if let Some(index) = self.handles.iter().position(|&t| t == token) {
            self.handles.swap_remove(index);
            if self.handles.is_empty() {
                self.direction = None;
                self.driven = Level::Low;
                return true;
            }
        }
        false
    }

    pub fn open_handles(&self) -> usize {
        self.handles.len()
    }
}

impl Default for MockPin {
    fn default() -> Self {
        Self::new()
    }
}
