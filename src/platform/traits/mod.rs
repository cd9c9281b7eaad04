//! Platform abstraction traits
//!
//! This module defines the trait that platform implementations must provide,
//! and the value types that cross it.

pub mod backend;
pub mod gpio;

// Re-export trait interfaces
pub use backend::{HalBackend, RawGpio};
pub use gpio::{Direction, Level};
