//! Core infrastructure
//!
//! Cross-cutting pieces shared by the platform layer and the pin handles.

pub mod logging;
