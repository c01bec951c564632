//! Platform-specific code.

pub mod gpu;
