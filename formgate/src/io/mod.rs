//! I/O helpers: rendering surfaces, config and event scripts.

pub mod config;
pub mod memory;
pub mod script;
pub mod surface;
