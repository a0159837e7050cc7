//! Persistent console preferences.
//!
//! Owns the [`Config`] model plus the disk helpers that load and save it.
//! Domain data is never written here.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config};
