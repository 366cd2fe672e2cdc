// tailwind-harvester - Tailwind theme harvesting for WordPress site trees
//
// This is the library crate containing the harvesting pipeline and data structures.
// The binary crate (main.rs) runs one harvest over the configured site root.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::SettingsManager;
pub use models::{HarvestSettings, ThemeAccumulator};
pub use services::{HarvestError, HarvestReport, Harvester};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
