//! TOML configuration: digit grouping and UI behaviour.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DisplayConfig, UiConfig};
