use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// How operands are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Inserted between digit groups of the integer part (default: ",").
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
    /// Digits per group (default: 3).
    #[serde(default = "default_group_size")]
    pub group_size: usize,
}

/// Terminal UI behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show the key hint footer (default: true).
    #[serde(default = "default_show_footer")]
    pub show_footer: bool,
}

fn default_group_separator() -> String {
    ",".to_string()
}

fn default_group_size() -> usize {
    3
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_show_footer() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: default_group_separator(),
            group_size: default_group_size(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_footer: default_show_footer(),
        }
    }
}
