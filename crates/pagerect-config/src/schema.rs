//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub chrome: WindowChrome,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection to the remote debugging endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Upper bound for a single protocol round-trip.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Upper bound for waiting on `document.readyState` after opening a URL.
    #[serde(default = "default_load_timeout")]
    pub load_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout(),
            load_timeout_secs: default_load_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:9222".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_load_timeout() -> u64 {
    10
}

/// OS window decoration offsets, in CSS pixels.
///
/// These are empirical values measured on one desktop OS/browser build, not
/// anything the protocol reports. `Browser.getWindowForTarget` includes an
/// invisible resize border in its bounds, and these undo it. Expect to
/// recalibrate them on other platforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowChrome {
    /// Invisible border on the left edge of a normal window.
    #[serde(default = "default_left_offset")]
    pub left_offset: f64,

    /// Combined left and right borders; also top and bottom when maximized.
    #[serde(default = "default_side_borders")]
    pub side_borders: f64,

    /// Vertical decoration of a normal window.
    #[serde(default = "default_title_bar")]
    pub title_bar: f64,

    /// Offset below the padding-box top edge used for click points.
    #[serde(default = "default_click_y_bias")]
    pub click_y_bias: f64,
}

impl Default for WindowChrome {
    fn default() -> Self {
        Self {
            left_offset: default_left_offset(),
            side_borders: default_side_borders(),
            title_bar: default_title_bar(),
            click_y_bias: default_click_y_bias(),
        }
    }
}

/// Default for [`WindowChrome::left_offset`].
pub const CHROME_LEFT_OFFSET: f64 = 7.0;
/// Default for [`WindowChrome::side_borders`].
pub const CHROME_BOTH_SIDES: f64 = 16.0;
/// Default for [`WindowChrome::title_bar`].
pub const CHROME_TITLEBAR: f64 = 7.0;
/// Default for [`WindowChrome::click_y_bias`].
pub const CLICK_Y_BIAS: f64 = 3.0;

fn default_left_offset() -> f64 {
    CHROME_LEFT_OFFSET
}

fn default_side_borders() -> f64 {
    CHROME_BOTH_SIDES
}

fn default_title_bar() -> f64 {
    CHROME_TITLEBAR
}

fn default_click_y_bias() -> f64 {
    CLICK_Y_BIAS
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chrome_constants() {
        let chrome = WindowChrome::default();
        assert_eq!(chrome.left_offset, 7.0);
        assert_eq!(chrome.side_borders, 16.0);
        assert_eq!(chrome.title_bar, 7.0);
        assert_eq!(chrome.click_y_bias, 3.0);
    }

    #[test]
    fn test_partial_chrome_section() {
        let config: Config = toml::from_str("[chrome]\nleft_offset = 0.0\n").unwrap();
        assert_eq!(config.chrome.left_offset, 0.0);
        assert_eq!(config.chrome.side_borders, 16.0);
    }

    #[test]
    fn test_log_format_parse() {
        let config: Config = toml::from_str("[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_serialize_roundtrip() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
