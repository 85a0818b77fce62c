use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level khayyam configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KhayyamConfig {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display preferences for CLI output.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Primary calendar view, `gregorian` or `jalali`.
    #[serde(default = "default_calendar")]
    pub calendar: String,

    /// Default format pattern.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Also print the other calendar's view of the same day.
    #[serde(default = "default_true")]
    pub secondary: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            calendar: default_calendar(),
            pattern: default_pattern(),
            secondary: true,
        }
    }
}

fn default_calendar() -> String {
    "jalali".to_string()
}
fn default_pattern() -> String {
    "dddd D MMMM YYYY".to_string()
}
fn default_true() -> bool {
    true
}

/// Load configuration from `path`, falling back to defaults when the
/// file does not exist.
pub fn load(path: &Path) -> Result<KhayyamConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(KhayyamConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = KhayyamConfig::default();
        assert_eq!(config.display.calendar, "jalali");
        assert_eq!(config.display.pattern, "dddd D MMMM YYYY");
        assert!(config.display.secondary);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: KhayyamConfig = toml::from_str("[display]\ncalendar = \"gregorian\"").unwrap();
        assert_eq!(config.display.calendar, "gregorian");
        assert_eq!(config.display.pattern, "dddd D MMMM YYYY");
        assert!(config.display.secondary);
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<KhayyamConfig>("[display]\ncolor = true").is_err());
        assert!(toml::from_str::<KhayyamConfig>("[storage]\npath = \"x\"").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.display.calendar, "jalali");
    }
}
