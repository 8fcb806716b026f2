//! Console configuration
//!
//! Configuration loaded from .drop-console.toml file.

use anyhow::{Context, Result};
use drop_console::{
    ConsoleSettings, DisplaySurface, KeyTogglePolicy, LogConsole, MarkupPolicy,
    OrientationThresholdPolicy, SeverityPalette, VisibilityTrigger, DEFAULT_MAX_LINES,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Console configuration loaded from .drop-console.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Maximum number of log lines kept on screen
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Colours for warning, assertion, error and exception lines
    #[serde(default)]
    pub colours: SeverityPalette,

    /// Whether colour tags inside messages are kept or stripped
    #[serde(default)]
    pub markup: MarkupPolicy,

    /// What shows and hides the console
    #[serde(default)]
    pub trigger: TriggerConfig,

    /// Minimum level captured by the console (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Visibility trigger selection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TriggerConfig {
    /// Toggle on release of `key`
    Key {
        #[serde(default = "default_key")]
        key: char,
    },
    /// Show while the view pitches down past `show_angle` degrees
    Orientation {
        #[serde(default = "default_show_angle")]
        show_angle: f32,
    },
}

fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}

fn default_key() -> char {
    KeyTogglePolicy::DEFAULT_KEY
}

fn default_show_angle() -> f32 {
    OrientationThresholdPolicy::DEFAULT_SHOW_ANGLE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TriggerConfig {
    fn default() -> Self {
        TriggerConfig::Key { key: default_key() }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
            colours: SeverityPalette::default(),
            markup: MarkupPolicy::default(),
            trigger: TriggerConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl ConsoleConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// Parse failures are logged and replaced by defaults; use
    /// [`try_load`](Self::try_load) when logging is not set up yet.
    pub fn load() -> Self {
        Self::or_default(Self::try_load())
    }

    /// Load and parse the config file; `Ok(None)` when no file exists
    pub fn try_load() -> Result<Option<Self>> {
        Self::parse_loaded(crate::load_config_file())
    }

    fn parse_loaded(content: Option<String>) -> Result<Option<Self>> {
        content.map(|c| Self::from_toml_str(&c)).transpose()
    }

    /// Resolve a [`try_load`](Self::try_load) result, warning on parse failures
    pub fn or_default(loaded: Result<Option<Self>>) -> Self {
        match loaded {
            Ok(Some(config)) => {
                log::info!("Loaded console config from file");
                config
            }
            Ok(None) => {
                log::debug!("Using default console config");
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse config file, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid .drop-console.toml")
    }

    /// Core console settings, validated
    pub fn settings(&self) -> Result<ConsoleSettings> {
        let settings = ConsoleSettings {
            max_lines: self.max_lines,
            palette: self.colours.clone(),
            markup: self.markup,
        };
        if settings.max_lines == 0 {
            anyhow::bail!("max_lines must be at least 1");
        }
        Ok(settings)
    }

    /// Build the configured visibility trigger
    pub fn build_trigger(&self) -> Result<Box<dyn VisibilityTrigger>> {
        Ok(match self.trigger {
            TriggerConfig::Key { key } => Box::new(KeyTogglePolicy::new(key)),
            TriggerConfig::Orientation { show_angle } => Box::new(
                OrientationThresholdPolicy::new(show_angle)
                    .context("Invalid orientation trigger")?,
            ),
        })
    }

    /// Build a console rendering into `surface`
    pub fn build_console<S: DisplaySurface>(&self, surface: S) -> Result<LogConsole<S>> {
        let console = LogConsole::new(self.settings()?, surface, self.build_trigger()?)
            .context("Invalid console configuration")?;
        Ok(console)
    }

    /// Parsed `log_level`, `None` when unknown
    pub fn try_level_filter(&self) -> Option<LevelFilter> {
        parse_level(&self.log_level)
    }

    /// Parsed `log_level`; unknown values fall back to info
    pub fn level_filter(&self) -> LevelFilter {
        self.try_level_filter().unwrap_or_else(|| {
            log::warn!("Unknown log level {:?}, using info", self.log_level);
            LevelFilter::Info
        })
    }
}

/// Parse a level name the way RUST_LOG spells it
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drop_console::{Colour, Severity, TextSurface, TriggerInput, VisibilityCommand};

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert_eq!(config.max_lines, 12);
        assert_eq!(config.colours, SeverityPalette::default());
        assert_eq!(config.markup, MarkupPolicy::Verbatim);
        assert_eq!(config.trigger, TriggerConfig::Key { key: '`' });
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ConsoleConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r##"
            max_lines = 4
            markup = "strip"
            log_level = "debug"

            [colours]
            warning = "#00FF00"
            error = "11223344"

            [trigger]
            kind = "orientation"
            show_angle = 45.0
        "##;
        let config = ConsoleConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.max_lines, 4);
        assert_eq!(config.markup, MarkupPolicy::Strip);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.colours.warning, Colour::rgb(0, 0xFF, 0));
        assert_eq!(config.colours.error, Colour::rgba(0x11, 0x22, 0x33, 0x44));
        // Unset colours keep their defaults
        assert_eq!(config.colours.exception, SeverityPalette::default().exception);
        assert_eq!(config.trigger, TriggerConfig::Orientation { show_angle: 45.0 });
    }

    #[test]
    fn test_config_deserialize_partial_trigger() {
        let toml = r#"
            [trigger]
            kind = "key"
        "#;
        let config = ConsoleConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.trigger, TriggerConfig::Key { key: '`' });

        let toml = r#"
            [trigger]
            kind = "orientation"
        "#;
        let config = ConsoleConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.trigger, TriggerConfig::Orientation { show_angle: 30.0 });
    }

    #[test]
    fn test_invalid_colour_rejected() {
        let toml = r#"
            [colours]
            warning = "yellow"
        "#;
        assert!(ConsoleConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_zero_max_lines_rejected() {
        let config = ConsoleConfig {
            max_lines: 0,
            ..ConsoleConfig::default()
        };
        assert!(config.settings().is_err());
        assert!(config.build_console(TextSurface::new()).is_err());
    }

    #[test]
    fn test_out_of_range_show_angle_rejected() {
        let config = ConsoleConfig {
            trigger: TriggerConfig::Orientation { show_angle: 120.0 },
            ..ConsoleConfig::default()
        };
        assert!(config.build_trigger().is_err());
    }

    #[test]
    fn test_build_console_uses_configured_trigger() {
        let config = ConsoleConfig {
            max_lines: 2,
            trigger: TriggerConfig::Key { key: 'c' },
            ..ConsoleConfig::default()
        };
        let mut console = config.build_console(TextSurface::new()).unwrap();

        assert_eq!(console.handle_input(&TriggerInput::KeyReleased('`')), None);
        assert_eq!(
            console.handle_input(&TriggerInput::KeyReleased('c')),
            Some(VisibilityCommand::Toggle)
        );
        assert!(console.is_visible());

        for message in ["a", "b", "c"] {
            console.on_log_received(message, Severity::Info);
        }
        assert_eq!(console.rendered(), "b\nc");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let loaded = ConsoleConfig::parse_loaded(None).unwrap();
        assert!(loaded.is_none());
        assert_eq!(ConsoleConfig::or_default(Ok(loaded)), ConsoleConfig::default());
    }

    #[test]
    fn test_unparsable_file_falls_back_to_defaults() {
        let loaded = ConsoleConfig::parse_loaded(Some("max_lines = \"many\"".to_string()));
        assert!(loaded.is_err());
        assert_eq!(ConsoleConfig::or_default(loaded), ConsoleConfig::default());
    }

    #[test]
    fn test_parsed_file_is_used() {
        let loaded = ConsoleConfig::parse_loaded(Some("max_lines = 3".to_string()));
        assert_eq!(ConsoleConfig::or_default(loaded).max_lines, 3);
    }

    #[test]
    fn test_unknown_level() {
        let config = ConsoleConfig {
            log_level: "loud".to_string(),
            ..ConsoleConfig::default()
        };
        assert_eq!(config.try_level_filter(), None);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level(" trace "), Some(LevelFilter::Trace));
        assert_eq!(parse_level("loud"), None);
    }
}
