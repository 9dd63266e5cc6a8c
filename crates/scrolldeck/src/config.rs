use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::nav::{NavSettings, TriggerBand};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "scrolldeck";

pub const KEYS: &[&str] = &[
    "defaults.theme",
    "navigation.scroll_duration_ms",
    "navigation.trigger_start",
    "navigation.trigger_end",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Length of the animated scroll to a slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_duration_ms: Option<u64>,

    /// Fraction of the viewport height a slide's top must reach to enter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_start: Option<f32>,

    /// Fraction of the viewport height a slide's bottom must stay below.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_end: Option<f32>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `scrolldeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Like [`Config::load_from`], but a missing file is an empty config.
    pub fn load_if_exists(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_or_default() -> Self {
        match Self::path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                warn!("{e}");
                Self::default()
            }
        }
    }

    /// Defaults when the file is missing. A file that cannot be read or
    /// parsed also gives defaults, with a warning.
    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_if_exists(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), "ignoring config: {e:#}");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# scrolldeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "navigation.scroll_duration_ms" => {
                let ms: u64 = value.parse().map_err(|_| {
                    anyhow::anyhow!(
                        "Invalid scroll duration: {value}. Must be a whole number of milliseconds."
                    )
                })?;
                self.navigation
                    .get_or_insert_with(NavigationConfig::default)
                    .scroll_duration_ms = Some(ms);
            }
            "navigation.trigger_start" | "navigation.trigger_end" => {
                let fraction: f32 = value
                    .parse()
                    .ok()
                    .filter(|f| (0.0..=1.0).contains(f))
                    .ok_or_else(|| {
                        anyhow::anyhow!("Invalid {key}: {value}. Must be between 0 and 1.")
                    })?;
                let nav = self
                    .navigation
                    .get_or_insert_with(NavigationConfig::default);
                if key == "navigation.trigger_start" {
                    nav.trigger_start = Some(fraction);
                } else {
                    nav.trigger_end = Some(fraction);
                }
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
        }
        Ok(())
    }

    pub fn theme(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.theme.as_deref())
    }

    /// Navigation settings with defaults filled in. An inconsistent trigger
    /// band falls back to the default band.
    pub fn nav_settings(&self) -> NavSettings {
        let mut settings = NavSettings::default();
        let Some(nav) = &self.navigation else {
            return settings;
        };
        if let Some(ms) = nav.scroll_duration_ms {
            settings.scroll_duration = Duration::from_millis(ms);
        }
        let start = nav.trigger_start.unwrap_or(settings.band.start());
        let end = nav.trigger_end.unwrap_or(settings.band.end());
        match TriggerBand::new(start, end) {
            Some(band) => settings.band = band,
            None => warn!(start, end, "invalid trigger band in config, using default"),
        }
        settings
    }
}
