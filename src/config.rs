use crate::cli::output::OutputFormat;
use crate::{CaseStyle, PadPosition};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = ".strkit.toml";

/// Effective settings used by the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub default_style: CaseStyle,
    pub pad_pattern: String,
    pub pad_position: PadPosition,
    pub remove_empty: bool,
    pub color: bool,
    pub format: OutputFormat,
}

/// One layer read from a TOML file. Absent keys leave the lower layer alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub default_style: Option<CaseStyle>,
    pub pad_pattern: Option<String>,
    pub pad_position: Option<PadPosition>,
    pub remove_empty: Option<bool>,
    pub color: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_style: CaseStyle::Kebab,
            pad_pattern: " ".to_string(),
            pad_position: PadPosition::Both,
            remove_empty: false,
            color: true,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration with priority: explicit file > local config > global config > defaults.
    ///
    /// Missing global and local files are skipped; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        if let Some(path) = explicit {
            config = config.merge(Self::from_file(path)?);
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let layer: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("loaded config layer from {}", path.display());
        Ok(layer)
    }

    pub fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(style) = other.default_style {
            self.default_style = style;
        }
        if let Some(pattern) = other.pad_pattern {
            self.pad_pattern = pattern;
        }
        if let Some(position) = other.pad_position {
            self.pad_position = position;
        }
        if let Some(remove_empty) = other.remove_empty {
            self.remove_empty = remove_empty;
        }
        if let Some(color) = other.color {
            self.color = color;
        }
        if let Some(format) = other.format {
            self.format = format;
        }
        self
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "strkit").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
