//! Configuration management for the voxwav CLI.
//!
//! Configuration is stored in ~/.voxwav/config.yaml and created empty on
//! first use. Every key has a default, so an empty file is a valid config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use voxwav_audio::pcm::Format;
use voxwav_audio::wav::WAV_FILENAME;

/// Default configuration directory name.
pub const DEFAULT_BASE_DIR: &str = ".voxwav";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Default JSON field holding the payload in service responses.
pub const DEFAULT_JSON_FIELD: &str = "audio";

/// Validates a payload format for conversion to WAV.
///
/// WAV files are always written mono, so interleaved multi-channel payloads
/// are rejected instead of being saved at the wrong speed.
pub fn payload_format(sample_rate: u32, channels: u16) -> anyhow::Result<Format> {
    let format = Format::new(sample_rate, channels);
    format.validate()?;
    if channels != 1 {
        anyhow::bail!("only mono payloads can be saved as WAV, got {} channels", channels);
    }
    Ok(format)
}

/// Keys accepted by [`Config::set`] and [`Config::get`].
pub const KEYS: [&str; 4] = ["sample_rate", "channels", "output", "json_field"];

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Sample rate of incoming payloads in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Channel count of incoming payloads.
    #[serde(default = "default_channels")]
    pub channels: u16,

    /// Default output filename.
    #[serde(default = "default_output")]
    pub output: String,

    /// Dotted path of the payload inside JSON responses, e.g. `data.audio`.
    #[serde(default = "default_json_field")]
    pub json_field: String,

    /// Path to the config file (not serialized).
    #[serde(skip)]
    config_path: PathBuf,
}

fn default_sample_rate() -> u32 {
    Format::MONO_24K.sample_rate
}

fn default_channels() -> u16 {
    Format::MONO_24K.channels
}

fn default_output() -> String {
    WAV_FILENAME.to_string()
}

fn default_json_field() -> String {
    DEFAULT_JSON_FIELD.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            output: default_output(),
            json_field: default_json_field(),
            config_path: PathBuf::new(),
        }
    }
}

impl Config {
    /// Gets the default config directory.
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR))
    }

    /// Gets the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Returns the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the PCM format of incoming payloads.
    pub fn format(&self) -> Format {
        Format::new(self.sample_rate, self.channels)
    }

    /// Saves the configuration to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Returns the value of `key` as text.
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        Ok(match key {
            "sample_rate" => self.sample_rate.to_string(),
            "channels" => self.channels.to_string(),
            "output" => self.output.clone(),
            "json_field" => self.json_field.clone(),
            _ => anyhow::bail!("unknown key '{}', expected one of: {}", key, KEYS.join(", ")),
        })
    }

    /// Sets `key` from text and validates the result. Does not save.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "sample_rate" => {
                let rate: u32 = value
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid sample_rate '{}': {}", value, e))?;
                payload_format(rate, self.channels)?;
                self.sample_rate = rate;
            }
            "channels" => {
                let channels: u16 = value
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid channels '{}': {}", value, e))?;
                payload_format(self.sample_rate, channels)?;
                self.channels = channels;
            }
            "output" => {
                if value.is_empty() {
                    anyhow::bail!("output cannot be empty");
                }
                self.output = value.to_string();
            }
            "json_field" => {
                if value.is_empty() {
                    anyhow::bail!("json_field cannot be empty");
                }
                self.json_field = value.to_string();
            }
            _ => anyhow::bail!("unknown key '{}', expected one of: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }
}

/// Loads configuration, creating an empty file if none exists.
pub fn load_config(custom_path: Option<&str>) -> anyhow::Result<Config> {
    let config_path = match custom_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_config_path()
            .ok_or_else(|| anyhow::anyhow!("cannot determine config path"))?,
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut cfg: Config = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)?
        }
    } else {
        std::fs::write(&config_path, "")?;
        Config::default()
    };

    cfg.config_path = config_path;
    Ok(cfg)
}
