//! Configuration management for avdevices
//!
//! Controls which probe tools are invoked and how the detected device list
//! is written out.

use crate::errors::{DetectError, DetectResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvDevicesConfig {
    #[serde(default)]
    pub probes: ProbeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// External tool locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// ffmpeg executable, used for dshow, avfoundation and `-sources` probes
    pub ffmpeg_path: String,
    /// v4l2-ctl executable, used for Linux video probes
    pub v4l2_ctl_path: String,
}

/// Device file output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name written into the output directory
    pub file_name: String,
    /// Pretty-print the JSON document
    pub pretty: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            v4l2_ctl_path: "v4l2-ctl".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: "devices.json".to_string(),
            pretty: true,
        }
    }
}

impl AvDevicesConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DetectResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| DetectError::Config(format!("Failed to read config file: {}", e)))?;

        let config: AvDevicesConfig = toml::from_str(&contents)
            .map_err(|e| DetectError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate().map_err(DetectError::Config)?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> DetectResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DetectError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| DetectError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| DetectError::Config(format!("Failed to write config file: {}", e)))?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("avdevices.toml")
    }

    /// Load from default location or fall back to defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.probes.ffmpeg_path.trim().is_empty() {
            return Err("ffmpeg_path must not be empty".to_string());
        }
        if self.probes.v4l2_ctl_path.trim().is_empty() {
            return Err("v4l2_ctl_path must not be empty".to_string());
        }

        let file_name = self.output.file_name.trim();
        if file_name.is_empty() {
            return Err("Output file name must not be empty".to_string());
        }
        if Path::new(file_name).file_name().and_then(|n| n.to_str()) != Some(file_name) {
            return Err(format!("Output file name must be a bare file name: {}", file_name));
        }

        Ok(())
    }
}
