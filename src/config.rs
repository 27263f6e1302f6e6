//! Configuration management for `VietGuide`
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::VietGuideError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `VietGuide` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VietGuideConfig {
    /// Planner default settings
    pub planner: PlannerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Default limits used when the caller supplies no constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Default trip length in days
    #[serde(default = "default_total_days")]
    pub default_total_days: u32,
    /// Default budget in VND
    #[serde(default = "default_total_budget")]
    pub default_total_budget: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_total_days() -> u32 {
    5
}

fn default_total_budget() -> u64 {
    5_000_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for VietGuideConfig {
    fn default() -> Self {
        Self {
            planner: PlannerConfig {
                default_total_days: default_total_days(),
                default_total_budget: default_total_budget(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

impl VietGuideConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with VIETGUIDE_ prefix
        builder = builder.add_source(
            Environment::with_prefix("VIETGUIDE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: VietGuideConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vietguide").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.planner.default_total_days == 0 {
            self.planner.default_total_days = default_total_days();
        }
        if self.planner.default_total_budget == 0 {
            self.planner.default_total_budget = default_total_budget();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.planner.default_total_days == 0 {
            return Err(
                VietGuideError::config("Default trip length must be at least 1 day").into(),
            );
        }

        if self.planner.default_total_days > 30 {
            return Err(
                VietGuideError::config("Default trip length cannot exceed 30 days").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(VietGuideError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(VietGuideError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
