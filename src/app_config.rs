use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO 639-1)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO 639-1)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// TMX header settings
    #[serde(default)]
    pub tmx: TmxConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings written into the TMX header
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TmxConfig {
    // @field: Header creationtool attribute
    #[serde(default = "default_creation_tool")]
    pub creation_tool: String,

    // @field: Header creationtoolversion attribute
    #[serde(default = "default_creation_tool_version")]
    pub creation_tool_version: String,
}

impl Default for TmxConfig {
    fn default() -> Self {
        Self {
            creation_tool: default_creation_tool(),
            creation_tool_version: default_creation_tool_version(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "fr".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_creation_tool() -> String {
    "tmxalign".to_string()
}

fn default_creation_tool_version() -> String {
    "1.0".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages against the supported set
        let _source_name = language_utils::get_language_name(&self.source_language)?;
        let _target_name = language_utils::get_language_name(&self.target_language)?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            tmx: TmxConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
