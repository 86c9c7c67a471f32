/*!
 * Tests for application configuration
 */

use anyhow::Result;
use tmxalign::app_config::{Config, LogLevel};

/// Test the default configuration values
#[test]
fn test_config_default_withNoInput_shouldUseFrenchToEnglish() {
    let config = Config::default();

    assert_eq!(config.source_language, "fr");
    assert_eq!(config.target_language, "en");
    assert_eq!(config.tmx.creation_tool, "tmxalign");
    assert_eq!(config.tmx.creation_tool_version, "1.0");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that a full config round-trips through JSON
#[test]
fn test_config_serde_withFullConfig_shouldRoundTrip() -> Result<()> {
    let config = Config {
        source_language: "de".to_string(),
        target_language: "it".to_string(),
        ..Config::default()
    };

    let json = serde_json::to_string_pretty(&config)?;
    let parsed: Config = serde_json::from_str(&json)?;

    assert_eq!(parsed.source_language, "de");
    assert_eq!(parsed.target_language, "it");
    assert_eq!(parsed.log_level, LogLevel::Info);

    Ok(())
}

/// Test that missing fields fall back to serde defaults
#[test]
fn test_config_serde_withPartialJson_shouldApplyDefaults() -> Result<()> {
    let parsed: Config = serde_json::from_str(r#"{"source_language": "es"}"#)?;

    assert_eq!(parsed.source_language, "es");
    assert_eq!(parsed.target_language, "en");
    assert_eq!(parsed.tmx.creation_tool, "tmxalign");
    assert_eq!(parsed.log_level, LogLevel::Info);

    Ok(())
}

/// Test that log levels deserialize from lowercase names
#[test]
fn test_config_serde_withLogLevel_shouldParseLowercase() -> Result<()> {
    let parsed: Config = serde_json::from_str(r#"{"log_level": "debug"}"#)?;

    assert_eq!(parsed.log_level, LogLevel::Debug);

    Ok(())
}

/// Test validation of supported language pairs
#[test]
fn test_config_validate_withSupportedLanguages_shouldSucceed() {
    let config = Config::default();

    assert!(config.validate().is_ok());
}

/// Test validation failure for unsupported languages
#[test]
fn test_config_validate_withUnsupportedLanguage_shouldFail() {
    let config = Config {
        source_language: "xx".to_string(),
        ..Config::default()
    };

    assert!(config.validate().is_err());
}
