/*!
 * Tests for application configuration
 */

use ytwisdom::Config;
use ytwisdom::app_config::LogLevel;

/// Test default configuration values
#[test]
fn test_default_config_shouldUseDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.language, "en");
    assert_eq!(config.provider.command, "yt-dlp");
    assert_eq!(config.summarizer.command, "fabric");
    assert_eq!(config.summarizer.pattern, "extract_article_wisdom");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.output_dir.is_none());
    assert!(config.validate().is_ok());
}

/// Test the fallback output directory ends with fabric/youtube
#[test]
fn test_resolved_output_dir_withNoOverride_shouldFallBack() {
    let config = Config::default();
    let dir = config.resolved_output_dir();

    assert!(dir.ends_with("fabric/youtube"));
}

/// Test a partial config file picks up defaults for missing fields
#[test]
fn test_config_deserialization_withPartialJson_shouldFillDefaults() {
    let config: Config = serde_json::from_str(r#"{"language": "es"}"#).unwrap();

    assert_eq!(config.language, "es");
    assert_eq!(config.provider.command, "yt-dlp");
    assert_eq!(config.summarizer.pattern, "extract_article_wisdom");
}

/// Test validation rejects blank collaborator commands
#[test]
fn test_validate_withBlankFields_shouldFail() {
    let mut config = Config::default();
    config.language = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.summarizer.pattern = String::new();
    assert!(config.validate().is_err());
}

/// Test config round-trips through JSON
#[test]
fn test_config_serialization_withDefaults_shouldRoundTrip() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.language, config.language);
    assert_eq!(restored.log_level, config.log_level);
}
