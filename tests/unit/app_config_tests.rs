/*!
 * Tests for application configuration functionality
 */

use che2_subtitles::app_config::{Config, ExportFormat, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.access_code, "0001");
    assert_eq!(config.export.filename_prefix, "찬양자막");
    assert_eq!(config.export.format, ExportFormat::Docx);
    assert!(!config.session.part_mode);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.access_code = String::new();
    assert!(config.validate().is_err());
    config.access_code = "1234".to_string();

    config.export.filename_prefix = "  ".to_string();
    assert!(config.validate().is_err());

    config.export.filename_prefix = "a/b".to_string();
    assert!(config.validate().is_err());

    config.export.filename_prefix = "worship".to_string();
    assert!(config.validate().is_ok());
}

/// Missing fields fall back to defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{"export": {"format": "text"}, "log_level": "debug"}"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.access_code, "0001");
    assert_eq!(config.export.format, ExportFormat::Text);
    assert_eq!(config.export.filename_prefix, "찬양자막");
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Round trip through the file format written on first start
#[test]
fn test_config_serialize_shouldReadBackEqual() {
    let mut config = Config::default();
    config.session.singer = "김OO 집사 특송".to_string();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

/// Export format parsing
#[test]
fn test_exportFormat_fromStr_shouldAcceptAliases() {
    assert_eq!("WORD".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
    assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
    assert!("pdf".parse::<ExportFormat>().is_err());
}
