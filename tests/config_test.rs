use chrono::Locale;
use saberboard::config::{current_locale, locale_from_tag, set_current_locale, Config};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.display.locale, "en-US");
    assert_eq!(config.display.date_style, "short");
    assert_eq!(config.display.time_style, "medium");
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid locale should fail
    config.display.locale = "xx-NOPE".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid date style
    config.display.locale = "en-US".to_string();
    config.display.date_style = "tiny".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.display.date_style = "short".to_string();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[display]
locale = "de-DE"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.display.locale, "de-DE");
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.display.date_style, "short");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("locale = \"en-US\""));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_locale_from_tag_spellings() {
    assert_eq!(locale_from_tag("en-US").unwrap(), Locale::en_US);
    assert_eq!(locale_from_tag("en_US").unwrap(), Locale::en_US);
    assert!(locale_from_tag("xx-NOPE").is_err());
}

#[test]
fn test_set_current_locale() {
    set_current_locale("de-DE").unwrap();
    assert_eq!(current_locale(), Locale::de_DE);

    // Restore the default for any other test in this binary
    set_current_locale("en-US").unwrap();
    assert_eq!(current_locale(), Locale::en_US);
}
