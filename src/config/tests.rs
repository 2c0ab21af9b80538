//! Tests for config module.

use super::*;
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

// ==================== Duration parsing tests ====================

#[test]
fn test_parse_duration_seconds() {
    let d = duration::parse_duration("10s").unwrap();
    assert_eq!(d, Duration::from_secs(10));
}

#[test]
fn test_parse_duration_minutes() {
    let d = duration::parse_duration("5m").unwrap();
    assert_eq!(d, Duration::from_secs(300));
}

#[test]
fn test_parse_duration_hours() {
    let d = duration::parse_duration("4h").unwrap();
    assert_eq!(d, Duration::from_secs(14_400));
}

#[test]
fn test_parse_duration_days() {
    let d = duration::parse_duration("1d").unwrap();
    assert_eq!(d, Duration::from_secs(86_400));
}

#[test]
fn test_parse_duration_milliseconds() {
    let d = duration::parse_duration("250ms").unwrap();
    assert_eq!(d, Duration::from_millis(250));
}

#[test]
fn test_parse_duration_bare_number_is_seconds() {
    let d = duration::parse_duration("15").unwrap();
    assert_eq!(d, Duration::from_secs(15));
}

#[test]
fn test_parse_duration_empty() {
    let d = duration::parse_duration("").unwrap();
    assert_eq!(d, Duration::ZERO);
}

#[test]
fn test_parse_duration_invalid_unit() {
    let result = duration::parse_duration("10w");
    assert!(result.unwrap_err().contains("unknown duration unit"));
}

#[test]
fn test_parse_duration_invalid_number() {
    let result = duration::parse_duration("1.2.3s");
    assert!(result.unwrap_err().contains("invalid duration number"));
}

// ==================== YAML field loading tests ====================

/// Parse config from YAML string (for testing).
fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

fn minimal_valid_yaml() -> String {
    r#"
app:
  name: desk
  env: development

strategy:
  profile: balanced
  system_max_leverage: 25
"#
    .to_string()
}

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_map(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_load_app_fields() {
    let yaml = r#"
app:
  name: desk
  env: production

strategy:
  profile: aggressive
  system_max_leverage: 20
"#;
    let cfg = from_yaml(yaml).unwrap();

    assert_eq!(cfg.app.name, "desk");
    assert_eq!(cfg.app.env, "production");
    assert!(cfg.app.is_production());
}

#[test]
fn test_development_env_is_not_production() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    assert!(!cfg.app.is_production());
}

#[test]
fn test_load_strategy_fields() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    assert_eq!(cfg.strategy.profile, "balanced");
    assert_eq!(cfg.strategy.system_max_leverage, 25);
    assert!(cfg.prompt.is_none());
}

#[test]
fn test_load_prompt_fields() {
    let yaml = r#"
app:
  name: desk
  env: dev

strategy:
  profile: swing-trend
  system_max_leverage: 10

prompt:
  cycle_interval: 5m
  monitor_interval: 10s
  max_positions: 3
"#;
    let cfg = from_yaml(yaml).unwrap();

    let prompt = cfg.prompt.unwrap();
    assert_eq!(prompt.cycle_interval, Duration::from_secs(300));
    assert_eq!(prompt.monitor_interval, Duration::from_secs(10));
    assert_eq!(prompt.max_positions, Some(3));
}

#[test]
fn test_load_prompt_defaults() {
    let yaml = r#"
app:
  name: desk
  env: dev

strategy:
  profile: swing-trend
  system_max_leverage: 10

prompt:
  max_positions: 2
"#;
    let cfg = from_yaml(yaml).unwrap();

    let prompt = cfg.prompt.unwrap();
    assert_eq!(prompt.cycle_interval, Duration::ZERO);
    assert_eq!(prompt.monitor_interval, Duration::ZERO);
}

#[test]
fn test_parse_rejects_negative_leverage() {
    let yaml = r#"
app:
  name: desk
  env: dev

strategy:
  profile: balanced
  system_max_leverage: -5
"#;
    assert!(matches!(from_yaml(yaml), Err(ConfigError::Parse(_))));
}

#[test]
fn test_parse_rejects_missing_strategy() {
    let yaml = r#"
app:
  name: desk
  env: dev
"#;
    assert!(matches!(from_yaml(yaml), Err(ConfigError::Parse(_))));
}

// ==================== Override tests ====================

#[test]
fn test_overrides_applied() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    let lookup = env_map(&[(PROFILE_ENV, "ultra-short"), (MAX_LEVERAGE_ENV, " 50 ")]);

    cfg.apply_overrides(lookup).unwrap();

    assert_eq!(cfg.strategy.profile, "ultra-short");
    assert_eq!(cfg.strategy.system_max_leverage, 50);
}

#[test]
fn test_overrides_absent_keep_file_values() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.apply_overrides(no_env).unwrap();

    assert_eq!(cfg.strategy.profile, "balanced");
    assert_eq!(cfg.strategy.system_max_leverage, 25);
}

#[test]
fn test_overrides_ignore_blank_values() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    let lookup = env_map(&[(PROFILE_ENV, "  "), (MAX_LEVERAGE_ENV, "")]);

    cfg.apply_overrides(lookup).unwrap();

    assert_eq!(cfg.strategy.profile, "balanced");
    assert_eq!(cfg.strategy.system_max_leverage, 25);
}

#[test]
fn test_overrides_reject_invalid_leverage() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    let lookup = env_map(&[(MAX_LEVERAGE_ENV, "ten")]);

    let err = cfg.apply_overrides(lookup).unwrap_err();
    assert!(err.to_string().contains(MAX_LEVERAGE_ENV));
}

// ==================== Validation tests ====================

#[test]
fn test_validate_minimal_config() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_validate_empty_app_name() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.app.name = String::new();

    let result = cfg.validate();
    assert!(result.unwrap_err().to_string().contains("app.name is required"));
}

#[test]
fn test_validate_zero_leverage() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.strategy.system_max_leverage = 0;

    let result = cfg.validate();
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("system_max_leverage must be positive"));
}

#[test]
fn test_validate_unknown_profile() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.strategy.profile = "yolo".to_string();

    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Strategy(_)));
    assert!(err.to_string().contains("yolo"));
}

#[test]
fn test_validate_zero_max_positions() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.prompt = Some(PromptConfig {
        max_positions: Some(0),
        ..Default::default()
    });

    let result = cfg.validate();
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("max_positions must be positive"));
}

#[test]
fn test_validate_production_requires_monitor_interval() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.app.env = "production".to_string();

    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("prompt.monitor_interval is required"));

    cfg.prompt = Some(PromptConfig {
        max_positions: Some(3),
        ..Default::default()
    });
    assert!(cfg.validate().is_err());
}

#[test]
fn test_validate_production_with_monitor_interval() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.app.env = "staging".to_string();
    cfg.prompt = Some(PromptConfig {
        monitor_interval: Duration::from_secs(10),
        ..Default::default()
    });

    assert!(cfg.validate().is_ok());
}

// ==================== Derivation tests ====================

#[test]
fn test_profile_id_from_config() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    assert_eq!(cfg.profile_id().unwrap(), ProfileId::Balanced);
}

#[test]
fn test_derive_from_config() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.strategy.profile = "ultra-short".to_string();

    let params = cfg.derive().unwrap();
    assert_eq!(params.leverage_min, 13);
    assert_eq!(params.leverage_max, 19);
}

#[test]
fn test_prompt_context_from_config() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.prompt = Some(PromptConfig {
        cycle_interval: Duration::from_secs(180),
        monitor_interval: Duration::ZERO,
        max_positions: Some(4),
    });

    let ctx = cfg.prompt_context();
    assert_eq!(ctx.system_max_leverage, Some(25));
    assert_eq!(ctx.cycle_interval, Some(Duration::from_secs(180)));
    assert_eq!(ctx.monitor_interval, None);
    assert_eq!(ctx.max_positions, Some(4));
    assert_eq!(ctx.open_positions, None);
    assert_eq!(ctx.current_time, None);
}

#[test]
fn test_prompt_context_without_prompt_section() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    let ctx = cfg.prompt_context();
    assert_eq!(ctx.system_max_leverage, Some(25));
    assert_eq!(ctx.cycle_interval, None);
}

// ==================== File loading tests ====================

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(minimal_valid_yaml().as_bytes()).unwrap();

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(cfg.app.name, "desk");
    assert_eq!(cfg.app.env, "development");
}

#[test]
fn test_load_file_rejects_unknown_profile() {
    let yaml = r#"
app:
  name: desk
  env: development

strategy:
  profile: martingale
  system_max_leverage: 25
"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let result = Config::load(file.path().to_str().unwrap());
    assert!(matches!(result, Err(ConfigError::Strategy(_))));
}

#[test]
fn test_load_file_not_found() {
    let result = Config::load("/nonexistent/path/config.yaml");
    assert!(matches!(result, Err(ConfigError::ReadFile(_))));
}

#[test]
fn test_load_invalid_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"app: [unclosed").unwrap();

    let result = Config::load(file.path().to_str().unwrap());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
