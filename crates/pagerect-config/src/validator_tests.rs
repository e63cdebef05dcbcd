use super::*;

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_invalid_endpoint() {
    let mut config = Config::default();
    config.browser.endpoint = "localhost:9222".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "browser.endpoint"));
}

#[test]
fn test_validate_zero_timeouts() {
    let mut config = Config::default();
    config.browser.request_timeout_secs = 0;
    config.browser.load_timeout_secs = 0;

    let result = ConfigValidator::validate(&config);
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_validate_negative_chrome() {
    let mut config = Config::default();
    config.chrome.side_borders = -16.0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "chrome.side_borders"));
}

#[test]
fn test_validate_nan_chrome() {
    let mut config = Config::default();
    config.chrome.click_y_bias = f64::NAN;

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "chrome.click_y_bias"));
}

#[test]
fn test_validate_large_chrome_warning() {
    let mut config = Config::default();
    config.chrome.title_bar = 250.0;

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "chrome.title_bar"));
}

#[test]
fn test_validate_empty_log_level_warning() {
    let mut config = Config::default();
    config.logging.level = "  ".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_into_result_reports_first_error() {
    let mut config = Config::default();
    config.browser.request_timeout_secs = 0;
    config.chrome.left_offset = -1.0;

    let err = ConfigValidator::validate(&config).into_result().unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => {
            assert_eq!(field, "browser.request_timeout_secs")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_into_result_passes_warnings_through() {
    let mut config = Config::default();
    config.chrome.left_offset = 500.0;

    let warnings = ConfigValidator::validate(&config).into_result().unwrap();
    assert_eq!(warnings.len(), 1);
}
