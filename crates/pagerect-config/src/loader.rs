//! Configuration loader.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a file, falling back to defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load(path)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    ///
    /// Comment lines are left as they are.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        let mut lines = Vec::new();
        for line in content.lines() {
            if line.trim_start().starts_with('#') {
                lines.push(line.to_string());
                continue;
            }

            let mut expanded = line.to_string();
            for cap in re.captures_iter(line) {
                let var_name = &cap[1];
                let var_value = std::env::var(var_name)
                    .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
                expanded = expanded.replace(&cap[0], &var_value);
            }
            lines.push(expanded);
        }

        Ok(lines.join("\n"))
    }

    /// Expand shell-style paths (e.g., `~/.config`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.browser.endpoint, "http://localhost:9222");
        assert_eq!(config.browser.request_timeout_secs, 30);
    }

    #[test]
    fn test_expand_path() {
        let expanded = ConfigLoader::expand_path("~/.pagerect");
        assert!(!expanded.starts_with('~'));
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [browser]
            endpoint = "http://127.0.0.1:9333"
            request_timeout_secs = 5

            [chrome]
            left_offset = 8.0
            side_borders = 14.0
            title_bar = 30.0
            click_y_bias = 2.0

            [logging]
            level = "debug"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.browser.endpoint, "http://127.0.0.1:9333");
        assert_eq!(config.browser.request_timeout_secs, 5);
        assert_eq!(config.browser.load_timeout_secs, 10);
        assert_eq!(config.chrome.title_bar, 30.0);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[chrome]").unwrap();
        writeln!(file, "click_y_bias = 5.0").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.chrome.click_y_bias, 5.0);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            ConfigLoader::load_or_default(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let content = "invalid = [unclosed";
        let result = ConfigLoader::load_str(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("PAGERECT_TEST_ENDPOINT", "http://10.0.0.2:9222");
        }
        let content = "[browser]\nendpoint = \"${PAGERECT_TEST_ENDPOINT}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.browser.endpoint, "http://10.0.0.2:9222");
        unsafe {
            std::env::remove_var("PAGERECT_TEST_ENDPOINT");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_TEST_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_comment_lines_are_not_expanded() {
        let content = "# endpoint may reference ${PAGERECT_UNSET_IN_COMMENT}\n[browser]\n  # ${ALSO_UNSET}\nendpoint = \"http://localhost:9333\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.browser.endpoint, "http://localhost:9333");
    }
}
