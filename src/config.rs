// src/config.rs

//! Configuration loading utilities.
//!
//! Reads the TOML file, layers environment overrides on top, and validates
//! the result.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Config;

/// Environment variable naming the config file for the server.
pub const CONFIG_PATH_VAR: &str = "INDEXNOW_CONFIG";

/// Config file used when nothing else is given.
pub const DEFAULT_CONFIG_PATH: &str = "indexnow.toml";

/// Load configuration from `path` (defaults when absent), apply environment
/// overrides and validate.
pub fn load(path: &Path) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;
    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid configuration: {e}")))?;
    Ok(config)
}

/// Override config values from environment variables.
///
/// `lookup` is `std::env::var` in production; tests pass a closure.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("INDEXNOW_HOST") {
        config.site.host = host;
    }
    if let Some(key) = lookup("INDEXNOW_KEY") {
        config.site.key = key.trim().to_string();
    }
    if let Some(bind) = lookup("INDEXNOW_BIND") {
        config.server.bind = bind;
    }

    if let Some(value) = lookup("INDEXNOW_TIMEOUT_SECS") {
        config.submit.timeout_secs = parse_number("INDEXNOW_TIMEOUT_SECS", &value)?;
    }
    if let Some(value) = lookup("INDEXNOW_BATCH_SIZE") {
        config.submit.batch_size = parse_number("INDEXNOW_BATCH_SIZE", &value)?;
    }
    if let Some(value) = lookup("INDEXNOW_BATCH_DELAY_MS") {
        config.submit.batch_delay_ms = parse_number("INDEXNOW_BATCH_DELAY_MS", &value)?;
    }

    Ok(())
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::config(format!("{name} is not a valid number: {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_env_overrides_site_and_submit() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            env(&[
                ("INDEXNOW_HOST", "staging.rugbyaustralia2027.com"),
                ("INDEXNOW_KEY", " 0123456789abcdef\n"),
                ("INDEXNOW_BATCH_SIZE", "50"),
                ("INDEXNOW_BATCH_DELAY_MS", "0"),
            ]),
        )
        .unwrap();

        assert_eq!(config.site.host, "staging.rugbyaustralia2027.com");
        assert_eq!(config.site.key, "0123456789abcdef");
        assert_eq!(config.submit.batch_size, 50);
        assert_eq!(config.submit.batch_delay_ms, 0);
        assert_eq!(config.submit.timeout_secs, 30);
    }

    #[test]
    fn test_env_override_rejects_garbage_number() {
        let mut config = Config::default();
        let result = apply_env_overrides(&mut config, env(&[("INDEXNOW_TIMEOUT_SECS", "soon")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[submit]\nbatch_size = 20000").unwrap();

        let result = load(file.path());
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
