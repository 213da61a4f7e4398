//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// IndexNow caps a single submission at this many URLs.
pub const MAX_URLS_PER_SUBMISSION: usize = 10_000;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Site identity shared with the search engines
    #[serde(default)]
    pub site: SiteConfig,

    /// Outbound submission behavior
    #[serde(default)]
    pub submit: SubmitConfig,

    /// Known pages and content slugs
    #[serde(default)]
    pub content: ContentConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration, or the defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("Config file {:?} not found. Using defaults.", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        self.site.validate()?;

        if self.submit.user_agent.trim().is_empty() {
            return Err(AppError::validation("submit.user_agent is empty"));
        }
        if self.submit.timeout_secs == 0 {
            return Err(AppError::validation("submit.timeout_secs must be > 0"));
        }
        if self.submit.batch_size == 0 || self.submit.batch_size > MAX_URLS_PER_SUBMISSION {
            return Err(AppError::validation(format!(
                "submit.batch_size must be between 1 and {MAX_URLS_PER_SUBMISSION}"
            )));
        }
        if self.submit.endpoints.is_empty() {
            return Err(AppError::validation("No endpoints defined"));
        }
        for endpoint in &self.submit.endpoints {
            let parsed = url::Url::parse(endpoint)?;
            if parsed.scheme() != "https" {
                return Err(AppError::validation(format!(
                    "Endpoint must use https: {endpoint}"
                )));
            }
        }
        if self.server.bind.trim().is_empty() {
            return Err(AppError::validation("server.bind is empty"));
        }
        Ok(())
    }
}

/// Site identity: the host being notified about and its ownership key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Bare host name, e.g. `rugbyaustralia2027.com`
    #[serde(default = "defaults::host")]
    pub host: String,

    /// Shared secret published in the key file
    #[serde(default = "defaults::key")]
    pub key: String,
}

impl SiteConfig {
    pub fn new(host: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            key: key.into(),
        }
    }

    /// Site root, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }

    /// Path the key file is served from.
    pub fn key_file_path(&self) -> String {
        format!("/{}.txt", self.key)
    }

    /// Absolute URL of the key file, as sent in `keyLocation`.
    pub fn key_location(&self) -> String {
        format!("{}{}", self.base_url(), self.key_file_path())
    }

    /// Check host and key against the IndexNow rules.
    pub fn validate(&self) -> Result<()> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(AppError::validation("site.host is empty"));
        }
        if host.contains("://") || host.contains('/') {
            return Err(AppError::validation(format!(
                "site.host must be a bare host name, got {host:?}"
            )));
        }

        // Keys are 8-128 characters of a-z, A-Z, 0-9 and '-'.
        let key = &self.key;
        if !(8..=128).contains(&key.len()) {
            return Err(AppError::validation(
                "site.key must be between 8 and 128 characters",
            ));
        }
        if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(AppError::validation(
                "site.key may only contain letters, digits and '-'",
            ));
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            key: defaults::key(),
        }
    }
}

/// Outbound submission settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// IndexNow receivers notified on every submission
    #[serde(default = "defaults::endpoints")]
    pub endpoints: Vec<String>,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// URLs per batch when submitting the whole site
    #[serde(default = "defaults::batch_size")]
    pub batch_size: usize,

    /// Pause between batches in milliseconds
    #[serde(default = "defaults::batch_delay")]
    pub batch_delay_ms: u64,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoints: defaults::endpoints(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            batch_size: defaults::batch_size(),
            batch_delay_ms: defaults::batch_delay(),
        }
    }
}

/// Pages known to the site.
///
/// Slugs are turned into paths by [`crate::services::site_paths`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Fixed pages (home, schedule, tickets, ...)
    #[serde(default = "defaults::static_paths")]
    pub static_paths: Vec<String>,

    /// High-churn pages submitted by `--recent`
    #[serde(default = "defaults::recent_paths")]
    pub recent_paths: Vec<String>,

    #[serde(default = "defaults::teams")]
    pub teams: Vec<String>,

    #[serde(default = "defaults::venues")]
    pub venues: Vec<String>,

    #[serde(default = "defaults::cities")]
    pub cities: Vec<String>,

    #[serde(default = "defaults::matches")]
    pub matches: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            static_paths: defaults::static_paths(),
            recent_paths: defaults::recent_paths(),
            teams: defaults::teams(),
            venues: defaults::venues(),
            cities: defaults::cities(),
            matches: defaults::matches(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "defaults::bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: defaults::bind(),
        }
    }
}

mod defaults {
    // Site defaults
    pub fn host() -> String {
        "rugbyaustralia2027.com".into()
    }
    pub fn key() -> String {
        "4f8c2e7a91b34d6f8a0c5e3b7d2f9a61".into()
    }

    // Submit defaults
    pub fn endpoints() -> Vec<String> {
        vec![
            "https://www.bing.com/indexnow".into(),
            "https://api.indexnow.org/indexnow".into(),
            "https://yandex.com/indexnow".into(),
            "https://search.seznam.cz/indexnow".into(),
        ]
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; indexnow-notifier/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn batch_size() -> usize {
        100
    }
    pub fn batch_delay() -> u64 {
        1000
    }

    // Content defaults
    pub fn static_paths() -> Vec<String> {
        [
            "/",
            "/schedule",
            "/tickets",
            "/teams",
            "/venues",
            "/cities",
            "/travel",
            "/travel/accommodation",
            "/travel/getting-around",
            "/pools",
            "/news",
            "/faq",
            "/about",
            "/privacy",
            "/terms",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
    pub fn recent_paths() -> Vec<String> {
        vec!["/".into(), "/schedule".into(), "/tickets".into()]
    }
    pub fn teams() -> Vec<String> {
        [
            "australia",
            "new-zealand",
            "south-africa",
            "ireland",
            "france",
            "england",
            "scotland",
            "wales",
            "argentina",
            "italy",
            "fiji",
            "japan",
            "georgia",
            "samoa",
            "tonga",
            "uruguay",
            "usa",
            "chile",
            "portugal",
            "spain",
            "romania",
            "canada",
            "hong-kong-china",
            "zimbabwe",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
    pub fn venues() -> Vec<String> {
        [
            "stadium-australia",
            "suncorp-stadium",
            "allianz-stadium",
            "optus-stadium",
            "adelaide-oval",
            "aami-park",
            "mcdonald-jones-stadium",
            "queensland-country-bank-stadium",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
    pub fn cities() -> Vec<String> {
        [
            "sydney",
            "brisbane",
            "perth",
            "adelaide",
            "melbourne",
            "newcastle",
            "townsville",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
    pub fn matches() -> Vec<String> {
        (1..=52).map(|n| format!("match-{n}")).collect()
    }

    // Server defaults
    pub fn bind() -> String {
        "0.0.0.0:3000".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_config_targets_four_endpoints() {
        let config = Config::default();
        assert_eq!(config.submit.endpoints.len(), 4);
        assert_eq!(config.submit.batch_size, 100);
        assert_eq!(config.submit.batch_delay_ms, 1000);
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.submit.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_batch_size_out_of_range() {
        let mut config = Config::default();
        config.submit.batch_size = 0;
        assert!(config.validate().is_err());

        config.submit.batch_size = MAX_URLS_PER_SUBMISSION + 1;
        assert!(config.validate().is_err());

        config.submit.batch_size = MAX_URLS_PER_SUBMISSION;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_plain_http_endpoint() {
        let mut config = Config::default();
        config.submit.endpoints = vec!["http://www.bing.com/indexnow".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_host_with_scheme() {
        let site = SiteConfig::new("https://rugbyaustralia2027.com", "abcdef123456");
        assert!(site.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_keys() {
        assert!(SiteConfig::new("example.com", "short").validate().is_err());
        assert!(SiteConfig::new("example.com", "has_underscore_key").validate().is_err());
        assert!(SiteConfig::new("example.com", "x".repeat(129)).validate().is_err());
        assert!(SiteConfig::new("example.com", "abc-DEF-123").validate().is_ok());
    }

    #[test]
    fn key_location_uses_host_and_key() {
        let site = SiteConfig::new("rugbyaustralia2027.com", "abc123def456");
        assert_eq!(site.key_file_path(), "/abc123def456.txt");
        assert_eq!(
            site.key_location(),
            "https://rugbyaustralia2027.com/abc123def456.txt"
        );
    }

    #[test]
    fn load_partial_toml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[site]
host = "staging.rugbyaustralia2027.com"

[submit]
batch_size = 25
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.site.host, "staging.rugbyaustralia2027.com");
        assert_eq!(config.site.key, SiteConfig::default().key);
        assert_eq!(config.submit.batch_size, 25);
        assert_eq!(config.submit.timeout_secs, 30);
        assert_eq!(config.content.teams.len(), 24);
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn load_or_default_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[site\nkey = \"operator-key-1234\"").unwrap();

        let err = Config::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Toml(_)));
    }
}
