//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Public URL used when `SITE_URL` is not set
pub const DEFAULT_SITE_URL: &str = "http://127.0.0.1:3000";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Public URL of the site, used for absolute links in the sitemap
    /// Example: https://www.pulsemark.io
    pub site_url: Option<String>,

    /// `tracing_subscriber` filter directives
    /// Example: pulsemark=debug,tower_http=info
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            site_url: non_empty_var("SITE_URL"),
            log_filter: non_empty_var("RUST_LOG"),
        }
    }

    /// Check if a public site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Site URL without a trailing slash
    pub fn site_url(&self) -> &str {
        self.site_url
            .as_deref()
            .unwrap_or(DEFAULT_SITE_URL)
            .trim_end_matches('/')
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            site_url: Some("https://www.pulsemark.io/".to_string()),
            log_filter: Some("pulsemark=debug".to_string()),
        };

        assert!(config.has_site_url());
        assert_eq!(config.site_url(), "https://www.pulsemark.io");
        assert_eq!(config.log_filter(), "pulsemark=debug");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert!(!config.has_site_url());
        assert_eq!(config.site_url(), DEFAULT_SITE_URL);
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }
}
