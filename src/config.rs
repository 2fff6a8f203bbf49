//! Build-time Configuration
//!
//! Values are baked in at compile time from environment variables, since a
//! CSR bundle has no process environment to read at runtime.

use log::LevelFilter;

/// Route the page returns to after a successful save.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Route of the item edit page.
pub const EDIT_ITEM_ROUTE: &str = "/items/edit";

const DEFAULT_TOAST_MS: u32 = 3000;

/// Frontend configuration provided via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash. Empty means same-origin.
    pub api_base_url: String,
    /// Maximum level forwarded to the browser console
    pub log_level: LevelFilter,
    /// How long a toast stays visible before auto-dismissing
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            log_level: LevelFilter::Info,
            toast_duration_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl AppConfig {
    /// Resolve from `VIRTUAL_STORE_*` variables captured at build time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("VIRTUAL_STORE_API_URL"),
            option_env!("VIRTUAL_STORE_LOG"),
            option_env!("VIRTUAL_STORE_TOAST_MS"),
        )
    }

    fn from_values(api_url: Option<&str>, log: Option<&str>, toast_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            log_level: log
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            toast_duration_ms: toast_ms
                .and_then(|ms| ms.trim().parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.toast_duration_ms, 3000);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("http://localhost:3333/"), Some("debug"), Some("5000"));
        assert_eq!(config.api_base_url, "http://localhost:3333");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.toast_duration_ms, 5000);
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = AppConfig::from_values(None, Some("loud"), Some("soon"));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.toast_duration_ms, 3000);
    }
}
