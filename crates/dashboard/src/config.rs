//! Environment-driven configuration.

use std::time::Duration;

use thiserror::Error;

use vinolytics_analytics::{ReorderField, SearchQuery, SortDirection, SortSpec};

use crate::view::ReorderUi;

pub const ENV_API_URL: &str = "VINOLYTICS_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "VINOLYTICS_TIMEOUT_SECS";
pub const ENV_SEARCH: &str = "VINOLYTICS_SEARCH";
pub const ENV_SORT: &str = "VINOLYTICS_SORT";
pub const ENV_SORT_DIR: &str = "VINOLYTICS_SORT_DIR";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the analytics service, without a trailing slash.
    pub api_url: String,
    pub request_timeout: Duration,
    /// Initial reorder-table search.
    pub search: String,
    /// Initial reorder-table sort.
    pub sort: SortSpec<ReorderField>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            search: String::new(),
            sort: SortSpec::default(),
        }
    }
}

impl DashboardConfig {
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8000";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                return Err(invalid(ENV_API_URL, "must not be empty"));
            }
            config.api_url = url.to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|e| invalid(ENV_TIMEOUT_SECS, format!("{e}")))?;
            if secs == 0 {
                return Err(invalid(ENV_TIMEOUT_SECS, "must be at least 1"));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(search) = lookup(ENV_SEARCH) {
            config.search = search;
        }

        if let Some(raw) = lookup(ENV_SORT) {
            let field: ReorderField = raw
                .parse()
                .map_err(|e| invalid(ENV_SORT, format!("{e}")))?;
            config.sort = SortSpec::ascending(field);
        }

        if let Some(raw) = lookup(ENV_SORT_DIR) {
            let direction: SortDirection = raw
                .parse()
                .map_err(|e| invalid(ENV_SORT_DIR, format!("{e}")))?;
            config.sort = config.sort.with_direction(direction);
        }

        Ok(config)
    }

    /// Reorder-table UI state a fresh load starts from.
    pub fn initial_ui(&self) -> ReorderUi {
        ReorderUi {
            sort: self.sort,
            query: SearchQuery::new(self.search.clone()),
        }
    }
}

fn invalid(var: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        var,
        reason: reason.into(),
    }
}
