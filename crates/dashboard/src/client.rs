//! Boundary client for the analytics service.
//!
//! A dashboard load is all-or-nothing: the six datasets are requested
//! concurrently and the first failure (transport error, non-2xx status, or an
//! undecodable body) fails the whole load.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use vinolytics_analytics::{
    CapitalRiskRow, ClassSummary, Forecast, InventoryRow, MarginRow, OptimizationRow,
};

use crate::config::DashboardConfig;
use crate::types::{ConnectivityState, DashboardData};

/// The six analytics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AbcSummary,
    ReorderAlerts,
    MarginBleeders,
    CapitalTraps,
    InventoryOptimization,
    DemandForecast,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::AbcSummary,
        Endpoint::ReorderAlerts,
        Endpoint::MarginBleeders,
        Endpoint::CapitalTraps,
        Endpoint::InventoryOptimization,
        Endpoint::DemandForecast,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AbcSummary => "/api/abc-summary",
            Endpoint::ReorderAlerts => "/api/reorder-alerts",
            Endpoint::MarginBleeders => "/api/margin-bleeders",
            Endpoint::CapitalTraps => "/api/capital-traps",
            Endpoint::InventoryOptimization => "/api/inventory-optimization",
            Endpoint::DemandForecast => "/api/demand-forecast",
        }
    }
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error on {endpoint}: {message}")]
    Network { endpoint: Endpoint, message: String },
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },
    #[error("could not decode {endpoint}: {message}")]
    Parse { endpoint: Endpoint, message: String },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Network { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Parse { endpoint, .. } => *endpoint,
        }
    }
}

/// Anything that can supply a complete dashboard dataset.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    /// Fetch all six datasets; any single failure fails the whole call.
    async fn fetch_dashboard(&self) -> Result<DashboardData, FetchError>;

    /// Human-readable location of the source (used in error messages).
    fn location(&self) -> &str;
}

/// HTTP client for the analytics service.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    http: reqwest::Client,
    api_url: String,
}

impl AnalyticsClient {
    pub fn new(config: &DashboardConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Check connectivity by hitting the service root.
    pub async fn health(&self) -> ConnectivityState {
        let url = format!("{}/", self.api_url);
        match self.http.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => ConnectivityState::Online,
            Ok(resp) => {
                tracing::warn!(status = resp.status().as_u16(), "health check returned non-success");
                ConnectivityState::Offline
            }
            Err(e) => {
                tracing::warn!(error = %e, "health check failed");
                ConnectivityState::Offline
            }
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, FetchError> {
        let url = format!("{}{}", self.api_url, endpoint.path());
        tracing::debug!(%endpoint, "fetching dataset");

        let resp = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(%endpoint, error = %e, "request failed");
            FetchError::Network {
                endpoint,
                message: e.to_string(),
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%endpoint, status = status.as_u16(), "non-success status");
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map_err(|e| {
            tracing::warn!(%endpoint, error = %e, "response body did not decode");
            FetchError::Parse {
                endpoint,
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl AnalyticsSource for AnalyticsClient {
    async fn fetch_dashboard(&self) -> Result<DashboardData, FetchError> {
        let (
            abc_summary,
            reorder_alerts,
            margin_bleeders,
            capital_traps,
            inventory_optimization,
            demand_forecast,
        ) = tokio::try_join!(
            self.fetch_json::<Vec<ClassSummary>>(Endpoint::AbcSummary),
            self.fetch_json::<Vec<InventoryRow>>(Endpoint::ReorderAlerts),
            self.fetch_json::<Vec<MarginRow>>(Endpoint::MarginBleeders),
            self.fetch_json::<Vec<CapitalRiskRow>>(Endpoint::CapitalTraps),
            self.fetch_json::<Vec<OptimizationRow>>(Endpoint::InventoryOptimization),
            self.fetch_json::<Option<Forecast>>(Endpoint::DemandForecast),
        )?;

        tracing::info!(
            abc = abc_summary.len(),
            reorder = reorder_alerts.len(),
            margins = margin_bleeders.len(),
            capital = capital_traps.len(),
            optimization = inventory_optimization.len(),
            forecast = demand_forecast.is_some(),
            "dashboard datasets loaded"
        );

        Ok(DashboardData {
            abc_summary,
            reorder_alerts,
            margin_bleeders,
            capital_traps,
            inventory_optimization,
            demand_forecast,
        })
    }

    fn location(&self) -> &str {
        &self.api_url
    }
}
