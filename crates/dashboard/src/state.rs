//! Dashboard load lifecycle.

use thiserror::Error;

use crate::client::{AnalyticsSource, FetchError};
use crate::view::{Dashboard, ReorderUi};

/// The single operator-facing failure: the service could not be reached or
/// one of its datasets could not be loaded.
#[derive(Debug, Error)]
#[error("Unable to connect to the analytics service at {location}.")]
pub struct ConnectionError {
    pub location: String,
    #[source]
    pub cause: FetchError,
}

impl ConnectionError {
    pub const TITLE: &'static str = "Connection Error";
    pub const RETRY_LABEL: &'static str = "Try Again";
}

#[derive(Debug, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Failed(ConnectionError),
    Ready(Box<Dashboard>),
}

impl DashboardState {
    /// Load every dataset and build the dashboard, or fail as a whole.
    pub async fn load<S>(source: &S, ui: ReorderUi) -> Self
    where
        S: AnalyticsSource + ?Sized,
    {
        match source.fetch_dashboard().await {
            Ok(data) => DashboardState::Ready(Box::new(Dashboard::new(data, ui))),
            Err(cause) => {
                tracing::error!(location = source.location(), error = %cause, "dashboard load failed");
                DashboardState::Failed(ConnectionError {
                    location: source.location().to_string(),
                    cause,
                })
            }
        }
    }

    /// Manual retry: a full reload that starts over from `ui`.
    pub async fn retry<S>(&mut self, source: &S, ui: ReorderUi)
    where
        S: AnalyticsSource + ?Sized,
    {
        *self = DashboardState::Loading;
        *self = Self::load(source, ui).await;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            DashboardState::Ready(d) => Some(&**d),
            _ => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        match self {
            DashboardState::Ready(d) => Some(&mut **d),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ConnectionError> {
        match self {
            DashboardState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::client::Endpoint;
    use crate::types::DashboardData;

    /// Fails a fixed number of times, then succeeds.
    struct FlakySource {
        failures_left: AtomicUsize,
    }

    #[async_trait]
    impl AnalyticsSource for FlakySource {
        async fn fetch_dashboard(&self) -> Result<DashboardData, FetchError> {
            let left = self.failures_left.load(Ordering::SeqCst);
            if left > 0 {
                self.failures_left.store(left - 1, Ordering::SeqCst);
                return Err(FetchError::Status {
                    endpoint: Endpoint::DemandForecast,
                    status: 500,
                });
            }
            Ok(DashboardData::default())
        }

        fn location(&self) -> &str {
            "http://stub"
        }
    }

    #[test]
    fn starts_loading() {
        assert!(DashboardState::default().is_loading());
    }

    #[tokio::test]
    async fn failure_is_a_single_connection_error() {
        let source = FlakySource {
            failures_left: AtomicUsize::new(1),
        };
        let state = DashboardState::load(&source, ReorderUi::default()).await;

        let err = state.error().expect("expected failure");
        assert_eq!(
            err.to_string(),
            "Unable to connect to the analytics service at http://stub."
        );
        assert_eq!(err.cause.endpoint(), Endpoint::DemandForecast);
        assert!(state.dashboard().is_none());
    }

    #[tokio::test]
    async fn retry_reloads_and_resets_ui_state() {
        let source = FlakySource {
            failures_left: AtomicUsize::new(1),
        };
        let mut state = DashboardState::load(&source, ReorderUi::default()).await;
        assert!(state.error().is_some());

        state.retry(&source, ReorderUi::default()).await;
        let dash = state.dashboard_mut().expect("expected dashboard after retry");
        dash.on_search_input("merlot");
        assert_eq!(dash.ui().query.as_str(), "merlot");

        state.retry(&source, ReorderUi::default()).await;
        assert!(state.dashboard().unwrap().ui().query.is_empty());
    }
}
