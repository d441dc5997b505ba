//! `vinolytics-dashboard`
//!
//! **Responsibility:** operator-facing inventory analytics dashboard.
//!
//! This crate provides:
//! - The boundary client that loads all six analytics datasets at once
//! - The dashboard state machine (loading / connection error / ready)
//! - View-model assembly over the pure engines in `vinolytics-analytics`
//! - A plain-text renderer used by the terminal binary
//!
//! The analytics service stays the authority for every number shown; nothing
//! here recomputes ABC classes, reorder points, or forecasts.

pub mod client;
pub mod config;
pub mod render;
pub mod state;
pub mod types;
pub mod view;

pub use client::{AnalyticsClient, AnalyticsSource, Endpoint, FetchError};
pub use config::{ConfigError, DashboardConfig};
pub use state::{ConnectionError, DashboardState};
pub use types::{ConnectivityState, DashboardData};
pub use view::{Dashboard, DashboardView, ReorderUi};
