//! Shared boundary types.

use serde::{Deserialize, Serialize};

use vinolytics_analytics::{
    CapitalRiskRow, ClassSummary, Forecast, InventoryRow, MarginRow, OptimizationRow,
};

/// The six datasets behind one dashboard load.
///
/// Only ever built when every fetch succeeded; there is no partial form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub abc_summary: Vec<ClassSummary>,
    pub reorder_alerts: Vec<InventoryRow>,
    pub margin_bleeders: Vec<MarginRow>,
    pub capital_traps: Vec<CapitalRiskRow>,
    pub inventory_optimization: Vec<OptimizationRow>,
    pub demand_forecast: Option<Forecast>,
}

/// Connectivity state of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityState {
    /// The analytics service answered its health check.
    Online,
    /// Network unreachable or service unavailable.
    Offline,
}
