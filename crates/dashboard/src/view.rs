//! Dashboard view-model assembly.
//!
//! `Dashboard` holds the fetched data and the operator's UI selections. Every
//! call to [`Dashboard::view`] recomputes the whole view from scratch.

use serde::Serialize;

use vinolytics_analytics::band::{BandStyle, ForecastView};
use vinolytics_analytics::charts::{
    CapitalPoint, MarginBar, SafetyStockBars, capital_points, margin_bars, safety_stock_bars,
};
use vinolytics_analytics::summary::{AbcSummaryView, RevenueBar, revenue_bars, summarize};
use vinolytics_analytics::{
    InventoryRow, OptimizationRow, ReorderField, SafetyStockRow, SearchQuery, SortSpec, TableView,
    compute_view, filter_view,
};

use crate::types::DashboardData;

/// Session-local state of the reorder table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReorderUi {
    pub sort: SortSpec<ReorderField>,
    pub query: SearchQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    data: DashboardData,
    ui: ReorderUi,
    band_style: BandStyle,
    /// Simulator input supplied by the caller; not part of the fetched data.
    safety_stock: Vec<SafetyStockRow>,
}

impl Dashboard {
    pub fn new(data: DashboardData, ui: ReorderUi) -> Self {
        Self {
            data,
            ui,
            band_style: BandStyle::default(),
            safety_stock: Vec::new(),
        }
    }

    pub fn with_band_style(mut self, style: BandStyle) -> Self {
        self.band_style = style;
        self
    }

    pub fn with_safety_stock(mut self, rows: Vec<SafetyStockRow>) -> Self {
        self.safety_stock = rows;
        self
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn ui(&self) -> &ReorderUi {
        &self.ui
    }

    /// Header click on the reorder table.
    pub fn on_sort_click(&mut self, field: ReorderField) {
        self.ui.sort = self.ui.sort.request(field);
        tracing::debug!(field = ?self.ui.sort.field, direction = ?self.ui.sort.direction, "reorder sort changed");
    }

    /// Search box edit on the reorder table.
    pub fn on_search_input(&mut self, text: impl Into<String>) {
        self.ui.query.set(text);
    }

    pub fn view(&self) -> DashboardView {
        let data = &self.data;
        DashboardView {
            abc: summarize(&data.abc_summary),
            revenue: revenue_bars(&data.abc_summary),
            margins: margin_bars(&data.margin_bleeders),
            capital: capital_points(&data.capital_traps),
            safety_stock: safety_stock_bars(&self.safety_stock),
            action_items: data.reorder_alerts.len(),
            reorder: compute_view(&data.reorder_alerts, &self.ui.query, &self.ui.sort),
            sort: self.ui.sort,
            forecast: ForecastView::from_forecast(data.demand_forecast.as_ref(), &self.band_style),
            optimization: filter_view(&data.inventory_optimization, &SearchQuery::default()),
        }
    }
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub abc: AbcSummaryView,
    pub revenue: Vec<RevenueBar>,
    pub margins: Vec<MarginBar>,
    pub capital: Vec<CapitalPoint>,
    /// `None` hides the shock simulator panel.
    pub safety_stock: Option<Vec<SafetyStockBars>>,
    /// Reorder alerts before search filtering.
    pub action_items: usize,
    pub reorder: TableView<InventoryRow>,
    pub sort: SortSpec<ReorderField>,
    pub forecast: ForecastView,
    pub optimization: TableView<OptimizationRow>,
}

impl DashboardView {
    pub fn action_items_badge(&self) -> String {
        format!("{} Action Items", self.action_items)
    }
}
