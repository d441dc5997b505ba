//! Inventory analytics presentation engines.
//!
//! The numbers (ABC classes, reorder points, EOQ, forecasts) are computed by an
//! external analytics service. This crate turns those already-computed records
//! into render-ready view models, implemented purely as deterministic logic
//! (no IO, no HTTP, no rendering).

pub mod band;
pub mod charts;
pub mod format;
pub mod optimization;
pub mod records;
pub mod reorder;
pub mod severity;
pub mod summary;
pub mod table;

pub use band::{
    BandChart, BandLayer, BandStyle, BandTooltip, DrawablePoint, ForecastView, LayerKind,
    compose_band, compose_chart,
};
pub use optimization::OptimizationField;
pub use records::{
    AbcCategory, ActionRequired, CapitalRiskRow, ClassSummary, Forecast, ForecastPoint,
    InventoryRow, MarginRow, OptimizationRow, SafetyStockRow,
};
pub use reorder::ReorderField;
pub use severity::{Severity, classify};
pub use summary::{AbcSummaryView, ClassCard, RevenueBar};
pub use table::{
    SearchQuery, SortDirection, SortKey, SortSpec, TableRow, TableState, TableView, ViewRow,
    compute_view, filter_view,
};
