//! Confidence-band composition for demand forecasts.
//!
//! A band is drawn as three stacked layers, back to front:
//!
//! 1. a fill from the axis up to `upper_bound` in the band colour,
//! 2. a fill from the axis up to `lower_bound` in the background colour, which
//!    masks everything below the lower bound,
//! 3. a stroked line at `predicted` with no fill.
//!
//! What remains visible between (1) and (2) is exactly the
//! `[lower_bound, upper_bound]` strip. Any target that paints in order (SVG,
//! canvas, a character grid) gets the same picture.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format;
use crate::records::{Forecast, ForecastPoint};

/// Clamp to zero and round to the nearest whole unit.
pub fn clamp_units(value: f64) -> u64 {
    let rounded = value.round();
    if rounded > 0.0 { rounded as u64 } else { 0 }
}

/// A forecast step ready for plotting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawablePoint {
    pub timestamp: NaiveDate,
    pub label: String,
    pub predicted: u64,
    pub lower_bound: u64,
    pub upper_bound: u64,
}

impl DrawablePoint {
    pub fn from_forecast(point: &ForecastPoint) -> Self {
        Self {
            timestamp: point.timestamp,
            label: format::date_label(point.timestamp),
            predicted: clamp_units(point.predicted),
            lower_bound: clamp_units(point.lower_bound),
            upper_bound: clamp_units(point.upper_bound),
        }
    }

    /// `lower_bound <= predicted <= upper_bound`.
    ///
    /// Independent clamping and rounding can break this for narrow bands; such
    /// points are still drawn as-is.
    pub fn is_ordered(&self) -> bool {
        self.lower_bound <= self.predicted && self.predicted <= self.upper_bound
    }
}

/// Compose drawable points in the order supplied (the series is not re-sorted).
pub fn compose_band(series: &[ForecastPoint]) -> Vec<DrawablePoint> {
    let points: Vec<DrawablePoint> = series.iter().map(DrawablePoint::from_forecast).collect();

    let unordered = points.iter().filter(|p| !p.is_ordered()).count();
    if unordered > 0 {
        tracing::debug!(
            unordered,
            total = points.len(),
            "forecast points with out-of-order bounds after clamping"
        );
    }

    points
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    UpperFill,
    LowerMask,
    PredictedLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: u32,
}

/// One paint pass over the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandLayer {
    pub kind: LayerKind,
    pub values: Vec<u64>,
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
    /// Whether hover/tooltip/legend may target this layer.
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandStyle {
    pub band_fill: String,
    pub background: String,
    pub line_color: String,
    pub line_width: u32,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            band_fill: "#94a3b8".to_string(),
            background: "#ffffff".to_string(),
            line_color: "#6366f1".to_string(),
            line_width: 3,
        }
    }
}

/// Hover payload for one time step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandTooltip {
    pub label: String,
    pub predicted: u64,
    pub optimistic: u64,
    pub pessimistic: u64,
}

impl BandTooltip {
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Predicted Demand: {} units", self.predicted),
            format!("Optimistic: {} units", self.optimistic),
            format!("Pessimistic: {} units", self.pessimistic),
        ]
    }
}

/// Points plus their layer stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandChart {
    pub points: Vec<DrawablePoint>,
    layers: [BandLayer; 3],
}

impl BandChart {
    /// Layers in paint order (back to front).
    pub fn layers(&self) -> &[BandLayer] {
        &self.layers
    }

    pub fn layer(&self, kind: LayerKind) -> &BandLayer {
        match kind {
            LayerKind::UpperFill => &self.layers[0],
            LayerKind::LowerMask => &self.layers[1],
            LayerKind::PredictedLine => &self.layers[2],
        }
    }

    /// Layers exposed to hover/tooltip handling.
    pub fn interactive_layers(&self) -> impl Iterator<Item = &BandLayer> {
        self.layers.iter().filter(|l| l.interactive)
    }

    pub fn tooltip(&self, index: usize) -> Option<BandTooltip> {
        self.points.get(index).map(|p| BandTooltip {
            label: p.label.clone(),
            predicted: p.predicted,
            optimistic: p.upper_bound,
            pessimistic: p.lower_bound,
        })
    }

    /// Largest value any layer reaches (for y-axis scaling).
    pub fn y_max(&self) -> u64 {
        self.points
            .iter()
            .map(|p| p.upper_bound.max(p.predicted).max(p.lower_bound))
            .max()
            .unwrap_or(0)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }
}

/// Compose points and the three-layer stack.
pub fn compose_chart(series: &[ForecastPoint], style: &BandStyle) -> BandChart {
    let points = compose_band(series);

    let upper = BandLayer {
        kind: LayerKind::UpperFill,
        values: points.iter().map(|p| p.upper_bound).collect(),
        fill: Some(style.band_fill.clone()),
        stroke: None,
        interactive: false,
    };
    let mask = BandLayer {
        kind: LayerKind::LowerMask,
        values: points.iter().map(|p| p.lower_bound).collect(),
        fill: Some(style.background.clone()),
        stroke: None,
        interactive: false,
    };
    let line = BandLayer {
        kind: LayerKind::PredictedLine,
        values: points.iter().map(|p| p.predicted).collect(),
        fill: None,
        stroke: Some(Stroke {
            color: style.line_color.clone(),
            width: style.line_width,
        }),
        interactive: true,
    };

    BandChart {
        points,
        layers: [upper, mask, line],
    }
}

/// Forecast panel contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ForecastView {
    /// No forecast, or one without points.
    Unavailable,
    Chart { brand_name: String, chart: BandChart },
}

impl ForecastView {
    pub const UNAVAILABLE_TITLE: &'static str = "No Forecast Data";
    pub const UNAVAILABLE_DETAIL: &'static str = "Unable to load demand forecast at this time.";

    pub fn from_forecast(forecast: Option<&Forecast>, style: &BandStyle) -> Self {
        match forecast {
            Some(f) if !f.is_empty() => ForecastView::Chart {
                brand_name: f.brand_name.clone(),
                chart: compose_chart(&f.forecast, style),
            },
            _ => ForecastView::Unavailable,
        }
    }
}
