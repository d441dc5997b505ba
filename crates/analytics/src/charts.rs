//! Display-only chart models for the financial-risk panels.
//!
//! Margin and capital figures arrive ranked by the service. Nothing here
//! re-sorts or recomputes them; it only picks colours and tooltip text.

use serde::Serialize;

use crate::format;
use crate::records::{CapitalRiskRow, MarginRow, SafetyStockRow};

const LOSS_COLOR: &str = "#ef4444";
const THIN_MARGIN_COLOR: &str = "#f87171";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginBar {
    pub description: String,
    pub true_margin: f64,
    pub color: &'static str,
}

impl MarginBar {
    pub fn tooltip(&self) -> String {
        format!("True Margin: {}", format::currency_cents(self.true_margin))
    }
}

/// Bars for the "margin bleeders" chart; negative margins get the loss colour.
pub fn margin_bars(rows: &[MarginRow]) -> Vec<MarginBar> {
    rows.iter()
        .map(|r| MarginBar {
            description: r.description.clone(),
            true_margin: r.true_margin,
            color: if r.true_margin < 0.0 { LOSS_COLOR } else { THIN_MARGIN_COLOR },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapitalPoint {
    pub description: String,
    pub days_to_sell: f64,
    pub capital_tied_up: f64,
}

impl CapitalPoint {
    pub fn tooltip(&self) -> [String; 3] {
        [
            format!("Brand: {}", self.description),
            format!("Days to Sell: {}", format::days(self.days_to_sell)),
            format!("Capital Tied Up: {}", format::currency(self.capital_tied_up)),
        ]
    }
}

pub fn capital_points(rows: &[CapitalRiskRow]) -> Vec<CapitalPoint> {
    rows.iter()
        .map(|r| CapitalPoint {
            description: r.description.clone(),
            days_to_sell: r.avg_days_to_sell,
            capital_tied_up: r.capital_tied_up,
        })
        .collect()
}

/// Baseline vs. shocked safety stock for one brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyStockBars {
    pub description: String,
    pub baseline: f64,
    pub shocked: f64,
    pub additional_capital: f64,
}

impl SafetyStockBars {
    pub const BASELINE_LABEL: &'static str = "Baseline Safety Stock";
    pub const SHOCK_LABEL: &'static str = "Shock Scenario (+50% Variance)";

    pub fn tooltip(&self) -> [String; 3] {
        [
            format!("{}: {} units", Self::BASELINE_LABEL, format::grouped(format::whole_units(self.baseline))),
            format!("{}: {} units", Self::SHOCK_LABEL, format::grouped(format::whole_units(self.shocked))),
            format!("Added Capital Bound: {}", format::currency_cents(self.additional_capital)),
        ]
    }
}

/// `None` when there is nothing to simulate.
pub fn safety_stock_bars(rows: &[SafetyStockRow]) -> Option<Vec<SafetyStockBars>> {
    if rows.is_empty() {
        return None;
    }
    Some(
        rows.iter()
            .map(|r| SafetyStockBars {
                description: r.description.clone(),
                baseline: r.safety_stock,
                shocked: r.shock_safety_stock,
                additional_capital: r.additional_capital_tied_up,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinolytics_core::BrandId;

    #[test]
    fn negative_margins_use_loss_colour() {
        let bars = margin_bars(&[
            MarginRow { description: "Rosé".into(), true_margin: -1.5 },
            MarginRow { description: "Cava".into(), true_margin: 0.8 },
        ]);
        assert_eq!(bars[0].color, "#ef4444");
        assert_eq!(bars[1].color, "#f87171");
        assert_eq!(bars[0].tooltip(), "True Margin: -$1.50");
    }

    #[test]
    fn margin_order_is_untouched() {
        let bars = margin_bars(&[
            MarginRow { description: "B".into(), true_margin: 5.0 },
            MarginRow { description: "A".into(), true_margin: -5.0 },
        ]);
        assert_eq!(bars[0].description, "B");
    }

    #[test]
    fn capital_tooltip_text() {
        let points = capital_points(&[CapitalRiskRow {
            description: "Chianti".into(),
            avg_days_to_sell: 182.46,
            capital_tied_up: 48_250.4,
        }]);
        let tip = points[0].tooltip();
        assert_eq!(tip[1], "Days to Sell: 182.5 days");
        assert_eq!(tip[2], "Capital Tied Up: $48,250");
    }

    #[test]
    fn safety_stock_needs_rows() {
        assert!(safety_stock_bars(&[]).is_none());

        let bars = safety_stock_bars(&[SafetyStockRow {
            brand: BrandId::Number(8),
            description: "Riesling".into(),
            total_volume: 9000.0,
            safety_stock: 1200.4,
            shock_safety_stock: 1800.9,
            additional_capital_tied_up: 10234.5,
        }])
        .unwrap();
        let tip = bars[0].tooltip();
        assert_eq!(tip[0], "Baseline Safety Stock: 1,200 units");
        assert_eq!(tip[2], "Added Capital Bound: $10,234.50");
    }
}
