//! Records supplied by the analytics service.
//!
//! These mirror the service's JSON schema field for field. They are value
//! objects: the engines read them and build new view records, never edit them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use vinolytics_core::{BrandId, DomainError, ValueObject};

/// A brand whose stock has fallen below its reorder point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub brand: BrandId,
    pub description: String,
    pub avg_daily_sales: f64,
    pub current_on_hand: f64,
    #[serde(rename = "rop")]
    pub reorder_point: f64,
}

impl ValueObject for InventoryRow {}

/// Action tag attached to an optimization row by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionRequired {
    #[serde(rename = "Reorder Now")]
    ReorderNow,
    #[serde(rename = "Monitor")]
    Monitor,
}

impl ActionRequired {
    pub fn label(&self) -> &'static str {
        match self {
            ActionRequired::ReorderNow => "Reorder Now",
            ActionRequired::Monitor => "Monitor",
        }
    }

    pub fn needs_reorder(&self) -> bool {
        matches!(self, ActionRequired::ReorderNow)
    }
}

/// EOQ / ROP figures for a single brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRow {
    pub brand: BrandId,
    pub description: String,
    pub current_on_hand: u64,
    pub rop: u64,
    pub eoq: u64,
    pub action_required: ActionRequired,
}

impl ValueObject for OptimizationRow {}

/// ABC revenue tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AbcCategory {
    A,
    B,
    C,
}

impl AbcCategory {
    /// Display order of the summary cards.
    pub const ALL: [AbcCategory; 3] = [AbcCategory::A, AbcCategory::B, AbcCategory::C];

    pub fn letter(&self) -> char {
        match self {
            AbcCategory::A => 'A',
            AbcCategory::B => 'B',
            AbcCategory::C => 'C',
        }
    }

    /// Share of revenue the tier stands for.
    pub fn tagline(&self) -> &'static str {
        match self {
            AbcCategory::A => "Top 80% Rev",
            AbcCategory::B => "Next 15% Rev",
            AbcCategory::C => "Bottom 5% Rev",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AbcCategory::A => "#10b981",
            AbcCategory::B => "#fbbf24",
            AbcCategory::C => "#94a3b8",
        }
    }
}

impl core::fmt::Display for AbcCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Class {}", self.letter())
    }
}

impl core::str::FromStr for AbcCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(AbcCategory::A),
            "B" | "b" => Ok(AbcCategory::B),
            "C" | "c" => Ok(AbcCategory::C),
            other => Err(DomainError::unknown("ABC category", other)),
        }
    }
}

/// Aggregate revenue for one ABC tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub category: AbcCategory,
    pub brand_count: u64,
    pub total_revenue: f64,
}

impl ClassSummary {
    /// Zero-valued record shown for a tier the dataset does not mention.
    pub fn zero(category: AbcCategory) -> Self {
        Self {
            category,
            brand_count: 0,
            total_revenue: 0.0,
        }
    }
}

impl ValueObject for ClassSummary {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginRow {
    pub description: String,
    pub true_margin: f64,
}

impl ValueObject for MarginRow {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalRiskRow {
    pub description: String,
    pub avg_days_to_sell: f64,
    pub capital_tied_up: f64,
}

impl ValueObject for CapitalRiskRow {}

/// Safety stock under baseline and shocked lead-time variance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyStockRow {
    pub brand: BrandId,
    pub description: String,
    pub total_volume: f64,
    pub safety_stock: f64,
    pub shock_safety_stock: f64,
    pub additional_capital_tied_up: f64,
}

impl ValueObject for SafetyStockRow {}

/// One step of a demand forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(rename = "ds", deserialize_with = "deserialize_forecast_date")]
    pub timestamp: NaiveDate,
    #[serde(rename = "yhat")]
    pub predicted: f64,
    #[serde(rename = "yhat_lower")]
    pub lower_bound: f64,
    #[serde(rename = "yhat_upper")]
    pub upper_bound: f64,
}

impl ValueObject for ForecastPoint {}

/// Forecast for the top brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub forecast: Vec<ForecastPoint>,
}

impl Forecast {
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }
}

impl ValueObject for Forecast {}

/// Parse the date part of a forecast timestamp.
///
/// Accepts plain dates (`2024-03-05`), naive date-times with `T` or a space
/// separator, and RFC 3339 timestamps.
pub fn parse_forecast_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

fn deserialize_forecast_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_forecast_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognised forecast date: {raw}")))
}
