//! Inventory-optimization (EOQ / ROP) table.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use vinolytics_core::DomainError;

use crate::format;
use crate::records::{ActionRequired, OptimizationRow};
use crate::reorder::brand_key;
use crate::table::{SortKey, TableRow, ViewRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationField {
    Brand,
    Description,
    CurrentOnHand,
    Rop,
    Eoq,
    Action,
}

impl OptimizationField {
    pub const COLUMNS: [OptimizationField; 6] = [
        OptimizationField::Brand,
        OptimizationField::Description,
        OptimizationField::CurrentOnHand,
        OptimizationField::Rop,
        OptimizationField::Eoq,
        OptimizationField::Action,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            OptimizationField::Brand => "Brand",
            OptimizationField::Description => "Item Name",
            OptimizationField::CurrentOnHand => "Current Stock",
            OptimizationField::Rop => "Reorder Point (ROP)",
            OptimizationField::Eoq => "Optimized Order Qty (EOQ)",
            OptimizationField::Action => "Status",
        }
    }
}

impl core::str::FromStr for OptimizationField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "brand" => Ok(OptimizationField::Brand),
            "description" => Ok(OptimizationField::Description),
            "current_on_hand" => Ok(OptimizationField::CurrentOnHand),
            "rop" => Ok(OptimizationField::Rop),
            "eoq" => Ok(OptimizationField::Eoq),
            "action_required" | "action" => Ok(OptimizationField::Action),
            other => Err(DomainError::unknown("sort field", other)),
        }
    }
}

impl TableRow for OptimizationRow {
    type Field = OptimizationField;
    type Tag = ActionRequired;

    const EMPTY_MESSAGE: &'static str = "No inventory optimization data available right now.";

    fn search_text(&self) -> &str {
        &self.description
    }

    fn id_text(&self) -> String {
        self.brand.as_text()
    }

    fn sort_key(&self, field: OptimizationField) -> SortKey<'_> {
        match field {
            OptimizationField::Brand => brand_key(&self.brand),
            OptimizationField::Description => SortKey::Text(Cow::Borrowed(&self.description)),
            OptimizationField::CurrentOnHand => SortKey::Number(self.current_on_hand as f64),
            OptimizationField::Rop => SortKey::Number(self.rop as f64),
            OptimizationField::Eoq => SortKey::Number(self.eoq as f64),
            OptimizationField::Action => SortKey::Text(Cow::Borrowed(self.action_required.label())),
        }
    }

    // Supplied by the service; styled, never recomputed.
    fn tag(&self) -> ActionRequired {
        self.action_required
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationCells {
    pub brand: String,
    pub description: String,
    pub stock: String,
    pub rop: String,
    pub eoq: String,
    pub status: &'static str,
    pub alert: bool,
}

impl From<&ViewRow<OptimizationRow>> for OptimizationCells {
    fn from(view: &ViewRow<OptimizationRow>) -> Self {
        let row = &view.row;
        Self {
            brand: row.brand.to_string(),
            description: row.description.clone(),
            stock: format::grouped_count(row.current_on_hand),
            rop: format::grouped_count(row.rop),
            eoq: format::grouped_count(row.eoq),
            status: view.tag.label(),
            alert: view.tag.needs_reorder(),
        }
    }
}
