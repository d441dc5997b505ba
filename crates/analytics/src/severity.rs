//! Urgency tagging for reorder alerts.

use serde::{Deserialize, Serialize};

use crate::records::InventoryRow;

/// Stock below `reorder_point / URGENT_DIVISOR` is urgent.
pub const URGENT_DIVISOR: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Urgent,
    Standard,
}

impl Severity {
    /// Badge text shown in the reorder table.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Urgent => "URGENT REORDER",
            Severity::Standard => "REORDER NOW",
        }
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self, Severity::Urgent)
    }
}

/// Classify a reorder row.
///
/// Urgent when the shelf is empty or holds less than half the reorder point.
/// Total over every row; never fails.
pub fn classify(row: &InventoryRow) -> Severity {
    let on_hand = row.current_on_hand;
    if on_hand == 0.0 || on_hand < row.reorder_point / URGENT_DIVISOR {
        Severity::Urgent
    } else {
        Severity::Standard
    }
}
