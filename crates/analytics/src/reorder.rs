//! Reorder-alert table: columns, tagging, and cell text.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use vinolytics_core::{BrandId, DomainError};

use crate::format;
use crate::records::InventoryRow;
use crate::severity::{Severity, classify};
use crate::table::{SortKey, TableRow, ViewRow};

/// Sortable columns of the reorder table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderField {
    Brand,
    Description,
    AvgDailySales,
    #[default]
    CurrentOnHand,
    #[serde(rename = "rop")]
    ReorderPoint,
}

impl ReorderField {
    /// Clickable headers, left to right.
    pub const COLUMNS: [ReorderField; 4] = [
        ReorderField::Description,
        ReorderField::AvgDailySales,
        ReorderField::CurrentOnHand,
        ReorderField::ReorderPoint,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            ReorderField::Brand => "ID",
            ReorderField::Description => "Brand",
            ReorderField::AvgDailySales => "Daily Demand",
            ReorderField::CurrentOnHand => "Current Stock",
            ReorderField::ReorderPoint => "Reorder Point",
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            ReorderField::Brand => "brand",
            ReorderField::Description => "description",
            ReorderField::AvgDailySales => "avg_daily_sales",
            ReorderField::CurrentOnHand => "current_on_hand",
            ReorderField::ReorderPoint => "rop",
        }
    }
}

impl core::str::FromStr for ReorderField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "brand" => Ok(ReorderField::Brand),
            "description" => Ok(ReorderField::Description),
            "avg_daily_sales" => Ok(ReorderField::AvgDailySales),
            "current_on_hand" => Ok(ReorderField::CurrentOnHand),
            "rop" | "reorder_point" => Ok(ReorderField::ReorderPoint),
            other => Err(DomainError::unknown("sort field", other)),
        }
    }
}

pub(crate) fn brand_key(brand: &BrandId) -> SortKey<'_> {
    match brand {
        BrandId::Number(n) => SortKey::Number(*n as f64),
        BrandId::Text(s) => SortKey::Text(Cow::Borrowed(s)),
    }
}

impl TableRow for InventoryRow {
    type Field = ReorderField;
    type Tag = Severity;

    const EMPTY_MESSAGE: &'static str =
        "No reorders needed right now. Inventory is looking healthy!";

    fn search_text(&self) -> &str {
        &self.description
    }

    fn id_text(&self) -> String {
        self.brand.as_text()
    }

    fn sort_key(&self, field: ReorderField) -> SortKey<'_> {
        match field {
            ReorderField::Brand => brand_key(&self.brand),
            ReorderField::Description => SortKey::Text(Cow::Borrowed(&self.description)),
            ReorderField::AvgDailySales => SortKey::Number(self.avg_daily_sales),
            ReorderField::CurrentOnHand => SortKey::Number(self.current_on_hand),
            ReorderField::ReorderPoint => SortKey::Number(self.reorder_point),
        }
    }

    fn tag(&self) -> Severity {
        classify(self)
    }
}

/// Display text for one reorder-table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderCells {
    pub brand: String,
    pub id_line: String,
    pub demand: String,
    pub stock: String,
    pub reorder_point: String,
    pub badge: &'static str,
    pub urgent: bool,
}

impl From<&ViewRow<InventoryRow>> for ReorderCells {
    fn from(view: &ViewRow<InventoryRow>) -> Self {
        let row = &view.row;
        Self {
            brand: row.description.clone(),
            id_line: format!("ID: {}", row.brand),
            demand: format::demand_rate(row.avg_daily_sales),
            stock: format::whole_units(row.current_on_hand).to_string(),
            reorder_point: row.reorder_point.to_string(),
            badge: view.tag.label(),
            urgent: view.tag.is_urgent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{SearchQuery, SortDirection, SortSpec, TableState, compute_view};
    use proptest::prelude::*;

    fn row(id: i64, description: &str, on_hand: f64, rop: f64) -> InventoryRow {
        InventoryRow {
            brand: BrandId::Number(id),
            description: description.to_string(),
            avg_daily_sales: 1.5,
            current_on_hand: on_hand,
            reorder_point: rop,
        }
    }

    fn ids(view: &crate::table::TableView<InventoryRow>) -> Vec<i64> {
        view.rows.iter().filter_map(|r| r.row.brand.as_number()).collect()
    }

    #[test]
    fn identifier_substring_matches() {
        let rows = vec![row(101, "Cabernet Reserve", 2.0, 10.0), row(202, "Malbec", 8.0, 10.0)];
        let view = compute_view(&rows, &SearchQuery::from("101"), &SortSpec::default());
        assert_eq!(ids(&view), vec![101]);
    }

    #[test]
    fn description_match_ignores_case() {
        let rows = vec![row(101, "Cabernet Reserve", 2.0, 10.0), row(202, "Malbec", 8.0, 10.0)];
        let view = compute_view(&rows, &SearchQuery::from("malbec"), &SortSpec::default());
        assert_eq!(ids(&view), vec![202]);
    }

    #[test]
    fn equal_reorder_points_keep_order_descending() {
        let rows = vec![
            row(1, "A", 1.0, 20.0),
            row(2, "B", 2.0, 20.0),
            row(3, "C", 3.0, 20.0),
        ];
        let sort = SortSpec::ascending(ReorderField::ReorderPoint).with_direction(SortDirection::Descending);
        let view = compute_view(&rows, &SearchQuery::default(), &sort);
        assert_eq!(ids(&view), vec![1, 2, 3]);
    }

    #[test]
    fn default_sort_is_current_stock_ascending() {
        let rows = vec![row(1, "A", 9.0, 20.0), row(2, "B", 0.0, 20.0), row(3, "C", 4.0, 20.0)];
        let view = compute_view(&rows, &SearchQuery::default(), &SortSpec::default());
        assert_eq!(ids(&view), vec![2, 3, 1]);
        assert_eq!(view.rows[0].tag, Severity::Urgent);
    }

    #[test]
    fn missing_demand_sorts_last_and_keeps_the_rest_ordered() {
        let rows: Vec<InventoryRow> = (0..200)
            .map(|i| InventoryRow {
                avg_daily_sales: if i % 7 == 0 { f64::NAN } else { f64::from((i * 37) % 101) },
                ..row(i64::from(i), "Blend", 5.0, 20.0)
            })
            .collect();
        let sort = SortSpec::ascending(ReorderField::AvgDailySales);
        let view = compute_view(&rows, &SearchQuery::default(), &sort);

        let sales: Vec<f64> = view.rows.iter().map(|r| r.row.avg_daily_sales).collect();
        let finite = sales.iter().take_while(|v| !v.is_nan()).count();
        assert_eq!(finite, 200 - 29);
        assert!(sales[..finite].windows(2).all(|w| w[0] <= w[1]));
        assert!(sales[finite..].iter().all(|v| v.is_nan()));

        // NaN rows tie with each other, so they keep input order.
        let nan_ids: Vec<i64> = ids(&view)[finite..].to_vec();
        assert_eq!(nan_ids, (0..200).step_by(7).collect::<Vec<i64>>());
    }

    #[test]
    fn severity_does_not_affect_order() {
        // Descending by description puts the standard row first even though
        // the other row is urgent.
        let rows = vec![row(1, "Alpha", 0.0, 20.0), row(2, "Zeta", 15.0, 20.0)];
        let sort = SortSpec::ascending(ReorderField::Description).request(ReorderField::Description);
        let view = compute_view(&rows, &SearchQuery::default(), &sort);
        assert_eq!(ids(&view), vec![2, 1]);
        assert_eq!(view.rows[0].tag, Severity::Standard);
    }

    #[test]
    fn brand_sort_orders_numbers_before_text() {
        let mut rows = vec![row(30, "A", 1.0, 5.0), row(4, "B", 1.0, 5.0)];
        rows.push(InventoryRow {
            brand: BrandId::from("X-1"),
            ..row(0, "C", 1.0, 5.0)
        });
        let view = compute_view(&rows, &SearchQuery::default(), &SortSpec::ascending(ReorderField::Brand));
        let order: Vec<String> = view.rows.iter().map(|r| r.row.brand.to_string()).collect();
        assert_eq!(order, vec!["4", "30", "X-1"]);
    }

    #[test]
    fn empty_alerts_show_healthy_message() {
        let view = compute_view::<InventoryRow>(&[], &SearchQuery::default(), &SortSpec::default());
        assert_eq!(view.state(), TableState::Empty);
        assert_eq!(
            view.placeholder().as_deref(),
            Some("No reorders needed right now. Inventory is looking healthy!")
        );
    }

    #[test]
    fn cells_follow_display_policy() {
        let mut r = row(101, "Cabernet Reserve", 3.9, 35.0);
        r.avg_daily_sales = 2.0 / 3.0;
        let view = compute_view(&[r], &SearchQuery::default(), &SortSpec::default());
        let cells = ReorderCells::from(&view.rows[0]);
        assert_eq!(cells.id_line, "ID: 101");
        assert_eq!(cells.demand, "0.67 units/day");
        assert_eq!(cells.stock, "3");
        assert_eq!(cells.reorder_point, "35");
        assert_eq!(cells.badge, "URGENT REORDER");
        // The row itself keeps full precision.
        assert_eq!(view.rows[0].row.current_on_hand, 3.9);
    }

    #[test]
    fn field_names_round_trip_through_wire_names() {
        for field in [
            ReorderField::Brand,
            ReorderField::Description,
            ReorderField::AvgDailySales,
            ReorderField::CurrentOnHand,
            ReorderField::ReorderPoint,
        ] {
            assert_eq!(field.wire_name().parse::<ReorderField>().unwrap(), field);
        }
        assert!("colour".parse::<ReorderField>().is_err());
    }

    fn arb_field() -> impl Strategy<Value = ReorderField> {
        prop_oneof![
            Just(ReorderField::Brand),
            Just(ReorderField::Description),
            Just(ReorderField::AvgDailySales),
            Just(ReorderField::CurrentOnHand),
            Just(ReorderField::ReorderPoint),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: rows that tie on the sort key keep their input order,
        /// whichever direction is active.
        #[test]
        fn sort_is_stable(
            stocks in prop::collection::vec(0u8..4, 0..40),
            descending in any::<bool>(),
        ) {
            let rows: Vec<InventoryRow> = stocks
                .iter()
                .enumerate()
                .map(|(i, s)| row(i as i64, "Same", f64::from(*s), 8.0))
                .collect();
            let direction = if descending { SortDirection::Descending } else { SortDirection::Ascending };
            let sort = SortSpec::ascending(ReorderField::CurrentOnHand).with_direction(direction);
            let view = compute_view(&rows, &SearchQuery::default(), &sort);

            for pair in view.rows.windows(2) {
                let (a, b) = (&pair[0].row, &pair[1].row);
                if a.current_on_hand == b.current_on_hand {
                    prop_assert!(a.brand < b.brand);
                }
            }
            prop_assert_eq!(view.filtered_count, rows.len());
        }

        /// Property: clicking the active header twice restores the view.
        #[test]
        fn double_toggle_restores_view(
            stocks in prop::collection::vec(0u16..50, 0..30),
            field in arb_field(),
        ) {
            let rows: Vec<InventoryRow> = stocks
                .iter()
                .enumerate()
                .map(|(i, s)| row(i as i64 * 7, &format!("Wine {}", s % 5), f64::from(*s), 25.0))
                .collect();
            let start = SortSpec::ascending(field);
            let twice = start.request(field).request(field);
            prop_assert_eq!(twice, start);

            let query = SearchQuery::default();
            prop_assert_eq!(compute_view(&rows, &query, &start), compute_view(&rows, &query, &twice));
        }

        /// Property: every emitted row satisfies the query.
        #[test]
        fn filtered_rows_match_query(
            names in prop::collection::vec("[a-cA-C]{1,4}", 0..20),
            query in "[a-c]{0,2}",
        ) {
            let rows: Vec<InventoryRow> = names
                .iter()
                .enumerate()
                .map(|(i, n)| row(i as i64, n, 1.0, 4.0))
                .collect();
            let view = compute_view(&rows, &SearchQuery::new(query.clone()), &SortSpec::default());
            for r in &view.rows {
                prop_assert!(
                    r.row.description.to_lowercase().contains(&query)
                        || r.row.brand.to_string().contains(&query)
                );
            }
        }
    }
}
