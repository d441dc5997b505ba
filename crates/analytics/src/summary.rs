//! ABC revenue summary cards and the revenue-by-class chart.

use serde::Serialize;

use crate::format;
use crate::records::{AbcCategory, ClassSummary};

/// One summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassCard {
    pub category: AbcCategory,
    pub brand_count: u64,
    pub total_revenue: f64,
}

impl ClassCard {
    pub fn title(&self) -> String {
        self.category.to_string()
    }

    pub fn tagline(&self) -> &'static str {
        self.category.tagline()
    }

    pub fn revenue_text(&self) -> String {
        format::currency(self.total_revenue)
    }

    pub fn brands_text(&self) -> String {
        format!("Across {} Brands", self.brand_count)
    }
}

impl From<&ClassSummary> for ClassCard {
    fn from(summary: &ClassSummary) -> Self {
        Self {
            category: summary.category,
            brand_count: summary.brand_count,
            total_revenue: summary.total_revenue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AbcSummaryView {
    Empty,
    /// Always A, B, C in that order.
    Cards([ClassCard; 3]),
}

impl AbcSummaryView {
    pub const EMPTY_MESSAGE: &'static str = "No ABC data available.";
}

/// Summary for one tier; zero-valued when the dataset omits it.
pub fn card_for(rows: &[ClassSummary], category: AbcCategory) -> ClassCard {
    rows.iter()
        .find(|r| r.category == category)
        .map(ClassCard::from)
        .unwrap_or_else(|| ClassCard::from(&ClassSummary::zero(category)))
}

pub fn summarize(rows: &[ClassSummary]) -> AbcSummaryView {
    if rows.is_empty() {
        return AbcSummaryView::Empty;
    }
    AbcSummaryView::Cards(AbcCategory::ALL.map(|c| card_for(rows, c)))
}

/// One bar of the revenue-by-class chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueBar {
    pub label: String,
    pub revenue: f64,
    pub brand_count: u64,
    pub color: &'static str,
}

/// Bars in the order the service supplied them.
pub fn revenue_bars(rows: &[ClassSummary]) -> Vec<RevenueBar> {
    rows.iter()
        .map(|r| RevenueBar {
            label: r.category.to_string(),
            revenue: r.total_revenue,
            brand_count: r.brand_count,
            color: r.category.color(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(category: AbcCategory, brand_count: u64, total_revenue: f64) -> ClassSummary {
        ClassSummary {
            category,
            brand_count,
            total_revenue,
        }
    }

    #[test]
    fn missing_categories_default_to_zero() {
        let rows = vec![summary(AbcCategory::A, 40, 812_000.0)];
        let AbcSummaryView::Cards(cards) = summarize(&rows) else {
            panic!("expected cards");
        };

        assert_eq!(cards[0].brand_count, 40);
        for card in &cards[1..] {
            assert_eq!(card.brand_count, 0);
            assert_eq!(card.total_revenue, 0.0);
        }
        assert_eq!(cards[1].category, AbcCategory::B);
        assert_eq!(cards[2].category, AbcCategory::C);
    }

    #[test]
    fn cards_are_in_abc_order_regardless_of_input_order() {
        let rows = vec![
            summary(AbcCategory::C, 300, 9_000.0),
            summary(AbcCategory::A, 12, 500_000.0),
        ];
        let AbcSummaryView::Cards(cards) = summarize(&rows) else {
            panic!("expected cards");
        };
        let order: Vec<AbcCategory> = cards.iter().map(|c| c.category).collect();
        assert_eq!(order, AbcCategory::ALL.to_vec());
        assert_eq!(cards[2].brand_count, 300);
    }

    #[test]
    fn empty_dataset_is_its_own_state() {
        assert_eq!(summarize(&[]), AbcSummaryView::Empty);
    }

    #[test]
    fn card_text() {
        let card = card_for(&[summary(AbcCategory::B, 7, 15_499.6)], AbcCategory::B);
        assert_eq!(card.title(), "Class B");
        assert_eq!(card.tagline(), "Next 15% Rev");
        assert_eq!(card.revenue_text(), "$15,500");
        assert_eq!(card.brands_text(), "Across 7 Brands");
    }

    #[test]
    fn revenue_bars_follow_supplied_order_and_colours() {
        let rows = vec![
            summary(AbcCategory::B, 1, 2.0),
            summary(AbcCategory::A, 1, 3.0),
        ];
        let bars = revenue_bars(&rows);
        assert_eq!(bars[0].label, "Class B");
        assert_eq!(bars[0].color, "#fbbf24");
        assert_eq!(bars[1].color, "#10b981");
    }
}
