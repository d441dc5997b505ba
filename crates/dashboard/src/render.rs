//! Plain-text rendering for the terminal front end.

use std::fmt::Write as _;

use vinolytics_analytics::band::{BandChart, BandLayer, ForecastView, LayerKind};
use vinolytics_analytics::format;
use vinolytics_analytics::optimization::{OptimizationCells, OptimizationField};
use vinolytics_analytics::reorder::ReorderCells;
use vinolytics_analytics::summary::AbcSummaryView;
use vinolytics_analytics::{ReorderField, SortDirection};

use crate::state::ConnectionError;
use crate::view::DashboardView;

/// Rows in the forecast raster.
pub const BAND_HEIGHT: usize = 12;

const BAND_CELL: char = '░';
const MASK_CELL: char = ' ';
const LINE_CELL: char = '●';

pub fn render(view: &DashboardView) -> String {
    let mut out = String::new();
    out.push_str("Inventory Overview\n==================\n\n");
    render_abc(&mut out, view);
    render_risks(&mut out, view);
    render_reorder(&mut out, view);
    render_forecast(&mut out, &view.forecast);
    render_optimization(&mut out, view);
    out
}

pub fn render_failure(err: &ConnectionError) -> String {
    format!(
        "⚠ {}\n{}\n[Enter] {}   [q] Quit\n",
        ConnectionError::TITLE,
        err,
        ConnectionError::RETRY_LABEL
    )
}

fn render_abc(out: &mut String, view: &DashboardView) {
    out.push_str("ABC Revenue Distribution\n");
    match &view.abc {
        AbcSummaryView::Empty => {
            let _ = writeln!(out, "  {}", AbcSummaryView::EMPTY_MESSAGE);
        }
        AbcSummaryView::Cards(cards) => {
            for card in cards {
                let _ = writeln!(
                    out,
                    "  {:<8} {:>14}  {:<14} {}",
                    card.title(),
                    card.revenue_text(),
                    card.tagline(),
                    card.brands_text()
                );
            }
        }
    }
    if !view.revenue.is_empty() {
        out.push_str("  Revenue by class:");
        for bar in &view.revenue {
            let _ = write!(out, "  {} {}", bar.label, format::thousands_tick(bar.revenue));
        }
        out.push('\n');
    }
    out.push('\n');
}

fn render_risks(out: &mut String, view: &DashboardView) {
    if view.margins.is_empty() && view.capital.is_empty() && view.safety_stock.is_none() {
        return;
    }
    out.push_str("Financial Risks\n");
    if !view.margins.is_empty() {
        out.push_str("  Top Margin Bleeders\n");
        for bar in &view.margins {
            let marker = if bar.true_margin < 0.0 { "!" } else { " " };
            let _ = writeln!(
                out,
                "   {marker} {:<32} {}",
                bar.description,
                format::currency_cents(bar.true_margin)
            );
        }
    }
    if !view.capital.is_empty() {
        out.push_str("  Working Capital Traps\n");
        for point in &view.capital {
            let _ = writeln!(
                out,
                "    {:<32} {:>12}  {}",
                point.description,
                format::days(point.days_to_sell),
                format::currency(point.capital_tied_up)
            );
        }
    }
    if let Some(bars) = &view.safety_stock {
        out.push_str("  Safety Stock Shock Simulator\n");
        for bar in bars {
            let [_, _, capital] = bar.tooltip();
            let _ = writeln!(
                out,
                "    {:<32} {:>8} -> {:>8}  {}",
                bar.description,
                format::grouped(format::whole_units(bar.baseline)),
                format::grouped(format::whole_units(bar.shocked)),
                capital
            );
        }
    }
    out.push('\n');
}

fn sort_marker(view: &DashboardView, field: ReorderField) -> &'static str {
    if view.sort.field != field {
        return "";
    }
    match view.sort.direction {
        SortDirection::Ascending => " ▲",
        SortDirection::Descending => " ▼",
    }
}

fn render_reorder(out: &mut String, view: &DashboardView) {
    let _ = writeln!(out, "Critical Reorder Alerts ({})", view.action_items_badge());

    if let Some(message) = view.reorder.placeholder() {
        let _ = writeln!(out, "  {message}\n");
        return;
    }

    let _ = writeln!(out, "  {}", view.reorder.caption());
    let headers: Vec<String> = ReorderField::COLUMNS
        .iter()
        .map(|f| format!("{}{}", f.header(), sort_marker(view, *f)))
        .collect();
    let _ = writeln!(
        out,
        "  {:<32} {:>18} {:>15} {:>15}  Action",
        headers[0], headers[1], headers[2], headers[3]
    );
    for row in &view.reorder.rows {
        let cells = ReorderCells::from(row);
        let _ = writeln!(
            out,
            "  {:<32} {:>18} {:>15} {:>15}  {}",
            format!("{} ({})", cells.brand, cells.id_line),
            cells.demand,
            cells.stock,
            cells.reorder_point,
            cells.badge
        );
    }
    out.push('\n');
}

fn render_forecast(out: &mut String, forecast: &ForecastView) {
    out.push_str("Demand Forecast (Next 30 Days)\n");
    match forecast {
        ForecastView::Unavailable => {
            let _ = writeln!(
                out,
                "  {}: {}\n",
                ForecastView::UNAVAILABLE_TITLE,
                ForecastView::UNAVAILABLE_DETAIL
            );
        }
        ForecastView::Chart { brand_name, chart } => {
            let _ = writeln!(out, "  Predicted daily sales for top brand: {brand_name}");
            let y_max = chart.y_max();
            for (i, line) in rasterize(chart, BAND_HEIGHT).iter().enumerate() {
                let axis = if i == 0 { y_max.to_string() } else { String::new() };
                let _ = writeln!(out, "  {axis:>6} │{line}");
            }
            if let (Some(first), Some(last)) = (chart.points.first(), chart.points.last()) {
                let _ = writeln!(out, "         {} … {}", first.label, last.label);
            }
            out.push('\n');
        }
    }
}

fn render_optimization(out: &mut String, view: &DashboardView) {
    out.push_str("Inventory Optimization (EOQ & ROP)\n");
    if let Some(message) = view.optimization.placeholder() {
        let _ = writeln!(out, "  {message}");
        return;
    }
    let h: Vec<&str> = OptimizationField::COLUMNS.iter().map(|f| f.header()).collect();
    let _ = writeln!(
        out,
        "  {:<8} {:<28} {:>14} {:>20} {:>26}  {}",
        h[0], h[1], h[2], h[3], h[4], h[5]
    );
    for row in &view.optimization.rows {
        let cells = OptimizationCells::from(row);
        let _ = writeln!(
            out,
            "  {:<8} {:<28} {:>14} {:>20} {:>26}  {}",
            cells.brand, cells.description, cells.stock, cells.rop, cells.eoq, cells.status
        );
    }
}

/// Paint the band layers back to front onto a character grid.
///
/// One column per forecast point, `height` rows, top row first. The upper
/// fill covers every cell at or below its value. The mask paints background
/// strictly below the lower bound, so the band spans `[lower, upper]`
/// inclusive. The predicted line is drawn last.
pub fn rasterize(chart: &BandChart, height: usize) -> Vec<String> {
    let width = chart.points.len();
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let y_max = chart.y_max().max(1);
    let level = |value: u64| -> usize {
        let scaled = (value as f64 * (height - 1) as f64 / y_max as f64).round() as usize;
        scaled.min(height - 1)
    };

    // grid[level][column], level 0 = axis.
    let mut grid = vec![vec![MASK_CELL; width]; height];
    for layer in chart.layers() {
        paint(&mut grid, layer, &level);
    }

    grid.iter().rev().map(|row| row.iter().collect()).collect()
}

fn paint(grid: &mut [Vec<char>], layer: &BandLayer, level: &impl Fn(u64) -> usize) {
    for (col, value) in layer.values.iter().enumerate() {
        let top = level(*value);
        match layer.kind {
            LayerKind::UpperFill => (0..=top).for_each(|y| grid[y][col] = BAND_CELL),
            LayerKind::LowerMask => (0..top).for_each(|y| grid[y][col] = MASK_CELL),
            LayerKind::PredictedLine => grid[top][col] = LINE_CELL,
        }
    }
}
