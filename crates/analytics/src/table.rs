//! Sortable, searchable table views.
//!
//! `compute_view` is a pure function of `(rows, query, sort)`: the caller owns
//! the UI state and hands it in on every keystroke or header click. Each call
//! rebuilds the whole view from the full input.

use core::cmp::Ordering;
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use vinolytics_core::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl core::str::FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(DomainError::unknown("sort direction", other)),
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortSpec<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Header-click transition.
    ///
    /// Same field flips the direction; a different field becomes active and
    /// starts ascending.
    pub fn request(self, field: F) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            Self::ascending(field)
        }
    }
}

impl<F: Default + Copy + PartialEq> Default for SortSpec<F> {
    fn default() -> Self {
        Self::ascending(F::default())
    }
}

/// Free-text search box contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Replace the query (one call per keystroke).
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            raw: &self.0,
            folded: self.0.to_lowercase(),
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

struct Matcher<'a> {
    raw: &'a str,
    folded: String,
}

impl Matcher<'_> {
    /// Case-insensitive on the description, exact substring on the identifier.
    fn matches<R: TableRow>(&self, row: &R) -> bool {
        if self.raw.is_empty() {
            return true;
        }
        row.search_text().to_lowercase().contains(&self.folded)
            || row.id_text().contains(self.raw)
    }
}

/// Value a row exposes for one sortable column.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Number(f64),
    Text(Cow<'a, str>),
}

impl SortKey<'_> {
    /// Ascending three-way comparison.
    ///
    /// Numbers compare numerically with NaN after every other number, text
    /// by codepoint, and numbers sort ahead of text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => compare_numbers(*a, *b),
            (SortKey::Text(a), SortKey::Text(b)) => a.as_ref().cmp(b.as_ref()),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Both are ordered; -0.0 and 0.0 stay equal.
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// A record type that can be shown in a table view.
pub trait TableRow: Clone + PartialEq + core::fmt::Debug {
    /// Closed set of sortable columns.
    type Field: Copy + PartialEq + core::fmt::Debug;
    /// Presentation-only tag attached after filtering.
    type Tag: Clone + PartialEq + core::fmt::Debug;

    /// Placeholder shown when the dataset itself is empty.
    const EMPTY_MESSAGE: &'static str;

    /// Text matched case-insensitively by the search box.
    fn search_text(&self) -> &str;

    /// Identifier text matched as an exact substring.
    fn id_text(&self) -> String;

    fn sort_key(&self, field: Self::Field) -> SortKey<'_>;

    fn tag(&self) -> Self::Tag;
}

/// A row plus its derived tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow<R: TableRow> {
    pub row: R,
    pub tag: R::Tag,
}

/// Which placeholder (if any) the table should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState<'a> {
    /// The dataset has no rows at all.
    Empty,
    /// Rows exist but none match the query.
    NoMatches { query: &'a str },
    Populated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView<R: TableRow> {
    pub rows: Vec<ViewRow<R>>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub query: String,
}

impl<R: TableRow> TableView<R> {
    pub fn state(&self) -> TableState<'_> {
        if self.total_count == 0 {
            TableState::Empty
        } else if self.filtered_count == 0 {
            TableState::NoMatches { query: &self.query }
        } else {
            TableState::Populated
        }
    }

    /// Placeholder text, or `None` when there are rows to show.
    pub fn placeholder(&self) -> Option<String> {
        match self.state() {
            TableState::Empty => Some(R::EMPTY_MESSAGE.to_string()),
            TableState::NoMatches { query } => {
                Some(format!("No items match your search \"{query}\"."))
            }
            TableState::Populated => None,
        }
    }

    pub fn caption(&self) -> String {
        format!("Showing {} item(s)", self.filtered_count)
    }
}

/// Filter, stable-sort, and tag `rows`.
pub fn compute_view<R: TableRow>(
    rows: &[R],
    query: &SearchQuery,
    sort: &SortSpec<R::Field>,
) -> TableView<R> {
    build_view(rows, query, Some(sort))
}

/// Filter and tag `rows`, keeping the supplied order.
pub fn filter_view<R: TableRow>(rows: &[R], query: &SearchQuery) -> TableView<R> {
    build_view(rows, query, None)
}

fn build_view<R: TableRow>(
    rows: &[R],
    query: &SearchQuery,
    sort: Option<&SortSpec<R::Field>>,
) -> TableView<R> {
    let matcher = query.matcher();
    let mut filtered: Vec<&R> = rows.iter().filter(|row| matcher.matches(*row)).collect();

    if let Some(spec) = sort {
        // `sort_by` is stable: equal keys keep their filtered order.
        filtered.sort_by(|a, b| {
            spec.direction
                .apply(a.sort_key(spec.field).compare(&b.sort_key(spec.field)))
        });
    }

    let rows_out: Vec<ViewRow<R>> = filtered
        .into_iter()
        .map(|row| ViewRow {
            tag: row.tag(),
            row: row.clone(),
        })
        .collect();

    TableView {
        filtered_count: rows_out.len(),
        total_count: rows.len(),
        rows: rows_out,
        query: query.as_str().to_string(),
    }
}
