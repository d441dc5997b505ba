//! Value object trait: equality by value, not identity.
//!
//! Every record the analytics service hands us is a value object: produced
//! fresh from each fetch, never mutated in place, compared by its fields.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. The view engines
/// never edit an input row; they build new view records around it instead.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct MarginRow {
///     description: String,
///     true_margin: f64,
/// }
///
/// impl ValueObject for MarginRow {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
