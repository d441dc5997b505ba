//! `vinolytics-core` — shared building blocks for the analytics dashboard.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no rendering).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::BrandId;
pub use value_object::ValueObject;
