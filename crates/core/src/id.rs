//! Brand identifiers.
//!
//! The analytics service keys brands by an integer in most datasets, but some
//! endpoints hand the same identifier back as a string. `BrandId` accepts both
//! without coercing one into the other.

use core::cmp::Ordering;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a brand (integer or free-form string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrandId {
    Number(i64),
    Text(String),
}

impl BrandId {
    /// The string representation used for substring search.
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            BrandId::Number(n) => Some(*n),
            BrandId::Text(_) => None,
        }
    }
}

impl core::fmt::Display for BrandId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BrandId::Number(n) => core::fmt::Display::fmt(n, f),
            BrandId::Text(s) => f.write_str(s),
        }
    }
}

/// Numbers order numerically and before any text id; text ids order by codepoint.
impl Ord for BrandId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (BrandId::Number(a), BrandId::Number(b)) => a.cmp(b),
            (BrandId::Text(a), BrandId::Text(b)) => a.cmp(b),
            (BrandId::Number(_), BrandId::Text(_)) => Ordering::Less,
            (BrandId::Text(_), BrandId::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for BrandId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for BrandId {
    fn from(value: i64) -> Self {
        BrandId::Number(value)
    }
}

impl From<&str> for BrandId {
    fn from(value: &str) -> Self {
        BrandId::Text(value.to_string())
    }
}

impl FromStr for BrandId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("BrandId: empty"));
        }
        Ok(trimmed
            .parse::<i64>()
            .map(BrandId::Number)
            .unwrap_or_else(|_| BrandId::Text(trimmed.to_string())))
    }
}
