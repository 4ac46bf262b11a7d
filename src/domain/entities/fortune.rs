//! Fortune entity returned for every accepted photo.

use serde::{Deserialize, Serialize};

/// A canned fortune-telling result.
///
/// Fortunes are defined once at startup and never mutated; the same value
/// is serialized to every client that draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortune {
    pub overall: String,
    pub career: String,
    pub love: String,
    pub wealth: String,
    pub health: String,
}

impl Fortune {
    /// Creates a new Fortune instance.
    pub fn new(
        overall: impl Into<String>,
        career: impl Into<String>,
        love: impl Into<String>,
        wealth: impl Into<String>,
        health: impl Into<String>,
    ) -> Self {
        Self {
            overall: overall.into(),
            career: career.into(),
            love: love.into(),
            wealth: wealth.into(),
            health: health.into(),
        }
    }
}
