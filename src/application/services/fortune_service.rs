//! Fortune drawing service.

use crate::domain::catalog::Catalog;
use crate::domain::entities::Fortune;

/// Service handing out random fortunes from a fixed catalog.
///
/// Holds no mutable state; each call draws independently with the
/// thread-local RNG, so concurrent requests never coordinate.
pub struct FortuneService {
    catalog: Catalog,
}

impl FortuneService {
    /// Creates a new fortune service.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Draws one fortune uniformly at random.
    ///
    /// Returns the catalog index (for logging) and a copy of the entry.
    pub fn draw(&self) -> (usize, Fortune) {
        let (index, fortune) = self.catalog.pick(&mut rand::rng());
        (index, fortune.clone())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for FortuneService {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}
