//! Fixed catalog of fortunes the service draws from.

use rand::Rng;
use thiserror::Error;

use crate::domain::entities::Fortune;

/// Errors raised when building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("fortune catalog must contain at least one entry")]
    Empty,
}

/// Ordered, non-empty list of fortunes.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Fortune>,
}

impl Catalog {
    /// Creates a catalog from the given entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if `entries` is empty.
    pub fn new(entries: Vec<Fortune>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// Picks one entry uniformly at random.
    ///
    /// Returns the chosen index alongside the entry.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, &Fortune) {
        let index = rng.random_range(0..self.entries.len());
        (index, &self.entries[index])
    }

    /// Returns true if `fortune` equals one of the entries field for field.
    pub fn contains(&self, fortune: &Fortune) -> bool {
        self.entries.iter().any(|entry| entry == fortune)
    }

    pub fn entries(&self) -> &[Fortune] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with [`Catalog::len`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    /// The April Fools' catalog served in production.
    fn default() -> Self {
        Self {
            entries: vec![
                Fortune::new(
                    "面相显示你是隐藏的动漫主角",
                    "建议去漫画公司应聘，可能会被选为下一部动漫主角",
                    "桃花运旺盛，但要小心是不是在演动漫剧情",
                    "财运：动漫周边代言费将会让你发财",
                    "建议多看动漫补充能量",
                ),
                Fortune::new(
                    "面相显示你前世是一只网红猫",
                    "建议开个猫咖，老本行了",
                    "桃花运：你的真命天子/天女就在猫咖等你",
                    "财运：投资猫咪周边，稳赚不赔",
                    "建议每天学猫咪晒太阳",
                ),
                Fortune::new(
                    "面相显示你是外星人派来的卧底",
                    "建议去NASA应聘，他们正在找你",
                    "桃花运：你的另一半可能在太空站",
                    "财运：外星科技专利费即将到账",
                    "建议多补充外星能量",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_default_catalog_has_three_entries() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_pick_returns_member() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let (index, fortune) = catalog.pick(&mut rng);
            assert!(index < catalog.len());
            assert_eq!(&catalog.entries()[index], fortune);
            assert!(catalog.contains(fortune));
        }
    }

    #[test]
    fn test_pick_reaches_every_entry() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<usize> = (0..300).map(|_| catalog.pick(&mut rng).0).collect();

        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn test_single_entry_catalog() {
        let only = Fortune::new("o", "c", "l", "w", "h");
        let catalog = Catalog::new(vec![only.clone()]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(catalog.pick(&mut rng), (0, &only));
    }

    #[test]
    fn test_contains_rejects_foreign_fortune() {
        let catalog = Catalog::default();
        let mut altered = catalog.entries()[0].clone();
        altered.health = "多喝热水".to_string();

        assert!(!catalog.contains(&altered));
    }
}
