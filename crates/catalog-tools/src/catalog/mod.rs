//! Immutable reference data consulted by the tools.
//!
//! A [`Catalog`] is a fixed, order-preserving sequence of records built once
//! from a literal. Lookups are linear scans returning the first record whose
//! key matches; a missing key is `None`, never an error.

mod products;

pub use products::{ProductModels, ProductSales, YearlySales, product_models, product_sales};

/// A record that can be found in a [`Catalog`] by its identifying field.
pub trait CatalogRecord {
    /// The identifying key compared during lookup.
    fn key(&self) -> &str;
}

/// An ordered, read-only sequence of catalog records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<R> {
    records: Vec<R>,
}

impl<R: CatalogRecord> Catalog<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// First record whose key equals `key`, in insertion order.
    pub fn lookup(&self, key: &str) -> Option<&R> {
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: CatalogRecord> FromIterator<R> for Catalog<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, R> IntoIterator for &'a Catalog<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        id: &'static str,
        value: u32,
    }

    impl CatalogRecord for Entry {
        fn key(&self) -> &str {
            self.id
        }
    }

    #[test]
    fn lookup_returns_first_match() {
        let catalog: Catalog<Entry> = vec![
            Entry { id: "a", value: 1 },
            Entry { id: "b", value: 2 },
            Entry { id: "a", value: 3 },
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.lookup("a").map(|e| e.value), Some(1));
        assert_eq!(catalog.lookup("b").map(|e| e.value), Some(2));
    }

    #[test]
    fn lookup_missing_key_is_none() {
        let catalog = Catalog::new(vec![Entry { id: "a", value: 1 }]);
        assert!(catalog.lookup("z").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn preserves_order() {
        let catalog = Catalog::new(vec![
            Entry { id: "c", value: 0 },
            Entry { id: "a", value: 0 },
            Entry { id: "b", value: 0 },
        ]);
        let ids: Vec<&str> = catalog.iter().map(|e| e.id).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn empty_catalog() {
        let catalog: Catalog<Entry> = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.lookup("a").is_none());
    }
}
