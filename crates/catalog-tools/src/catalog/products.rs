//! Built-in product data: yearly sales volumes and model lists.

use std::sync::LazyLock;

use super::{Catalog, CatalogRecord};

/// Units sold in a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlySales {
    pub year: i32,
    pub volume: u64,
}

/// A product together with its sales history, oldest year first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product: String,
    pub sales_by_year: Vec<YearlySales>,
}

impl ProductSales {
    fn new(product: &str, sales: &[(i32, u64)]) -> Self {
        Self {
            product: product.to_string(),
            sales_by_year: sales
                .iter()
                .map(|&(year, volume)| YearlySales { year, volume })
                .collect(),
        }
    }

    /// Volume sold in `year`, if the product has an entry for it.
    pub fn volume_in(&self, year: i32) -> Option<u64> {
        self.sales_by_year
            .iter()
            .find(|s| s.year == year)
            .map(|s| s.volume)
    }
}

impl CatalogRecord for ProductSales {
    fn key(&self) -> &str {
        &self.product
    }
}

/// A product together with its model identifiers, in catalog order.
///
/// Model lists are kept exactly as recorded, repeated entries included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductModels {
    pub product: String,
    pub models: Vec<String>,
}

impl ProductModels {
    fn new(product: &str, models: &[&str]) -> Self {
        Self {
            product: product.to_string(),
            models: models.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}

impl CatalogRecord for ProductModels {
    fn key(&self) -> &str {
        &self.product
    }
}

static PRODUCT_SALES: LazyLock<Catalog<ProductSales>> = LazyLock::new(|| {
    Catalog::new(vec![
        ProductSales::new("PD-1405", &[(2021, 1200), (2022, 1580), (2023, 2010)]),
        ProductSales::new("PD-1234", &[(2021, 860), (2022, 940), (2023, 1105)]),
        ProductSales::new("PD-1235", &[(2022, 310), (2023, 475)]),
        ProductSales::new("PD-1385", &[(2021, 2300), (2022, 2150), (2023, 1990)]),
        ProductSales::new("PD-1255", &[(2021, 150), (2022, 210)]),
        ProductSales::new("PD-1300", &[(2023, 620)]),
    ])
});

static PRODUCT_MODELS: LazyLock<Catalog<ProductModels>> = LazyLock::new(|| {
    Catalog::new(vec![
        ProductModels::new("PD-1405", &["1405-001", "1405-002", "1405-003"]),
        ProductModels::new("PD-1234", &["1234-1", "1234-2", "1234-3", "1234-4"]),
        ProductModels::new("PD-1235", &["1235-4", "1235-5"]),
        ProductModels::new("PD-1385", &["1385-1", "1385-2", "1385-3"]),
        ProductModels::new("PD-1255", &["1255-1"]),
        ProductModels::new("PD-1300", &["1300-1", "1300-1", "1300-1"]),
    ])
});

/// Sales volumes by product and year.
pub fn product_sales() -> &'static Catalog<ProductSales> {
    &PRODUCT_SALES
}

/// Model identifiers by product.
pub fn product_models() -> &'static Catalog<ProductModels> {
    &PRODUCT_MODELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_catalog_has_known_products() {
        let catalog = product_models();
        assert_eq!(catalog.len(), 6);
        let pd = catalog.lookup("PD-1405").unwrap();
        assert_eq!(pd.models, ["1405-001", "1405-002", "1405-003"]);
    }

    #[test]
    fn model_catalog_keeps_duplicate_models() {
        let pd = product_models().lookup("PD-1300").unwrap();
        assert_eq!(pd.models, ["1300-1", "1300-1", "1300-1"]);
    }

    #[test]
    fn sales_catalog_covers_same_products() {
        let sales: Vec<&str> = product_sales()
            .iter()
            .map(|p| p.product.as_str())
            .collect();
        let models: Vec<&str> = product_models()
            .iter()
            .map(|p| p.product.as_str())
            .collect();
        assert_eq!(sales, models);
    }

    #[test]
    fn volume_in_year() {
        let pd = product_sales().lookup("PD-1235").unwrap();
        assert_eq!(pd.volume_in(2023), Some(475));
        assert_eq!(pd.volume_in(2021), None);
    }

    #[test]
    fn sales_years_are_ascending() {
        for product in product_sales() {
            let years: Vec<i32> = product.sales_by_year.iter().map(|s| s.year).collect();
            let mut sorted = years.clone();
            sorted.sort_unstable();
            assert_eq!(years, sorted, "{} years out of order", product.product);
        }
    }
}
