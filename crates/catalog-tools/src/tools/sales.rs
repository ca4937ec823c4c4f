//! `ProductSalesInfo` — sales volumes by product and year.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use super::spec::ToolSpec;
use super::{Tool, args, names};
use crate::catalog::{Catalog, ProductSales, YearlySales, product_sales};
use crate::descriptor::Descriptor;

/// Typed arguments for the `ProductSalesInfo` tool.
#[derive(Deserialize, JsonSchema, Debug, Clone, Default, PartialEq, Eq)]
#[schemars(description = "Filter for the sales report. Every field is optional.")]
pub struct SalesArgs {
    /// Year to report sales for, e.g. 2023. Omit to get every recorded year.
    #[serde(default, deserialize_with = "args::opt_year")]
    #[schemars(with = "Option<i32>")]
    pub year: Option<i32>,
}

/// Sales figures returned by [`SalesTool`].
///
/// With a year filter, each product carries only that year's entry and
/// products without one are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesReport {
    pub year: Option<i32>,
    pub products: Vec<ProductSales>,
}

/// Reports sales volumes from the product sales catalog.
#[derive(Debug, Clone, Copy)]
pub struct SalesTool {
    catalog: &'static Catalog<ProductSales>,
}

impl SalesTool {
    /// A tool backed by the built-in sales catalog.
    pub fn new() -> Self {
        Self::with_catalog(product_sales())
    }

    pub fn with_catalog(catalog: &'static Catalog<ProductSales>) -> Self {
        Self { catalog }
    }
}

impl Default for SalesTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for SalesTool {
    type Request = SalesArgs;
    type Response = SalesReport;

    fn invoke(&self, request: SalesArgs) -> SalesReport {
        debug!(year = ?request.year, "{} request", names::PRODUCT_SALES_INFO);

        let products = match request.year {
            None => self.catalog.records().to_vec(),
            Some(year) => self
                .catalog
                .iter()
                .filter_map(|p| {
                    p.volume_in(year).map(|volume| ProductSales {
                        product: p.product.clone(),
                        sales_by_year: vec![YearlySales { year, volume }],
                    })
                })
                .collect(),
        };

        SalesReport {
            year: request.year,
            products,
        }
    }
}

/// Render a [`SalesReport`] for the model.
///
/// `[ProductSales[product=PD-1405, sales=[2021: 1200, 2022: 1580]], ...]`
pub fn reduce(report: &SalesReport) -> String {
    if report.products.is_empty() {
        return match report.year {
            Some(year) => format!("No sales recorded for year {year}."),
            None => "No sales recorded.".to_string(),
        };
    }

    let entries: Vec<String> = report
        .products
        .iter()
        .map(|p| {
            let sales: Vec<String> = p
                .sales_by_year
                .iter()
                .map(|s| format!("{}: {}", s.year, s.volume))
                .collect();
            format!("ProductSales[product={}, sales=[{}]]", p.product, sales.join(", "))
        })
        .collect();
    format!("[{}]", entries.join(", "))
}

pub fn spec() -> ToolSpec {
    ToolSpec::builder(
        names::PRODUCT_SALES_INFO,
        "Get the products' sales volume by year",
    )
    .when_to_use(
        "When the user asks how many units of a product were sold, optionally in a given year",
    )
    .when_not_to_use("For the models of a product, use ProductDetailsInfo instead")
    .example(
        r#"ProductSalesInfo(year=2023)"#,
        "every product with its 2023 volume",
    )
    .output_format("[ProductSales[product=<id>, sales=[<year>: <units>, ...]], ...]")
    .build()
}

/// Wrap `tool` with its name, description, and reducer.
pub fn descriptor(tool: SalesTool) -> Descriptor {
    Descriptor::from_spec(&spec(), tool, reduce)
}
