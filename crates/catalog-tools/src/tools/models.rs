//! `ProductDetailsInfo` — the model list of a product.
//!
//! A match is always returned together with its product id; a bare list of
//! model ids is easy for the model to attribute to the wrong product.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use super::spec::ToolSpec;
use super::{Tool, args, names};
use crate::catalog::{Catalog, ProductModels, product_models};
use crate::descriptor::Descriptor;

/// Typed arguments for the `ProductDetailsInfo` tool.
#[derive(Deserialize, JsonSchema, Debug, Clone, Default, PartialEq, Eq)]
#[schemars(description = "Which product to list models for. Every field is optional.")]
pub struct ModelListArgs {
    /// Product identifier, e.g. "PD-1405".
    #[serde(default, deserialize_with = "args::opt_string")]
    #[schemars(with = "Option<String>")]
    pub product: Option<String>,
}

/// What to answer when no product is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnfilteredPolicy {
    /// Return every product with its models, in catalog order.
    #[default]
    ListAll,
    /// Return [`ModelLookup::ProductRequired`] so the model asks for one.
    RequireProduct,
}

/// Result of a model-list lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelLookup {
    /// The requested product and its full model list.
    Found(ProductModels),
    /// No product matches the requested id.
    NotFound { product: String },
    /// No product was given; every record, in catalog order.
    Unfiltered(Vec<ProductModels>),
    /// No product was given and the tool is configured to require one.
    ProductRequired,
}

/// Looks up model ids in the product model catalog.
#[derive(Debug, Clone, Copy)]
pub struct ModelListTool {
    catalog: &'static Catalog<ProductModels>,
    policy: UnfilteredPolicy,
}

impl ModelListTool {
    /// A tool backed by the built-in model catalog.
    pub fn new(policy: UnfilteredPolicy) -> Self {
        Self::with_catalog(product_models(), policy)
    }

    pub fn with_catalog(
        catalog: &'static Catalog<ProductModels>,
        policy: UnfilteredPolicy,
    ) -> Self {
        Self { catalog, policy }
    }

    pub fn policy(&self) -> UnfilteredPolicy {
        self.policy
    }
}

impl Default for ModelListTool {
    fn default() -> Self {
        Self::new(UnfilteredPolicy::default())
    }
}

impl Tool for ModelListTool {
    type Request = ModelListArgs;
    type Response = ModelLookup;

    fn invoke(&self, request: ModelListArgs) -> ModelLookup {
        debug!(product = ?request.product, "{} request", names::PRODUCT_DETAILS_INFO);

        let product = request
            .product
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        match product {
            Some(id) => match self.catalog.lookup(id) {
                Some(record) => ModelLookup::Found(record.clone()),
                None => ModelLookup::NotFound {
                    product: id.to_string(),
                },
            },
            None => match self.policy {
                UnfilteredPolicy::ListAll => {
                    ModelLookup::Unfiltered(self.catalog.records().to_vec())
                }
                UnfilteredPolicy::RequireProduct => ModelLookup::ProductRequired,
            },
        }
    }
}

fn format_record(record: &ProductModels) -> String {
    format!(
        "ProductModels[product={}, models=[{}]]",
        record.product,
        record.models.join(", ")
    )
}

/// Render a [`ModelLookup`] for the model.
pub fn reduce(lookup: &ModelLookup) -> String {
    match lookup {
        ModelLookup::Found(record) => format_record(record),
        ModelLookup::NotFound { product } => {
            format!("Not found: no product matches '{product}'.")
        }
        ModelLookup::Unfiltered(records) if records.is_empty() => {
            "Not found: the product catalog is empty.".to_string()
        }
        ModelLookup::Unfiltered(records) => {
            let entries: Vec<String> = records.iter().map(format_record).collect();
            format!("[{}]", entries.join(", "))
        }
        ModelLookup::ProductRequired => {
            "No product specified. Call again with the 'product' argument set to a product id."
                .to_string()
        }
    }
}

pub fn spec(policy: UnfilteredPolicy) -> ToolSpec {
    let without_product = match policy {
        UnfilteredPolicy::ListAll => "Without a product, every product with its models",
        UnfilteredPolicy::RequireProduct => "Without a product, a request to name one",
    };
    ToolSpec::builder(
        names::PRODUCT_DETAILS_INFO,
        "Get the product's model list",
    )
    .when_to_use("When the user asks which models (model numbers) a product has")
    .when_not_to_use("For sales figures, use ProductSalesInfo instead")
    .example(
        r#"ProductDetailsInfo(product="PD-1405")"#,
        "ProductModels[product=PD-1405, models=[1405-001, 1405-002, 1405-003]]",
    )
    .example("ProductDetailsInfo()", without_product)
    .output_format("ProductModels[product=<id>, models=[<model>, ...]], or a 'Not found' sentence")
    .build()
}

/// Wrap `tool` with its name, description, and reducer.
pub fn descriptor(tool: ModelListTool) -> Descriptor {
    Descriptor::from_spec(&spec(tool.policy()), tool, reduce)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(product: Option<&str>) -> ModelLookup {
        ModelListTool::default().invoke(ModelListArgs {
            product: product.map(String::from),
        })
    }

    #[test]
    fn known_product_returns_record_with_models() {
        let result = lookup(Some("PD-1405"));
        let ModelLookup::Found(record) = &result else {
            panic!("expected a match, got {result:?}");
        };
        assert_eq!(record.product, "PD-1405");
        assert_eq!(record.models, ["1405-001", "1405-002", "1405-003"]);
        assert_eq!(
            reduce(&result),
            "ProductModels[product=PD-1405, models=[1405-001, 1405-002, 1405-003]]"
        );
    }

    #[test]
    fn unknown_product_is_not_found() {
        let result = lookup(Some("PD-9999"));
        assert_eq!(
            result,
            ModelLookup::NotFound {
                product: "PD-9999".into()
            }
        );
        let text = reduce(&result);
        assert!(!text.is_empty());
        assert!(text.starts_with("Not found"));
        assert!(text.contains("PD-9999"));
    }

    #[test]
    fn product_is_trimmed() {
        assert!(matches!(
            lookup(Some("  PD-1255 ")),
            ModelLookup::Found(r) if r.product == "PD-1255"
        ));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(matches!(lookup(Some("pd-1405")), ModelLookup::NotFound { .. }));
    }

    #[test]
    fn duplicate_models_are_kept() {
        let text = reduce(&lookup(Some("PD-1300")));
        assert_eq!(text, "ProductModels[product=PD-1300, models=[1300-1, 1300-1, 1300-1]]");
    }

    #[test]
    fn no_product_lists_all_by_default() {
        let result = lookup(None);
        let ModelLookup::Unfiltered(records) = &result else {
            panic!("expected all records, got {result:?}");
        };
        assert_eq!(records.len(), 6);
        let text = reduce(&result);
        assert!(text.starts_with("[ProductModels[product=PD-1405"));
        assert!(text.ends_with("ProductModels[product=PD-1300, models=[1300-1, 1300-1, 1300-1]]]"));
    }

    #[test]
    fn blank_product_counts_as_unspecified() {
        assert!(matches!(lookup(Some("   ")), ModelLookup::Unfiltered(_)));
    }

    #[test]
    fn require_product_policy() {
        let tool = ModelListTool::new(UnfilteredPolicy::RequireProduct);
        let result = tool.invoke(ModelListArgs::default());
        assert_eq!(result, ModelLookup::ProductRequired);
        assert!(reduce(&result).contains("'product'"));
    }

    #[test]
    fn empty_catalog_unfiltered_is_not_blank() {
        let catalog: &'static Catalog<ProductModels> =
            Box::leak(Box::new(Catalog::new(Vec::new())));
        let tool = ModelListTool::with_catalog(catalog, UnfilteredPolicy::ListAll);
        let text = reduce(&tool.invoke(ModelListArgs::default()));
        assert!(text.starts_with("Not found"));
    }

    #[test]
    fn description_tracks_policy() {
        let all = spec(UnfilteredPolicy::ListAll).to_description();
        let req = spec(UnfilteredPolicy::RequireProduct).to_description();
        assert!(all.contains("every product"));
        assert!(req.contains("request to name one"));
    }
}
