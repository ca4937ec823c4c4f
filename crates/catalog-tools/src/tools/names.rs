//! Canonical tool name constants.
//!
//! All tool-name string literals should reference these constants to avoid
//! scattered magic strings. The calling model selects tools by these names,
//! so renaming one is a breaking change for any stored prompt.

pub const PRODUCT_SALES_INFO: &str = "ProductSalesInfo";
pub const PRODUCT_DETAILS_INFO: &str = "ProductDetailsInfo";
pub const CURRENT_DATE_TIME: &str = "CurrentDateTime";
