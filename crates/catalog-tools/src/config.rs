//! Catalog tool configuration with sensible defaults.
//!
//! [`CatalogToolsConfig`] captures the few knobs the standard tool set has and
//! turns them into a frozen [`ToolRegistry`] via
//! [`build_registry`](CatalogToolsConfig::build_registry).

use chrono::Local;

use crate::error::Result;
use crate::registry::{RegistryBuilder, ToolRegistry};
use crate::tools::{Clock, CurrentTimeTool, ModelListTool, SalesTool, clock, models, sales};

pub use crate::tools::models::UnfilteredPolicy;

/// Configuration for the standard catalog tool set.
#[derive(Debug, Clone, Copy)]
pub struct CatalogToolsConfig {
    /// What `ProductDetailsInfo` answers when no product is given.
    /// Default: [`UnfilteredPolicy::ListAll`].
    pub unfiltered_policy: UnfilteredPolicy,
    /// Time source for `CurrentDateTime`. Default: `Local::now`.
    pub clock: Clock,
}

impl Default for CatalogToolsConfig {
    fn default() -> Self {
        Self {
            unfiltered_policy: UnfilteredPolicy::default(),
            clock: Local::now,
        }
    }
}

impl CatalogToolsConfig {
    pub fn with_unfiltered_policy(mut self, policy: UnfilteredPolicy) -> Self {
        self.unfiltered_policy = policy;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Register `ProductSalesInfo`, `ProductDetailsInfo`, and
    /// `CurrentDateTime`, in that order, and freeze the registry.
    pub fn build_registry(&self) -> Result<ToolRegistry> {
        Ok(self.register_into(RegistryBuilder::new())?.build())
    }

    /// Register the standard tools on an existing builder, e.g. one that
    /// already carries application-specific tools.
    pub fn register_into(&self, builder: RegistryBuilder) -> Result<RegistryBuilder> {
        builder
            .with(sales::descriptor(SalesTool::new()))?
            .with(models::descriptor(ModelListTool::new(self.unfiltered_policy)))?
            .with(clock::descriptor(CurrentTimeTool::with_clock(self.clock)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolError;
    use crate::tools::names;

    #[test]
    fn defaults() {
        let config = CatalogToolsConfig::default();
        assert_eq!(config.unfiltered_policy, UnfilteredPolicy::ListAll);
        // The default clock reads the system time.
        let drift = (chrono::Local::now() - (config.clock)()).num_seconds().abs();
        assert!(drift < 5, "default clock is {drift}s off");
    }

    #[test]
    fn build_registry_registers_standard_tools() {
        let registry = CatalogToolsConfig::default().build_registry().unwrap();
        assert_eq!(
            registry.names(),
            [
                names::PRODUCT_SALES_INFO,
                names::PRODUCT_DETAILS_INFO,
                names::CURRENT_DATE_TIME
            ]
        );
    }

    #[test]
    fn policy_reaches_model_tool() {
        let registry = CatalogToolsConfig::default()
            .with_unfiltered_policy(UnfilteredPolicy::RequireProduct)
            .build_registry()
            .unwrap();
        let text = registry
            .invoke(names::PRODUCT_DETAILS_INFO, &serde_json::json!({}))
            .unwrap();
        assert!(text.starts_with("No product specified"));
    }

    #[test]
    fn register_into_rejects_a_second_copy() {
        let config = CatalogToolsConfig::default();
        let builder = config.register_into(RegistryBuilder::new()).unwrap();
        let err = config.register_into(builder).unwrap_err();
        assert_eq!(err, ToolError::duplicate_name(names::PRODUCT_SALES_INFO));
    }
}
