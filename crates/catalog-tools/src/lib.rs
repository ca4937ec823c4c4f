//! Product catalog tools for LLM function-calling agents.
//!
//! `catalog-tools` exposes a small, fixed set of named tools that a model
//! orchestrator can call with structured arguments: product sales volumes,
//! product model lists, and the current date-time. Each tool turns a typed
//! request into a typed response, and a per-tool reducer turns that response
//! into the text that is fed back into the conversation.
//!
//! # Getting started
//!
//! ```
//! use catalog_tools::CatalogToolsConfig;
//! use serde_json::json;
//!
//! let registry = CatalogToolsConfig::default().build_registry().unwrap();
//!
//! // Export definitions for the model API.
//! let defs = registry.definitions();
//! assert_eq!(defs.len(), 3);
//!
//! // Route a model tool call by name.
//! let text = registry
//!     .invoke("ProductDetailsInfo", &json!({"product": "PD-1405"}))
//!     .unwrap();
//! assert!(text.contains("1405-002"));
//! ```
//!
//! # Where to find things
//!
//! - **The data behind the tools:** [`catalog`] — immutable, ordered record
//!   sequences with first-match lookup.
//! - **The tools themselves:** [`Tool`](tools::Tool) and the three
//!   implementations in [`tools`], each with its request, response, and
//!   reducer.
//! - **Registration and dispatch:** [`RegistryBuilder`] at startup,
//!   [`ToolRegistry`] afterwards. A [`Descriptor`] bundles a tool with its
//!   name, description, schema, and reducer.
//! - **Wiring the standard set:** [`CatalogToolsConfig::build_registry`].
//!
//! # Concurrency
//!
//! A built [`ToolRegistry`] is immutable and `Send + Sync`. Share it behind an
//! `Arc` and call it from as many conversations as needed; no call blocks.

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod tools;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use config::{CatalogToolsConfig, UnfilteredPolicy};
pub use descriptor::Descriptor;
pub use error::{Result, ToolError};
pub use registry::{RegistryBuilder, ToolRegistry};

// Re-export schemars for downstream crates.
pub use schemars;

// ── Schema generation ──────────────────────────────────────────────

/// Generate a JSON Schema `serde_json::Value` from a type that implements
/// `schemars::JsonSchema`. This is the bridge between the typed request of a
/// tool and the `parameters` object of a function-calling definition.
///
/// # Example
///
/// ```
/// use catalog_tools::json_schema_for;
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct LookupArgs {
///     /// Product identifier.
///     #[serde(default)]
///     product: Option<String>,
/// }
///
/// let schema = json_schema_for::<LookupArgs>();
/// assert_eq!(schema["type"], "object");
/// assert!(schema["properties"]["product"].is_object());
/// ```
pub fn json_schema_for<T: JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema)
        .unwrap_or_else(|_| serde_json::json!({"type": "object", "properties": {}}))
}

// ── Tool types ─────────────────────────────────────────────────────

/// The type of a tool definition. Currently always `Function`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum ToolType {
    #[serde(rename = "function")]
    Function,
}

/// Tool definition handed to the model-routing layer (OpenAI
/// function-calling format).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ToolDef {
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub function: FunctionDef,
}

impl ToolDef {
    /// Create a function-calling tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            tool_type: ToolType::Function,
            function: FunctionDef {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}
