//! Tool abstractions and the built-in catalog tools.
//!
//! Every capability offered to the model is a [`Tool`] implementor: a pure
//! function from a typed request to a typed response. A tool knows nothing
//! about its name, its description, or how its answer is rendered as text;
//! those are attached when it is wrapped in a
//! [`Descriptor`](crate::Descriptor) and registered.
//!
//! # Submodules
//!
//! - [`sales`] — `ProductSalesInfo`: sales volumes by product and year.
//! - [`models`] — `ProductDetailsInfo`: the model list of one product.
//! - [`clock`] — `CurrentDateTime`: the local date-time at call time.
//! - [`spec`] — [`ToolSpec`](spec::ToolSpec) builder for structured tool
//!   descriptions with `when_to_use` / `when_not_to_use` guidance.
//! - [`names`] — canonical tool name constants.
//! - [`args`] — lenient deserializers for model-supplied argument values.

pub mod args;
pub mod clock;
pub mod models;
pub mod names;
pub mod sales;
pub mod spec;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;

pub use clock::{Clock, CurrentTime, CurrentTimeArgs, CurrentTimeTool};
pub use models::{ModelListArgs, ModelListTool, ModelLookup, UnfilteredPolicy};
pub use sales::{SalesArgs, SalesReport, SalesTool};
pub use spec::ToolSpec;

/// A tool that an LLM agent can invoke via function-calling.
///
/// Implementors provide:
/// - A [`Request`](Tool::Request) type, decoded from the model's raw
///   arguments. Its `JsonSchema` becomes the `parameters` of the exported
///   definition, so every field should be optional and documented.
/// - A [`Response`](Tool::Response) type holding the computed answer.
/// - [`invoke`](Tool::invoke), which must not touch anything but immutable
///   data. Logging the request is fine.
///
/// # Example
///
/// ```
/// use catalog_tools::tools::Tool;
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct EchoArgs {
///     /// Text to echo back.
///     #[serde(default)]
///     text: Option<String>,
/// }
///
/// struct Echo;
///
/// impl Tool for Echo {
///     type Request = EchoArgs;
///     type Response = String;
///
///     fn invoke(&self, request: EchoArgs) -> String {
///         request.text.unwrap_or_default()
///     }
/// }
///
/// let out = Echo.invoke(EchoArgs { text: Some("hi".into()) });
/// assert_eq!(out, "hi");
/// ```
pub trait Tool: Send + Sync {
    /// Typed arguments, decoded leniently from the model's raw arguments.
    type Request: DeserializeOwned + JsonSchema;

    /// Typed result handed to the tool's reducer.
    type Response;

    /// Compute the response for `request`.
    fn invoke(&self, request: Self::Request) -> Self::Response;
}
