//! The registered bundle of a tool: name, description, schema, and the tool
//! together with its reducer.
//!
//! [`Descriptor::new`] erases the tool's request and response types, so the
//! registry can hold tools with different types side by side and dispatch on
//! untyped arguments.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{Result, ToolError};
use crate::tools::{Tool, ToolSpec};
use crate::{ToolDef, json_schema_for};

/// Type-erased decode → invoke → reduce pipeline.
type ErasedHandler = Box<dyn Fn(&str, Value) -> Result<String> + Send + Sync>;

pub struct Descriptor {
    name: String,
    description: String,
    parameters: Value,
    handler: ErasedHandler,
}

impl Descriptor {
    /// Bundle `tool` with its name, description, and `reducer`.
    ///
    /// The parameter schema is generated from the tool's request type.
    pub fn new<T, F>(
        name: impl Into<String>,
        description: impl Into<String>,
        tool: T,
        reducer: F,
    ) -> Self
    where
        T: Tool + 'static,
        F: Fn(&T::Response) -> String + Send + Sync + 'static,
    {
        let handler = move |tool_name: &str, args: Value| -> Result<String> {
            let request: T::Request = decode_request(tool_name, args)?;
            let response = tool.invoke(request);
            Ok(reducer(&response))
        };

        Self {
            name: name.into(),
            description: description.into(),
            parameters: json_schema_for::<T::Request>(),
            handler: Box::new(handler),
        }
    }

    /// Like [`new`](Self::new), taking the name and description from `spec`.
    pub fn from_spec<T, F>(spec: &ToolSpec, tool: T, reducer: F) -> Self
    where
        T: Tool + 'static,
        F: Fn(&T::Response) -> String + Send + Sync + 'static,
    {
        Self::new(spec.name.clone(), spec.to_description(), tool, reducer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// JSON Schema of the tool's request.
    pub fn parameters(&self) -> &Value {
        &self.parameters
    }

    /// The function-calling definition exported to the routing layer.
    pub fn definition(&self) -> ToolDef {
        ToolDef::new(
            self.name.clone(),
            self.description.clone(),
            self.parameters.clone(),
        )
    }

    /// Decode `args`, invoke the tool, and reduce its response.
    pub fn call(&self, args: Value) -> Result<String> {
        let result = (self.handler)(&self.name, args)?;
        trace!("[tool] {} reduced: {result}", self.name);
        Ok(result)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Decode raw model arguments into a request.
///
/// `null` reads as an empty mapping. Missing fields are left unspecified and
/// unrecognized keys are ignored; anything that is not a mapping is rejected.
pub fn decode_request<R: DeserializeOwned>(tool: &str, args: Value) -> Result<R> {
    let args = match args {
        Value::Null => Value::Object(Map::new()),
        Value::Object(_) => args,
        other => {
            return Err(ToolError::invalid_arguments(
                tool,
                format!("expected an object of named arguments, got {other}"),
            ));
        }
    };
    serde_json::from_value(args).map_err(|e| ToolError::invalid_arguments(tool, e))
}
