//! Error types for registration and dispatch.
//!
//! A catalog lookup that finds nothing is not an error; it is a normal
//! response value (see [`ModelLookup::NotFound`](crate::tools::models::ModelLookup)).
//! The variants here cover programmer errors and malformed model input only.

use thiserror::Error;

/// Errors surfaced by the registry and the dispatch path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// No tool is registered under this name.
    #[error("unknown tool '{name}'")]
    UnknownTool { name: String },

    /// A second registration tried to reuse an existing name.
    #[error("a tool named '{name}' is already registered")]
    DuplicateName { name: String },

    /// The raw arguments could not be decoded into the tool's request type.
    #[error("invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },
}

impl ToolError {
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool { name: name.into() }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn invalid_arguments(tool: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.to_string(),
        }
    }

    /// Render the error the way a tool result is shown to the model.
    ///
    /// The model reads this text and decides whether to retry with
    /// different arguments or a different tool.
    pub fn to_tool_result(&self) -> String {
        match self {
            ToolError::InvalidArguments { .. } => format!(
                "Error: {self}. Please provide arguments matching the tool's parameter schema."
            ),
            _ => format!("Error: {self}"),
        }
    }
}

/// Result type alias for registry and dispatch operations.
pub type Result<T> = std::result::Result<T, ToolError>;
