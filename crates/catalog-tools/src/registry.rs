//! Tool registration and dispatch by name.
//!
//! Registration happens once, at startup, on a [`RegistryBuilder`]. Names must
//! be unique; a second registration under an existing name is rejected and
//! the first one stays. [`RegistryBuilder::build`] freezes the set into a
//! [`ToolRegistry`], which has no way to add, replace, or remove a tool and is
//! safe to share across threads.

use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, trace, warn};

use crate::ToolDef;
use crate::descriptor::Descriptor;
use crate::error::{Result, ToolError};

// ── RegistryBuilder ────────────────────────────────────────────────

/// Append-only tool collection used during startup.
///
/// # Example
///
/// ```
/// use catalog_tools::RegistryBuilder;
/// use catalog_tools::tools::{SalesTool, CurrentTimeTool, sales, clock};
///
/// let registry = RegistryBuilder::new()
///     .with(sales::descriptor(SalesTool::new()))?
///     .with(clock::descriptor(CurrentTimeTool::new()))?
///     .build();
///
/// assert_eq!(registry.names(), ["ProductSalesInfo", "CurrentDateTime"]);
/// # Ok::<(), catalog_tools::ToolError>(())
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    descriptors: Vec<Descriptor>,
    index: HashMap<String, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Fails if its name is already taken; the existing
    /// registration is left untouched.
    pub fn register(&mut self, descriptor: Descriptor) -> Result<()> {
        let name = descriptor.name().to_string();
        if self.index.contains_key(&name) {
            warn!("[registry] rejected duplicate tool name '{name}'");
            return Err(ToolError::duplicate_name(name));
        }
        debug!("[registry] registered {name}");
        self.index.insert(name, self.descriptors.len());
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Register a tool (builder pattern).
    pub fn with(mut self, descriptor: Descriptor) -> Result<Self> {
        self.register(descriptor)?;
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Freeze the registry. No tool can be added after this.
    pub fn build(self) -> ToolRegistry {
        info!(
            "[registry] {} tools ready: {}",
            self.descriptors.len(),
            self.descriptors
                .iter()
                .map(|d| d.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        ToolRegistry {
            descriptors: self.descriptors,
            index: self.index,
        }
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field(
                "tools",
                &self.descriptors.iter().map(|d| d.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

// ── ToolRegistry ───────────────────────────────────────────────────

/// A frozen set of tools that can be dispatched by name.
///
/// This is the surface the orchestrator talks to: export
/// [`definitions`](Self::definitions) to the model API, then route each tool
/// call through [`invoke`](Self::invoke), [`invoke_json`](Self::invoke_json),
/// or [`execute`](Self::execute).
pub struct ToolRegistry {
    descriptors: Vec<Descriptor>,
    index: HashMap<String, usize>,
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

impl ToolRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up a tool by name.
    pub fn resolve(&self, name: &str) -> Result<&Descriptor> {
        self.index
            .get(name)
            .map(|&i| &self.descriptors[i])
            .ok_or_else(|| ToolError::unknown_tool(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Tool definitions for the model API, in registration order.
    pub fn definitions(&self) -> Vec<ToolDef> {
        self.descriptors.iter().map(Descriptor::definition).collect()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.descriptors.iter().map(Descriptor::name).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.descriptors.iter()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Route a tool call: resolve `name`, decode `args` into the tool's
    /// request, invoke the tool, and reduce its response to text.
    ///
    /// `UnknownTool` is returned as-is; retrying the same name cannot
    /// succeed.
    pub fn invoke(&self, name: &str, args: &Value) -> Result<String> {
        let descriptor = self.resolve_call(name)?;
        Self::run(descriptor, args)
    }

    /// Like [`invoke`](Self::invoke), taking the raw JSON argument text the
    /// model protocol delivers. Blank text reads as `{}`.
    ///
    /// The name is resolved before the text is parsed, so an unknown name
    /// wins over bad JSON.
    pub fn invoke_json(&self, name: &str, arguments: &str) -> Result<String> {
        let descriptor = self.resolve_call(name)?;
        let args = if arguments.trim().is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(arguments).map_err(|e| ToolError::invalid_arguments(name, e))?
        };
        Self::run(descriptor, &args)
    }

    /// [`resolve`](Self::resolve) for a call, logging unknown names.
    fn resolve_call(&self, name: &str) -> Result<&Descriptor> {
        self.resolve(name).inspect_err(|_| {
            warn!("[tool] call to unknown tool '{name}'");
        })
    }

    fn run(descriptor: &Descriptor, args: &Value) -> Result<String> {
        let name = descriptor.name();
        log_tool_call(name, &args.to_string());
        let start = Instant::now();
        let result = descriptor.call(args.clone())?;
        debug!(
            "Tool {name} completed in {:.2}ms ({} bytes)",
            start.elapsed().as_secs_f64() * 1000.0,
            result.len()
        );
        Ok(result)
    }

    /// Execute a tool call and always return text for the model.
    ///
    /// Errors come back as `"Error: ..."` strings so the model can see what
    /// went wrong and self-correct.
    pub fn execute(&self, name: &str, arguments: &str) -> String {
        self.invoke_json(name, arguments)
            .unwrap_or_else(|e| e.to_tool_result())
    }
}

impl<'a> IntoIterator for &'a ToolRegistry {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

/// Log a tool call at INFO level with a truncated preview of arguments.
pub fn log_tool_call(name: &str, arguments: &str) {
    let args_preview: String = arguments.chars().take(120).collect();
    info!(
        "[tool] {}({args_preview}{})",
        name,
        if arguments.chars().count() > 120 { "..." } else { "" }
    );
    trace!("[tool] {name} arguments: {arguments}");
}

// ── Tests ──────────────────────────────────────────────────────────
