//! Structured tool descriptions with usage guidance.
//!
//! `ToolSpec` replaces free-form description strings with structured
//! metadata: purpose, when to use, when not to use, examples, and the shape
//! of the output. The rendered text is what the routing model reads when it
//! decides which tool to call, so it must stay accurate to what the tool does.

/// A structured tool specification with usage guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Tool name (must be unique within a registry).
    pub name: String,
    /// One-sentence purpose: "Get the model list of a product".
    pub purpose: String,
    /// When this tool should be used.
    pub when_to_use: Option<String>,
    /// When this tool should NOT be used.
    pub when_not_to_use: Option<String>,
    /// Usage examples.
    pub examples: Vec<UsageExample>,
    /// Description of the output format.
    pub output_format: Option<String>,
}

/// A usage example for a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageExample {
    /// Description of the input/scenario.
    pub input: String,
    /// Expected behavior or output.
    pub output: String,
}

impl ToolSpec {
    /// Start a spec for the tool called `name` with the given purpose.
    pub fn builder(name: impl Into<String>, purpose: impl Into<String>) -> ToolSpecBuilder {
        ToolSpecBuilder {
            spec: ToolSpec {
                name: name.into(),
                purpose: purpose.into(),
                when_to_use: None,
                when_not_to_use: None,
                examples: Vec::new(),
                output_format: None,
            },
        }
    }

    /// Render this spec as the description string for the model.
    pub fn to_description(&self) -> String {
        let mut desc = format!("{}.", self.purpose.trim_end_matches('.'));
        if let Some(when) = &self.when_to_use {
            desc.push_str(&format!("\nWhen to use: {when}"));
        }
        if let Some(when_not) = &self.when_not_to_use {
            desc.push_str(&format!("\nWhen NOT to use: {when_not}"));
        }

        if !self.examples.is_empty() {
            desc.push_str("\nExamples:");
            for ex in &self.examples {
                desc.push_str(&format!("\n  - Input: {} → {}", ex.input, ex.output));
            }
        }

        if let Some(format) = &self.output_format {
            desc.push_str(&format!("\nOutput format: {format}"));
        }

        desc
    }
}

/// Builder for constructing a `ToolSpec`.
#[derive(Debug, Clone)]
pub struct ToolSpecBuilder {
    spec: ToolSpec,
}

impl ToolSpecBuilder {
    pub fn when_to_use(mut self, when: impl Into<String>) -> Self {
        self.spec.when_to_use = Some(when.into());
        self
    }

    pub fn when_not_to_use(mut self, when_not: impl Into<String>) -> Self {
        self.spec.when_not_to_use = Some(when_not.into());
        self
    }

    pub fn example(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.spec.examples.push(UsageExample {
            input: input.into(),
            output: output.into(),
        });
        self
    }

    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.spec.output_format = Some(format.into());
        self
    }

    pub fn build(self) -> ToolSpec {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_tool_spec() {
        let spec = ToolSpec::builder("ProductDetailsInfo", "Get the model list of a product")
            .when_to_use("When the user asks which models a product has")
            .when_not_to_use("For sales figures — use ProductSalesInfo instead")
            .example(
                r#"ProductDetailsInfo(product="PD-1405")"#,
                "The product with its three model ids",
            )
            .output_format("ProductModels[product=..., models=[...]]")
            .build();

        assert_eq!(spec.name, "ProductDetailsInfo");
        let desc = spec.to_description();
        assert!(desc.starts_with("Get the model list of a product."));
        assert!(desc.contains("When NOT to use:"));
        assert!(desc.contains("ProductSalesInfo"));
        assert!(desc.contains("Examples:"));
        assert!(desc.contains("Output format:"));
    }

    #[test]
    fn purpose_only_renders_single_sentence() {
        let spec = ToolSpec::builder("CurrentDateTime", "Get the current date and time.").build();
        assert_eq!(spec.to_description(), "Get the current date and time.");
    }
}
