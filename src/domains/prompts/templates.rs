//! Prompt template rendering.
//!
//! Supported syntax:
//! - `{{name}}` is replaced by the argument value, or removed when absent
//! - `{{#if name}}..{{/if}}` keeps its body only when `name` is non-empty
//! - `{{#if name}}..{{else}}..{{/if}}` picks one branch
//!
//! Conditionals do not nest.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE: &str = "{{else}}";
const END_IF: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<PromptArgument>,
    pub template: String,
}

impl PromptTemplate {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Names of the arguments marked as required.
    pub fn required_arguments(&self) -> impl Iterator<Item = &str> {
        self.arguments
            .iter()
            .filter(|arg| arg.required.unwrap_or(false))
            .map(|arg| arg.name.as_str())
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let expanded = expand_conditionals(&self.template, arguments)?;
        substitute(&expanded, arguments)
    }
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments.get(name).is_some_and(|value| !value.is_empty())
}

fn expand_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(IF_OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + IF_OPEN.len()..];

        let name_end = after_open
            .find("}}")
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let name = after_open[..name_end].trim();
        let body_and_rest = &after_open[name_end + 2..];

        let body_end = body_and_rest
            .find(END_IF)
            .ok_or_else(|| PromptError::template(format!("Missing {{{{/if}}}} for '{}'", name)))?;
        let body = &body_and_rest[..body_end];
        if body.contains(IF_OPEN) {
            return Err(PromptError::template("Nested {{#if}} blocks are not supported"));
        }

        let (then_branch, else_branch) = body.split_once(ELSE).unwrap_or((body, ""));
        out.push_str(if is_set(arguments, name) {
            then_branch
        } else {
            else_branch
        });

        rest = &body_and_rest[body_end + END_IF.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

fn substitute(template: &str, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            // Unterminated braces are literal text
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let name = after_open[..end].trim();
        if name.starts_with('#') || name.starts_with('/') || name == "else" {
            return Err(PromptError::template(format!("Stray tag '{{{{{}}}}}'", name)));
        }
        if let Some(value) = arguments.get(name) {
            out.push_str(value);
        }

        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}
