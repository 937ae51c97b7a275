//! Prompt definitions module.
//!
//! Each prompt provides its metadata, arguments and template through
//! [`PromptDefinition`] and is registered in `registry.rs`.

mod merchants;
mod txns;

pub use merchants::{GetMerchantByIdPrompt, GetMerchantsPrompt};
pub use txns::{GetTxnByIdPrompt, GetTxnsPrompt};

use rmcp::model::PromptArgument;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with `{{variable}}` placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}

/// Optional free-text `criteria` argument shared by the list prompts.
pub(crate) fn criteria_argument(example: &str) -> PromptArgument {
    PromptArgument {
        name: "criteria".to_string(),
        title: Some("Criteria".to_string()),
        description: Some(format!(
            "What to look for, in plain words or as a search filter, e.g. {}",
            example
        )),
        required: Some(false),
    }
}

/// Required `id` argument of the lookup prompts.
pub(crate) fn id_argument(what: &str) -> PromptArgument {
    PromptArgument {
        name: "id".to_string(),
        title: Some("Id".to_string()),
        description: Some(format!("Identifier of the {} to retrieve", what)),
        required: Some(true),
    }
}
