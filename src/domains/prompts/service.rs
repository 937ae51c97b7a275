//! Prompt service implementation.
//!
//! Lists the registered prompts and renders them with client-supplied
//! arguments.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for listing and instantiating prompts.
pub struct PromptService {
    /// Key: prompt name. Ordered so listings are stable.
    prompts: BTreeMap<String, PromptTemplate>,
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptService {
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: BTreeMap::new(),
        };
        for template in get_all_prompts() {
            service.register_prompt(template);
        }
        service
    }

    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    ///
    /// A required argument that is missing or empty is rejected.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();
        for required in template.required_arguments() {
            if arguments.get(required).is_none_or(|value| value.trim().is_empty()) {
                return Err(PromptError::missing_argument(required));
            }
        }

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    fn text_of(result: &GetPromptResult) -> &str {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text,
            other => panic!("expected text message, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_prompt_service_creation() {
        let prompts = PromptService::new().list_prompts().await;
        assert_eq!(prompts.len(), 4);
    }

    #[tokio::test]
    async fn test_list_prompt_without_criteria() {
        let result = PromptService::new().get_prompt("get_txns", None).await.unwrap();
        let text = text_of(&result);
        assert!(text.starts_with("Please provide the criteria to list transactions"));
        assert!(!text.contains("matching"));
    }

    #[tokio::test]
    async fn test_list_prompt_with_criteria() {
        let mut args = HashMap::new();
        args.insert("criteria".to_string(), "created after 2024-01-01".to_string());
        let result = PromptService::new()
            .get_prompt("get_merchants", Some(args))
            .await
            .unwrap();
        assert!(text_of(&result).ends_with("List merchants matching: created after 2024-01-01"));
    }

    #[tokio::test]
    async fn test_lookup_prompt_with_id() {
        let mut args = HashMap::new();
        args.insert("id".to_string(), "t1_txn_42".to_string());
        let result = PromptService::new()
            .get_prompt("get_txns_id", Some(args))
            .await
            .unwrap();
        assert_eq!(
            text_of(&result),
            "Retrieve the details of transaction t1_txn_42 with the getTxnsId tool."
        );
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let result = PromptService::new().get_prompt("get_merchants_id", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = PromptService::new().get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
