//! Prompt Registry - central registration of all prompts.

use super::definitions::{
    GetMerchantByIdPrompt, GetMerchantsPrompt, GetTxnByIdPrompt, GetTxnsPrompt, PromptDefinition,
};
use super::templates::PromptTemplate;

fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate::new(
        P::NAME,
        Some(P::DESCRIPTION.to_string()),
        P::arguments(),
        P::template(),
    )
}

/// Get all registered prompts as PromptTemplates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<GetMerchantsPrompt>(),
        build_template::<GetMerchantByIdPrompt>(),
        build_template::<GetTxnsPrompt>(),
        build_template::<GetTxnByIdPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        GetMerchantsPrompt::NAME,
        GetMerchantByIdPrompt::NAME,
        GetTxnsPrompt::NAME,
        GetTxnByIdPrompt::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, prompt_names());
        assert_eq!(
            names,
            vec!["get_merchants", "get_merchants_id", "get_txns", "get_txns_id"]
        );
    }
}
