//! Transaction guidance prompts.

use super::{PromptDefinition, criteria_argument, id_argument};
use rmcp::model::PromptArgument;

pub struct GetTxnsPrompt;

impl PromptDefinition for GetTxnsPrompt {
    const NAME: &'static str = "get_txns";
    const DESCRIPTION: &'static str = "Guide the listing of transactions with the getTxns tool";

    fn template() -> &'static str {
        "Please provide the criteria to list transactions from the Payrix API. \
You can specify conditions such as 'top 4', 'created after 2024-01-01', 'amount greater than 100', etc. \
For multiple conditions, use '&' as the separator, e.g., 'merchant[equals]=000000000000007&created[greater]=2025-07-29'. \
Show me all transactions related to a merchant MMM in last XX days.\
{{#if criteria}}\n\nList transactions matching: {{criteria}}{{/if}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![criteria_argument("'amount greater than 100' or 'status[in]=1,3'")]
    }
}

pub struct GetTxnByIdPrompt;

impl PromptDefinition for GetTxnByIdPrompt {
    const NAME: &'static str = "get_txns_id";
    const DESCRIPTION: &'static str =
        "Guide the lookup of a single transaction with the getTxnsId tool";

    fn template() -> &'static str {
        "{{#if id}}Retrieve the details of transaction {{id}} with the getTxnsId tool.\
{{else}}Please provide the transaction ID to retrieve details for a specific transaction.{{/if}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![id_argument("transaction")]
    }
}
