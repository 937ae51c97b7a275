//! Shared execution for the Payrix list and lookup-by-id tools.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info};

use super::client::PayrixClient;
use super::filter::{SearchFilter, operators_markdown};
use super::request::{ToolRequest, TotalsFlag, translate};
use super::response::normalize_for;

/// Parameters of the Payrix list tools.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PayrixListParams {
    /// Filter string in `field[operator]=value` form, conditions joined by `&`.
    #[serde(default)]
    #[schemars(
        description = "Search filter, e.g. 'created[greater]=2024-01-01&status[equals]=1'. Conditions are joined with '&'."
    )]
    pub search: Option<String>,

    #[serde(default)]
    #[schemars(description = "If true, include total counts in the response")]
    pub totals: Option<TotalsFlag>,

    #[serde(default, rename = "page_number_")]
    #[schemars(description = "Page number for pagination (omit for the API default)")]
    pub page_number: Option<i64>,

    #[serde(default, rename = "page_limit_")]
    #[schemars(description = "Page size for pagination (omit for the API default)")]
    pub page_limit: Option<i64>,
}

/// Parameters of the Payrix lookup-by-id tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PayrixByIdParams {
    #[schemars(description = "Identifier of the record to retrieve")]
    pub id: String,

    #[serde(default)]
    #[schemars(description = "Optional search filter in field[operator]=value form")]
    pub search: Option<String>,
}

/// A Payrix collection exposed as a pair of tools: a filtered list and a
/// lookup by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrixResource {
    /// Collection path, e.g. `/merchants`.
    pub list_path: &'static str,
    /// Item path template, e.g. `/merchants/{id}`.
    pub item_path: &'static str,
    /// Plural noun used in the empty-result message.
    pub label: &'static str,
    pub list_tool: &'static str,
    pub lookup_tool: &'static str,
    pub list_summary: &'static str,
    pub lookup_summary: &'static str,
}

pub const MERCHANTS: PayrixResource = PayrixResource {
    list_path: "/merchants",
    item_path: "/merchants/{id}",
    label: "merchants",
    list_tool: "getMerchants",
    lookup_tool: "getMerchantsId",
    list_summary: "Show/Query/Get/Fetch/Retrieve Merchants, organizations that process credit card payments, each associated with an Entity. Returns the JSON response, a 'No merchants found' message, or an error message.",
    lookup_summary: "Show/Query/Get/Fetch/Retrieve a Merchant by Id. A Merchant is an organization that processes credit card payments and is associated with an Entity.",
};

pub const TRANSACTIONS: PayrixResource = PayrixResource {
    list_path: "/txns",
    item_path: "/txns/{id}",
    label: "transactions",
    list_tool: "getTxns",
    lookup_tool: "getTxnsId",
    list_summary: "Show/Query/Get/Fetch/Retrieve Transactions. Transactions hold all of the information relating to a particular credit card transaction, including the merchant, token, subscription, customer and card information. Filter by merchant with e.g. 'merchant[equals]=p1_mer_688b17e778a020dfcf67a59'.",
    lookup_summary: "Show/Query/Get/Fetch/Retrieve a Transaction by Id, including its merchant, token, subscription, customer and card information.",
};

impl PayrixResource {
    pub const ALL: [PayrixResource; 2] = [MERCHANTS, TRANSACTIONS];

    pub fn by_list_tool(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.list_tool == name)
    }

    pub fn by_lookup_tool(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.lookup_tool == name)
    }

    /// Query the collection. Returns the body, the empty-result message, or
    /// an `Error:`/`API Error:` string.
    pub async fn list(&self, client: &PayrixClient, params: &PayrixListParams) -> String {
        let filter = SearchFilter::from_optional(params.search.as_deref());
        log_filter(self.label, filter.as_ref());

        let request = ToolRequest::new(self.list_path)
            .with_filter(filter)
            .with_totals(params.totals.clone())
            .with_page(params.page_number, params.page_limit);

        let raw = client.get_text(&translate(&request)).await;
        normalize_for(&raw, self.label)
    }

    /// Fetch one record. The body is returned as-is.
    pub async fn fetch(&self, client: &PayrixClient, params: &PayrixByIdParams) -> String {
        let filter = SearchFilter::from_optional(params.search.as_deref());
        log_filter(self.label, filter.as_ref());

        let request = ToolRequest::new(self.item_path)
            .with_id(params.id.as_str())
            .with_filter(filter);

        client.get_text(&translate(&request)).await
    }
}

fn log_filter(label: &str, filter: Option<&SearchFilter>) {
    let Some(filter) = filter else {
        info!("Querying {} without filter", label);
        return;
    };
    let expression = filter.expression();
    info!("Querying {} with {} condition(s)", label, expression.len());
    for condition in expression.unrecognized() {
        debug!("Forwarding condition with undocumented operator: {}", condition.raw());
    }
}

/// Help text appended to every Payrix tool description.
pub fn search_help() -> String {
    format!(
        "Search uses key[operator]=value; join multiple conditions with '&', \
         e.g. 'created[greater]=2024-01-01&status[equals]=1'.\n\nSupported operators:\n{}",
        operators_markdown()
    )
}
