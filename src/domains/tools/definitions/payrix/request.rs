//! Translation of a tool call into an outbound Payrix request.

use schemars::JsonSchema;
use serde::Deserialize;
use std::collections::BTreeMap;

use super::filter::SearchFilter;

/// Query parameter carrying the page index.
pub const PAGE_NUMBER_PARAM: &str = "page[number]";
/// Query parameter carrying the page size.
pub const PAGE_LIMIT_PARAM: &str = "page[limit]";
/// Header carrying the raw filter expression.
pub const SEARCH_HEADER: &str = "search";
/// Header asking the API to include total counts.
pub const TOTALS_HEADER: &str = "totals";

/// Placeholder replaced by the resource identifier in path templates.
const ID_PLACEHOLDER: &str = "{id}";

/// The `totals` tool argument.
///
/// Clients send either a JSON boolean or a string such as `"true"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TotalsFlag {
    Bool(bool),
    Text(String),
}

impl TotalsFlag {
    /// `true`, or any non-blank string.
    pub fn is_truthy(&self) -> bool {
        match self {
            TotalsFlag::Bool(b) => *b,
            TotalsFlag::Text(s) => !s.trim().is_empty(),
        }
    }

    /// Lowercase string form sent in the `totals` header.
    pub fn header_value(&self) -> String {
        match self {
            TotalsFlag::Bool(b) => b.to_string(),
            TotalsFlag::Text(s) => s.trim().to_lowercase(),
        }
    }
}

impl From<bool> for TotalsFlag {
    fn from(value: bool) -> Self {
        TotalsFlag::Bool(value)
    }
}

/// Everything a Payrix tool needs to describe one outbound GET.
#[derive(Debug, Clone, Default)]
pub struct ToolRequest {
    /// Path template such as `/merchants` or `/merchants/{id}`.
    pub resource_path: String,
    pub id: Option<String>,
    pub filter: Option<SearchFilter>,
    pub totals: Option<TotalsFlag>,
    /// `None` means "use the API default"; `Some(0)` is sent as-is.
    pub page_number: Option<i64>,
    pub page_limit: Option<i64>,
}

impl ToolRequest {
    pub fn new(resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_filter(mut self, filter: Option<SearchFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_totals(mut self, totals: Option<TotalsFlag>) -> Self {
        self.totals = totals;
        self
    }

    pub fn with_page(mut self, number: Option<i64>, limit: Option<i64>) -> Self {
        self.page_number = number;
        self.page_limit = limit;
        self
    }
}

/// Path, query parameters and extra headers of one outbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutboundRequest {
    pub path: String,
    pub query_params: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
}

/// Build the outbound request for a tool call.
pub fn translate(request: &ToolRequest) -> OutboundRequest {
    let path = match &request.id {
        Some(id) => request.resource_path.replace(ID_PLACEHOLDER, id),
        None => request.resource_path.clone(),
    };

    let mut query_params = BTreeMap::new();
    if let Some(number) = request.page_number {
        query_params.insert(PAGE_NUMBER_PARAM.to_string(), number.to_string());
    }
    if let Some(limit) = request.page_limit {
        query_params.insert(PAGE_LIMIT_PARAM.to_string(), limit.to_string());
    }

    let mut headers = BTreeMap::new();
    if let Some(filter) = request.filter.as_ref().filter(|f| !f.is_empty()) {
        headers.insert(SEARCH_HEADER.to_string(), filter.as_str().to_string());
    }
    if let Some(totals) = request.totals.as_ref().filter(|t| t.is_truthy()) {
        headers.insert(TOTALS_HEADER.to_string(), totals.header_value());
    }

    OutboundRequest {
        path,
        query_params,
        headers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_absent_is_omitted() {
        let out = translate(&ToolRequest::new("/merchants"));
        assert_eq!(out.path, "/merchants");
        assert!(out.query_params.is_empty());
        assert!(out.headers.is_empty());
    }

    #[test]
    fn test_pagination_zero_is_sent() {
        let out = translate(&ToolRequest::new("/merchants").with_page(Some(0), Some(0)));
        assert_eq!(out.query_params.get(PAGE_NUMBER_PARAM).map(String::as_str), Some("0"));
        assert_eq!(out.query_params.get(PAGE_LIMIT_PARAM).map(String::as_str), Some("0"));
    }

    #[test]
    fn test_pagination_values() {
        let out = translate(&ToolRequest::new("/txns").with_page(Some(2), None));
        assert_eq!(out.query_params.len(), 1);
        assert_eq!(out.query_params[PAGE_NUMBER_PARAM], "2");
    }

    #[test]
    fn test_negative_page_is_forwarded() {
        let out = translate(&ToolRequest::new("/txns").with_page(Some(-1), None));
        assert_eq!(out.query_params[PAGE_NUMBER_PARAM], "-1");
    }

    #[test]
    fn test_lookup_by_id_without_filter() {
        let out = translate(&ToolRequest::new("/merchants/{id}").with_id("p1_mer_123"));
        assert_eq!(out.path, "/merchants/p1_mer_123");
        assert!(out.query_params.is_empty());
        assert!(!out.headers.contains_key(SEARCH_HEADER));
    }

    #[test]
    fn test_lookup_by_id_with_filter() {
        let filter = SearchFilter::from_optional(Some("status[equals]=1"));
        let out = translate(
            &ToolRequest::new("/merchants/{id}")
                .with_id("p1_mer_123")
                .with_filter(filter),
        );
        assert_eq!(out.path, "/merchants/p1_mer_123");
        assert_eq!(out.headers[SEARCH_HEADER], "status[equals]=1");
    }

    #[test]
    fn test_search_header_is_raw_string() {
        let raw = "created[greater]=2024-01-01&status[equals]=active";
        let out = translate(&ToolRequest::new("/txns").with_filter(Some(SearchFilter::new(raw))));
        assert_eq!(out.headers[SEARCH_HEADER], raw);
    }

    #[test]
    fn test_totals_header_only_when_truthy() {
        let out = translate(&ToolRequest::new("/txns").with_totals(Some(false.into())));
        assert!(!out.headers.contains_key(TOTALS_HEADER));

        let out = translate(&ToolRequest::new("/txns").with_totals(Some(TotalsFlag::Text(String::new()))));
        assert!(!out.headers.contains_key(TOTALS_HEADER));

        let out = translate(&ToolRequest::new("/txns").with_totals(Some(TotalsFlag::Text("TRUE".into()))));
        assert_eq!(out.headers[TOTALS_HEADER], "true");

        let out = translate(&ToolRequest::new("/txns").with_totals(Some(true.into())));
        assert_eq!(out.headers[TOTALS_HEADER], "true");
    }

    #[test]
    fn test_totals_flag_deserializes_both_forms() {
        let flag: TotalsFlag = serde_json::from_str("true").unwrap();
        assert_eq!(flag, TotalsFlag::Bool(true));
        let flag: TotalsFlag = serde_json::from_str("\"True\"").unwrap();
        assert_eq!(flag.header_value(), "true");
    }
}
