//! Payrix API proxy tools.
//!
//! - `filter`: search expression splitting and the operator reference table
//! - `request`: tool arguments -> path, query parameters and headers
//! - `response`: empty-result normalization
//! - `client`: the single outbound GET
//! - `resource`: the merchants and transactions collections
//! - `tools`: the list and lookup tools built on the above

pub mod client;
pub mod filter;
pub mod request;
pub mod resource;
pub mod response;
pub mod tools;

pub use client::{ApiError, PayrixClient};
pub use filter::{FilterCondition, FilterExpression, SearchFilter, parse};
pub use request::{OutboundRequest, ToolRequest, TotalsFlag, translate};
pub use resource::{MERCHANTS, PayrixByIdParams, PayrixListParams, PayrixResource, TRANSACTIONS};
pub use response::{NO_RESULTS_SENTINEL, normalize, try_parse};
pub use tools::{PayrixListTool, PayrixLookupTool};
