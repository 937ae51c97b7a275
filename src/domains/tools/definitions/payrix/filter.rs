//! Payrix search filter expressions.
//!
//! The Payrix API accepts a compact filter syntax in its `search` header:
//! `field[operator]=value`, with several conditions joined by `&`, e.g.
//! `created[greater]=2024-01-01&status[equals]=1`. The remote API owns that
//! grammar, so this module only splits the string into its conditions for
//! inspection and logging. It never rejects input: unknown operators and
//! fragments without an `[operator]` are forwarded untouched.

use std::fmt;

/// Separator between conditions of one expression.
pub const CONDITION_SEPARATOR: char = '&';

/// One documented search operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOperator {
    pub name: &'static str,
    pub example: &'static str,
    pub description: &'static str,
}

/// Operators documented by the Payrix API.
///
/// Reference table for tool descriptions; the parser does not enforce it.
pub const SUPPORTED_OPERATORS: [SearchOperator; 9] = [
    SearchOperator {
        name: "equals",
        example: "status[equals]=2",
        description: "Equality (null/0/empty OK)",
    },
    SearchOperator {
        name: "exact",
        example: "dba[exact]=Acme Inc",
        description: "Exact match",
    },
    SearchOperator {
        name: "greater",
        example: "created[greater]=20240601",
        description: "Greater than (date/number)",
    },
    SearchOperator {
        name: "less",
        example: "created[less]=20250801",
        description: "Less than (date/number)",
    },
    SearchOperator {
        name: "in",
        example: "status[in]=1,2,3",
        description: "In list (comma, no spaces)",
    },
    SearchOperator {
        name: "like",
        example: "dba[like]=Test%25",
        description: "Partial string (wildcard %25)",
    },
    SearchOperator {
        name: "notlike",
        example: "dba[notlike]=%25Test%25",
        description: "Not like (wildcard %25)",
    },
    SearchOperator {
        name: "diff",
        example: "status[diff]=0",
        description: "Not equal",
    },
    SearchOperator {
        name: "notin",
        example: "status[notin]=1,2",
        description: "Not in list",
    },
];

/// Whether `name` is one of the documented operators.
pub fn is_supported_operator(name: &str) -> bool {
    SUPPORTED_OPERATORS.iter().any(|op| op.name == name)
}

/// Render the operator table as markdown, for tool descriptions and the
/// `docs://search-operators` resource.
pub fn operators_markdown() -> String {
    let mut table = String::from(
        "| Operator | Usage Example | Description |\n|----------|---------------|-------------|\n",
    );
    for op in SUPPORTED_OPERATORS {
        table.push_str(&format!(
            "| {} | {} | {} |\n",
            op.name, op.example, op.description
        ));
    }
    table
}

/// The raw `search` argument of a tool call.
///
/// The only edge validation is trimming the whole string; a blank string
/// means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter(String);

impl SearchFilter {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    /// `None` for a missing or blank search string.
    pub fn from_optional(raw: Option<&str>) -> Option<Self> {
        raw.map(Self::new).filter(|f| !f.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into conditions.
    pub fn expression(&self) -> FilterExpression {
        parse(&self.0)
    }
}

impl From<&str> for SearchFilter {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single `field[operator]=value` fragment, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    raw: String,
}

impl FilterCondition {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Field name before `[`, or before `=` when there is no operator.
    pub fn field(&self) -> &str {
        let end = self
            .raw
            .find(['[', '='])
            .unwrap_or(self.raw.len());
        &self.raw[..end]
    }

    /// Operator between the brackets, if the fragment has one.
    pub fn operator(&self) -> Option<&str> {
        let open = self.raw.find('[')?;
        let close = open + self.raw[open..].find(']')?;
        let eq = self.raw.find('=');
        if eq.is_some_and(|eq| eq < close) {
            return None;
        }
        Some(&self.raw[open + 1..close])
    }

    /// Value after the first `=`, if any.
    pub fn value(&self) -> Option<&str> {
        self.raw.split_once('=').map(|(_, value)| value)
    }

    /// Whether the operator is one of [`SUPPORTED_OPERATORS`].
    pub fn has_known_operator(&self) -> bool {
        self.operator().is_some_and(is_supported_operator)
    }
}

/// Ordered conditions of one search string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpression {
    conditions: Vec<FilterCondition>,
}

impl FilterExpression {
    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Conditions whose operator is missing or undocumented.
    pub fn unrecognized(&self) -> impl Iterator<Item = &FilterCondition> {
        self.conditions.iter().filter(|c| !c.has_known_operator())
    }
}

/// Split a search string on `&` into conditions.
///
/// Never fails. Order is preserved and empty fragments are dropped; every
/// other fragment is kept byte-for-byte, surrounding spaces included.
pub fn parse(search: &str) -> FilterExpression {
    let conditions = search
        .split(CONDITION_SEPARATOR)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| FilterCondition {
            raw: fragment.to_string(),
        })
        .collect();
    FilterExpression { conditions }
}
