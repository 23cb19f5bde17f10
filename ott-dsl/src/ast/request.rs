//! Request dialect AST: a root model with filters and a chain of steps.

use crate::literal::Literal;
use crate::location::Location;
use serde::{Deserialize, Serialize};

/// `User(id: "123").posts(type: "image").get()`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestAst {
    pub model: String,
    /// Filters applied to the root model before any chain step.
    pub filters: Vec<RequestFilter>,
    pub chain: Vec<RequestChain>,
    pub location: Location,
}

/// One `key: literal` argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestFilter {
    pub key: String,
    pub value: Literal,
    pub location: Location,
}

/// One `.relation(...)` step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestChain {
    pub relation: String,
    pub filters: Vec<RequestFilter>,
    /// Reserved for an explicit verb suffix; the grammar never sets it.
    pub method: Option<String>,
    pub location: Location,
}

impl RequestAst {
    pub fn filter(&self, key: &str) -> Option<&Literal> {
        find_filter(&self.filters, key)
    }

    /// The chain step for `relation`, if present.
    pub fn step(&self, relation: &str) -> Option<&RequestChain> {
        self.chain.iter().find(|c| c.relation == relation)
    }
}

impl RequestChain {
    pub fn filter(&self, key: &str) -> Option<&Literal> {
        find_filter(&self.filters, key)
    }
}

fn find_filter<'a>(filters: &'a [RequestFilter], key: &str) -> Option<&'a Literal> {
    filters.iter().find(|f| f.key == key).map(|f| &f.value)
}
