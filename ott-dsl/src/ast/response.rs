//! Response dialect AST: a typed record of literal fields.

use crate::literal::Literal;
use crate::location::Location;
use serde::{Deserialize, Serialize};

/// `User { id: "123", active: true }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseAst {
    #[serde(rename = "type")]
    pub type_name: String,
    pub fields: Vec<ResponseField>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseField {
    pub key: String,
    pub value: Literal,
    pub location: Location,
}

impl ResponseAst {
    pub fn field(&self, key: &str) -> Option<&Literal> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }
}
