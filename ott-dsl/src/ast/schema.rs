//! Schema dialect AST: models and union types.

use crate::literal::Literal;
use serde::{Deserialize, Serialize};

/// A parsed schema document: top-level declarations in source order.
pub type SchemaDocument = Vec<SchemaDefinition>;

/// A top-level schema declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SchemaDefinition {
    ModelDefinition(ModelDefinition),
    UnionTypeDefinition(UnionTypeDefinition),
}

impl SchemaDefinition {
    pub fn name(&self) -> &str {
        match self {
            SchemaDefinition::ModelDefinition(m) => &m.name,
            SchemaDefinition::UnionTypeDefinition(u) => &u.name,
        }
    }

    pub fn as_model(&self) -> Option<&ModelDefinition> {
        match self {
            SchemaDefinition::ModelDefinition(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionTypeDefinition> {
        match self {
            SchemaDefinition::UnionTypeDefinition(u) => Some(u),
            _ => None,
        }
    }
}

/// A model with attributes and actions.
///
/// `extends` is the raw parent name; it is not resolved against the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub name: String,
    pub extends: Option<String>,
    pub attributes: Vec<AttributeNode>,
    pub actions: Vec<ActionNode>,
}

impl ModelDefinition {
    pub fn attribute(&self, name: &str) -> Option<&AttributeNode> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn action(&self, name: &str) -> Option<&ActionNode> {
        self.actions.iter().find(|a| a.name == name)
    }
}

/// A closed set of string values. Duplicates are kept as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionTypeDefinition {
    pub name: String,
    pub values: Vec<String>,
}

/// A typed model field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// False when the type carries `?` or a default is present.
    pub required: bool,
    pub default: Option<Literal>,
}

/// A callable model operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionNode {
    pub name: String,
    pub params: Vec<ParamNode>,
    pub return_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamNode {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub optional: bool,
}

/// Iterate over the models of a document.
pub fn models(document: &[SchemaDefinition]) -> impl Iterator<Item = &ModelDefinition> {
    document.iter().filter_map(SchemaDefinition::as_model)
}

/// Iterate over the union types of a document.
pub fn unions(document: &[SchemaDefinition]) -> impl Iterator<Item = &UnionTypeDefinition> {
    document.iter().filter_map(SchemaDefinition::as_union)
}

pub fn find_model<'a>(document: &'a [SchemaDefinition], name: &str) -> Option<&'a ModelDefinition> {
    models(document).find(|m| m.name == name)
}

pub fn find_union<'a>(
    document: &'a [SchemaDefinition],
    name: &str,
) -> Option<&'a UnionTypeDefinition> {
    unions(document).find(|u| u.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SchemaDocument {
        vec![
            SchemaDefinition::ModelDefinition(ModelDefinition {
                name: "User".to_string(),
                extends: Some("Model".to_string()),
                attributes: vec![AttributeNode {
                    name: "id".to_string(),
                    type_name: "string".to_string(),
                    required: true,
                    default: None,
                }],
                actions: vec![ActionNode {
                    name: "get".to_string(),
                    params: vec![],
                    return_type: "User".to_string(),
                }],
            }),
            SchemaDefinition::UnionTypeDefinition(UnionTypeDefinition {
                name: "Gender".to_string(),
                values: vec!["male".to_string(), "female".to_string()],
            }),
        ]
    }

    #[test]
    fn test_lookups() {
        let doc = sample();
        assert_eq!(models(&doc).count(), 1);
        assert_eq!(unions(&doc).count(), 1);
        let user = find_model(&doc, "User").unwrap();
        assert!(user.attribute("id").is_some());
        assert!(user.action("get").is_some());
        assert!(find_model(&doc, "Gender").is_none());
        assert_eq!(find_union(&doc, "Gender").unwrap().values.len(), 2);
        assert_eq!(doc[1].name(), "Gender");
    }

    #[test]
    fn test_serde_field_names() {
        let doc = sample();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json[0]["type"], "ModelDefinition");
        assert_eq!(json[0]["extends"], "Model");
        assert_eq!(json[0]["attributes"][0]["type"], "string");
        assert_eq!(json[0]["attributes"][0]["default"], serde_json::Value::Null);
        assert_eq!(json[0]["actions"][0]["returnType"], "User");
        assert_eq!(json[1]["type"], "UnionTypeDefinition");
        assert_eq!(json[1]["values"][1], "female");

        let back: SchemaDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
