//! Pretty printer for OTT ASTs
//!
//! Output is canonical source: parsing it again yields an equal AST
//! (locations aside).

use crate::ast::*;

const INDENT: &str = "    ";

// ============================================================================
// SCHEMA
// ============================================================================

/// Pretty-print a schema document back to OTT source.
pub fn pretty_print_schema(document: &[SchemaDefinition]) -> String {
    let blocks: Vec<String> = document
        .iter()
        .map(|definition| match definition {
            SchemaDefinition::ModelDefinition(m) => pretty_print_model(m),
            SchemaDefinition::UnionTypeDefinition(u) => pretty_print_union(u),
        })
        .collect();

    let mut output = blocks.join("\n");
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

fn pretty_print_model(model: &ModelDefinition) -> String {
    let mut output = format!("Model {}", model.name);
    if let Some(parent) = &model.extends {
        output.push_str(&format!(" extends {}", parent));
    }

    if model.attributes.is_empty() && model.actions.is_empty() {
        output.push_str(" {}\n");
        return output;
    }

    output.push_str(" {\n");
    for attribute in &model.attributes {
        output.push_str(INDENT);
        output.push_str(&pretty_print_attribute(attribute));
        output.push('\n');
    }
    for action in &model.actions {
        output.push_str(INDENT);
        output.push_str(&pretty_print_action(action));
        output.push('\n');
    }
    output.push_str("}\n");
    output
}

fn pretty_print_attribute(attribute: &AttributeNode) -> String {
    match &attribute.default {
        // The default alone makes it optional; no marker needed.
        Some(default) => format!("{}: {} = {}", attribute.name, attribute.type_name, default),
        None if attribute.required => format!("{}: {}", attribute.name, attribute.type_name),
        None => format!("{}: {}?", attribute.name, attribute.type_name),
    }
}

fn pretty_print_action(action: &ActionNode) -> String {
    let params: Vec<String> = action
        .params
        .iter()
        .map(|p| {
            let marker = if p.optional { "?" } else { "" };
            format!("{}: {}{}", p.name, p.type_name, marker)
        })
        .collect();
    format!(
        "{}({}): {}",
        action.name,
        params.join(", "),
        action.return_type
    )
}

fn pretty_print_union(union: &UnionTypeDefinition) -> String {
    let values: Vec<String> = union
        .values
        .iter()
        .map(|v| crate::literal::Literal::String(v.clone()).to_string())
        .collect();
    format!("type {} = {}\n", union.name, values.join(" | "))
}

// ============================================================================
// REQUEST
// ============================================================================

/// Pretty-print a request chain on a single line.
pub fn pretty_print_request(ast: &RequestAst) -> String {
    let mut output = ast.model.clone();
    if !ast.filters.is_empty() {
        output.push_str(&pretty_print_filter_args(&ast.filters));
    }
    for step in &ast.chain {
        output.push('.');
        output.push_str(&step.relation);
        output.push_str(&pretty_print_filter_args(&step.filters));
    }
    output
}

fn pretty_print_filter_args(filters: &[RequestFilter]) -> String {
    let args: Vec<String> = filters
        .iter()
        .map(|f| format!("{}: {}", f.key, f.value))
        .collect();
    format!("({})", args.join(", "))
}

// ============================================================================
// RESPONSE
// ============================================================================

/// Pretty-print a response record.
pub fn pretty_print_response(ast: &ResponseAst) -> String {
    if ast.fields.is_empty() {
        return format!("{} {{}}\n", ast.type_name);
    }

    let mut output = format!("{} {{\n", ast.type_name);
    for field in &ast.fields {
        output.push_str(&format!("{}{}: {}\n", INDENT, field.key, field.value));
    }
    output.push_str("}\n");
    output
}


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::literal::Literal;
    use crate::location::{Location, Position};
    use crate::{parse_request, parse_response, parse_schema};
    use proptest::prelude::*;

    const RESERVED: &[&str] = &["Model", "extends", "type", "true", "false", "null"];

    fn arb_identifier() -> impl Strategy<Value = String> {
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}".prop_filter("reserved word", |s| !RESERVED.contains(&s.as_str()))
    }

    fn arb_type_ref() -> impl Strategy<Value = String> {
        prop_oneof![
            arb_identifier(),
            (arb_identifier(), prop::collection::vec(arb_identifier(), 1..3))
                .prop_map(|(head, args)| format!("{}<{}>", head, args.join(", "))),
        ]
    }

    fn arb_literal() -> impl Strategy<Value = Literal> {
        prop_oneof![
            "[ -~\n\t]{0,12}".prop_map(Literal::String),
            (-1.0e6f64..1.0e6f64).prop_map(Literal::Number),
            any::<i32>().prop_map(|n| Literal::Number(n as f64)),
            any::<bool>().prop_map(Literal::Boolean),
            Just(Literal::Null),
        ]
    }

    fn arb_attribute() -> impl Strategy<Value = AttributeNode> {
        (
            arb_identifier(),
            arb_type_ref(),
            any::<bool>(),
            prop::option::of(arb_literal()),
        )
            .prop_map(|(name, type_name, optional, default)| AttributeNode {
                name,
                type_name,
                required: !optional && default.is_none(),
                default,
            })
    }

    fn arb_param() -> impl Strategy<Value = ParamNode> {
        (arb_identifier(), arb_type_ref(), any::<bool>()).prop_map(|(name, type_name, optional)| {
            ParamNode {
                name,
                type_name,
                optional,
            }
        })
    }

    fn arb_action() -> impl Strategy<Value = ActionNode> {
        (
            arb_identifier(),
            prop::collection::vec(arb_param(), 0..4),
            arb_type_ref(),
        )
            .prop_map(|(name, params, return_type)| ActionNode {
                name,
                params,
                return_type,
            })
    }

    fn arb_model() -> impl Strategy<Value = ModelDefinition> {
        (
            arb_identifier(),
            prop::option::of(arb_identifier()),
            prop::collection::vec(arb_attribute(), 0..5),
            prop::collection::vec(arb_action(), 0..4),
        )
            .prop_map(|(name, extends, attributes, actions)| ModelDefinition {
                name,
                extends,
                attributes,
                actions,
            })
    }

    fn arb_union() -> impl Strategy<Value = UnionTypeDefinition> {
        (
            arb_identifier(),
            prop::collection::vec("[ -~]{0,10}", 1..5),
        )
            .prop_map(|(name, values)| UnionTypeDefinition { name, values })
    }

    fn arb_definition() -> impl Strategy<Value = SchemaDefinition> {
        prop_oneof![
            arb_model().prop_map(SchemaDefinition::ModelDefinition),
            arb_union().prop_map(SchemaDefinition::UnionTypeDefinition),
        ]
    }

    fn nowhere() -> Location {
        Location::new("", Position::start(), Position::start())
    }

    fn arb_filter() -> impl Strategy<Value = RequestFilter> {
        (arb_identifier(), arb_literal()).prop_map(|(key, value)| RequestFilter {
            key,
            value,
            location: nowhere(),
        })
    }

    fn arb_request() -> impl Strategy<Value = RequestAst> {
        (
            arb_identifier(),
            prop::collection::vec(arb_filter(), 0..4),
            prop::collection::vec(
                (arb_identifier(), prop::collection::vec(arb_filter(), 0..3)),
                0..4,
            ),
        )
            .prop_map(|(model, filters, steps)| RequestAst {
                model,
                filters,
                chain: steps
                    .into_iter()
                    .map(|(relation, filters)| RequestChain {
                        relation,
                        filters,
                        method: None,
                        location: nowhere(),
                    })
                    .collect(),
                location: nowhere(),
            })
    }

    fn arb_response() -> impl Strategy<Value = ResponseAst> {
        (
            arb_identifier(),
            prop::collection::vec((arb_identifier(), arb_literal()), 0..6),
        )
            .prop_map(|(type_name, fields)| ResponseAst {
                type_name,
                fields: fields
                    .into_iter()
                    .map(|(key, value)| ResponseField {
                        key,
                        value,
                        location: nowhere(),
                    })
                    .collect(),
                location: nowhere(),
            })
    }

    fn strip_request(mut ast: RequestAst) -> RequestAst {
        ast.location = nowhere();
        for filter in &mut ast.filters {
            filter.location = nowhere();
        }
        for step in &mut ast.chain {
            step.location = nowhere();
            for filter in &mut step.filters {
                filter.location = nowhere();
            }
        }
        ast
    }

    fn strip_response(mut ast: ResponseAst) -> ResponseAst {
        ast.location = nowhere();
        for field in &mut ast.fields {
            field.location = nowhere();
        }
        ast
    }

    proptest! {
        #[test]
        fn prop_round_trip_schema(doc in prop::collection::vec(arb_definition(), 0..5)) {
            let source = pretty_print_schema(&doc);
            let parsed = parse_schema(&source).expect("parse failed");

            prop_assert_eq!(doc, parsed);
        }

        #[test]
        fn prop_round_trip_request(ast in arb_request()) {
            let source = pretty_print_request(&ast);
            let parsed = parse_request(&source).expect("parse failed");

            prop_assert_eq!(ast, strip_request(parsed));
        }

        #[test]
        fn prop_round_trip_response(ast in arb_response()) {
            let source = pretty_print_response(&ast);
            let parsed = parse_response(&source).expect("parse failed");

            prop_assert_eq!(ast, strip_response(parsed));
        }
    }
}
