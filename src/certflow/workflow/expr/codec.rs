//! Wire codec for condition expressions
//!
//! Each node is a JSON object carrying a `type` discriminator next to the
//! variant's own fields. There is no schema registry, so decoding is
//! two-pass: peek at `type`, deserialize the matching wire shape with its
//! children left as opaque documents, then recurse into each child.
//!
//! Wire shapes:
//! - `{"type": "const", "kind": "number", "value": "2"}`
//! - `{"type": "var", "selector": {"nodeId": "N1", "name": "certificate.daysLeft", "kind": "number"}}`
//! - `{"type": "comparison", "operator": "eq", "left": ..., "right": ...}`
//! - `{"type": "logical", "operator": "and", "left": ..., "right": ...}`
//! - `{"type": "not", "expr": ...}`

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::ast::{Expr, VariableSelector};
use super::error::DecodeError;
use super::value::ValueKind;

const TYPE_FIELD: &str = "type";
const TYPE_CONST: &str = "const";
const TYPE_VAR: &str = "var";
const TYPE_COMPARISON: &str = "comparison";
const TYPE_LOGICAL: &str = "logical";
const TYPE_NOT: &str = "not";

#[derive(Deserialize)]
struct ConstWire {
    kind: ValueKind,
    value: String,
}

#[derive(Deserialize)]
struct VarWire {
    selector: SelectorWire,
}

#[derive(Deserialize, Serialize)]
struct SelectorWire {
    #[serde(rename = "nodeId")]
    node_id: String,
    name: String,
    kind: ValueKind,
}

/// Binary node with children kept opaque for the second pass
#[derive(Deserialize)]
struct BinaryWire {
    operator: String,
    left: Value,
    right: Value,
}

#[derive(Deserialize)]
struct NotWire {
    expr: Value,
}

/// Decode a wire document into an expression tree
pub fn decode(value: &Value) -> Result<Expr, DecodeError> {
    let tag = value
        .get(TYPE_FIELD)
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingDiscriminator)?;

    match tag {
        TYPE_CONST => {
            let wire: ConstWire = serde_json::from_value(value.clone())?;
            Ok(Expr::Constant {
                kind: wire.kind,
                value: wire.value,
            })
        }
        TYPE_VAR => {
            let wire: VarWire = serde_json::from_value(value.clone())?;
            Ok(Expr::Variable {
                selector: VariableSelector {
                    node_id: wire.selector.node_id,
                    name: wire.selector.name,
                    kind: wire.selector.kind,
                },
            })
        }
        TYPE_COMPARISON => {
            let wire: BinaryWire = serde_json::from_value(value.clone())?;
            Ok(Expr::Comparison {
                operator: wire.operator,
                left: Box::new(decode(&wire.left)?),
                right: Box::new(decode(&wire.right)?),
            })
        }
        TYPE_LOGICAL => {
            let wire: BinaryWire = serde_json::from_value(value.clone())?;
            Ok(Expr::Logical {
                operator: wire.operator,
                left: Box::new(decode(&wire.left)?),
                right: Box::new(decode(&wire.right)?),
            })
        }
        TYPE_NOT => {
            let wire: NotWire = serde_json::from_value(value.clone())?;
            Ok(Expr::Not {
                operand: Box::new(decode(&wire.expr)?),
            })
        }
        other => Err(DecodeError::UnknownExpressionType(other.to_string())),
    }
}

/// Decode an expression tree from JSON text
pub fn decode_str(input: &str) -> Result<Expr, DecodeError> {
    let value: Value = serde_json::from_str(input)?;
    decode(&value)
}

/// Encode an expression tree into its wire document
pub fn encode(expr: &Expr) -> Value {
    match expr {
        Expr::Constant { kind, value } => json!({
            "type": TYPE_CONST,
            "kind": kind,
            "value": value,
        }),
        Expr::Variable { selector } => json!({
            "type": TYPE_VAR,
            "selector": SelectorWire {
                node_id: selector.node_id.clone(),
                name: selector.name.clone(),
                kind: selector.kind,
            },
        }),
        Expr::Comparison {
            operator,
            left,
            right,
        } => json!({
            "type": TYPE_COMPARISON,
            "operator": operator,
            "left": encode(left),
            "right": encode(right),
        }),
        Expr::Logical {
            operator,
            left,
            right,
        } => json!({
            "type": TYPE_LOGICAL,
            "operator": operator,
            "left": encode(left),
            "right": encode(right),
        }),
        Expr::Not { operand } => json!({
            "type": TYPE_NOT,
            "expr": encode(operand),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_constant() {
        let expr = decode(&json!({"type": "const", "kind": "number", "value": "5"})).unwrap();
        assert_eq!(expr, Expr::constant(ValueKind::Number, "5"));
    }

    #[test]
    fn test_decode_variable() {
        let expr = decode(&json!({
            "type": "var",
            "selector": {"nodeId": "N1", "name": "certificate.validity", "kind": "boolean"},
        }))
        .unwrap();
        assert_eq!(
            expr,
            Expr::variable("N1", "certificate.validity", ValueKind::Boolean)
        );
    }

    #[test]
    fn test_decode_nested_tree() {
        let expr = decode(&json!({
            "type": "logical",
            "operator": "and",
            "left": {
                "type": "comparison",
                "operator": "gt",
                "left": {"type": "const", "kind": "number", "value": "5"},
                "right": {"type": "const", "kind": "number", "value": "3"},
            },
            "right": {
                "type": "not",
                "expr": {"type": "const", "kind": "boolean", "value": "false"},
            },
        }))
        .unwrap();

        assert_eq!(
            expr,
            Expr::logical(
                "and",
                Expr::comparison(
                    "gt",
                    Expr::constant(ValueKind::Number, "5"),
                    Expr::constant(ValueKind::Number, "3"),
                ),
                Expr::negation(Expr::constant(ValueKind::Boolean, "false")),
            )
        );
    }

    #[test]
    fn test_decode_keeps_operator_token_verbatim() {
        // Operator validity is an evaluation concern, not a decode concern
        let expr = decode(&json!({
            "type": "comparison",
            "operator": "is",
            "left": {"type": "const", "kind": "number", "value": "1"},
            "right": {"type": "const", "kind": "number", "value": "1"},
        }))
        .unwrap();
        assert!(matches!(expr, Expr::Comparison { ref operator, .. } if operator == "is"));
    }

    #[test]
    fn test_decode_unknown_type() {
        let err = decode(&json!({"type": "ternary"})).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownExpressionType(ref t) if t == "ternary"
        ));
    }

    #[test]
    fn test_decode_missing_discriminator() {
        let err = decode(&json!({"kind": "number", "value": "5"})).unwrap_err();
        assert!(matches!(err, DecodeError::MissingDiscriminator));

        // A non-string discriminator is treated the same
        let err = decode(&json!({"type": 3})).unwrap_err();
        assert!(matches!(err, DecodeError::MissingDiscriminator));
    }

    #[test]
    fn test_decode_missing_field() {
        let err = decode(&json!({"type": "const", "kind": "number"})).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn test_decode_str_rejects_malformed_json() {
        assert!(matches!(
            decode_str("{not json").unwrap_err(),
            DecodeError::Json(_)
        ));
    }

    #[test]
    fn test_encode_discriminators_are_exact() {
        let wire = encode(&Expr::constant(ValueKind::Boolean, "true"));
        assert_eq!(wire["type"], "const");
        assert_eq!(wire["kind"], "boolean");

        let wire = encode(&Expr::variable("N1", "output", ValueKind::String));
        assert_eq!(wire["type"], "var");
        assert_eq!(wire["selector"]["nodeId"], "N1");

        let wire = encode(&Expr::negation(Expr::constant(ValueKind::Boolean, "true")));
        assert_eq!(wire["type"], "not");
        assert_eq!(wire["expr"]["type"], "const");
    }

    #[test]
    fn test_round_trip() {
        let tree = Expr::logical(
            "or",
            Expr::comparison(
                "lte",
                Expr::variable("N2", "certificate.daysLeft", ValueKind::Number),
                Expr::constant(ValueKind::Number, "30"),
            ),
            Expr::negation(Expr::comparison(
                "eq",
                Expr::variable("N1", "certificate.validity", ValueKind::Boolean),
                Expr::constant(ValueKind::Boolean, "true"),
            )),
        );
        assert_eq!(decode(&encode(&tree)).unwrap(), tree);
    }
}
