// SPDX-License-Identifier: MIT

//! Typed errors for expression decoding and evaluation
//!
//! Decode failures are structural and kept separate from evaluation
//! failures; neither is logged or swallowed here, both propagate to the
//! caller untouched.

use thiserror::Error;

use super::ops::ComparisonOp;
use super::value::ValueKind;

/// Errors produced while evaluating a decoded expression tree
#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    /// Operand kind mismatch, or an accessor applied to the wrong kind
    #[error("type mismatch: expected {expected} operand, got {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// Operator defined for some kinds but not this one
    #[error("operator '{operator}' is not supported for {kind} operands")]
    UnsupportedOperation {
        operator: ComparisonOp,
        kind: ValueKind,
    },

    /// Boolean payload that is neither native nor "true"/"false"
    #[error("invalid boolean literal: '{0}'")]
    InvalidBooleanLiteral(String),

    /// Number payload that does not parse as a decimal float
    #[error("invalid number literal: '{0}'")]
    InvalidNumberLiteral(String),

    /// Operator token outside the defined set
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// Variable selector with a blank node id
    #[error("variable selector has an empty node id")]
    EmptySelectorId,

    /// Variable selector with a blank variable name
    #[error("variable selector has an empty variable name")]
    EmptySelectorName,

    /// Node id absent from the variable context
    #[error("node '{0}' not found in variable context")]
    NodeNotFound(String),

    /// Variable name absent under a present node id
    #[error("variable '{name}' not found under node '{node_id}'")]
    VariableNotFound { node_id: String, name: String },
}

/// Structural errors produced while decoding the wire format
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Node object without a 'type' field
    #[error("expression node is missing its 'type' discriminator")]
    MissingDiscriminator,

    /// 'type' value outside the known variant set
    #[error("unknown expression type: {0}")]
    UnknownExpressionType(String),

    /// Malformed JSON or a missing/invalid required field
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
