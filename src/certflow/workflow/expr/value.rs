// SPDX-License-Identifier: MIT

//! Typed runtime values for expression evaluation
//!
//! Every value flowing through the engine is an [`EvalResult`] carrying a
//! [`ValueKind`] tag next to its raw payload. Numbers are kept in their
//! decimal string form and parsed to `f64` only when a comparison needs
//! them, so no float coercion happens before operator time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::EvalError;

/// The three value kinds the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    String,
    Boolean,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Number => write!(f, "number"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// Raw payload of an [`EvalResult`]
///
/// Context values may arrive as native booleans or as literal text; both
/// shapes are preserved here and normalized by the accessors.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Literal text: a decimal number, a verbatim string or `"true"`/`"false"`
    Text(String),
    /// A native boolean
    Bool(bool),
}

/// A typed value produced by evaluating an expression node
///
/// Results are never mutated; every leaf evaluation and operator
/// application constructs a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalResult {
    pub kind: ValueKind,
    pub value: RawValue,
}

impl EvalResult {
    pub fn new(kind: ValueKind, value: RawValue) -> Self {
        Self { kind, value }
    }

    /// Create a Boolean result from a native bool
    pub fn boolean(value: bool) -> Self {
        Self {
            kind: ValueKind::Boolean,
            value: RawValue::Bool(value),
        }
    }

    /// Wrap an untyped context value under a declared kind
    ///
    /// The kind comes from the variable selector, not from the stored
    /// value; an annotation mismatch surfaces later, when an operator
    /// tries to read the payload.
    pub fn from_json(kind: ValueKind, value: &Value) -> Self {
        let raw = match value {
            Value::Bool(b) => RawValue::Bool(*b),
            Value::String(s) => RawValue::Text(s.clone()),
            other => RawValue::Text(other.to_string()),
        };
        Self { kind, value: raw }
    }

    /// Extract a float, requiring kind Number
    pub fn as_number(&self) -> Result<f64, EvalError> {
        if self.kind != ValueKind::Number {
            return Err(EvalError::TypeMismatch {
                expected: ValueKind::Number,
                actual: self.kind,
            });
        }
        match &self.value {
            RawValue::Text(s) => s
                .parse::<f64>()
                .map_err(|_| EvalError::InvalidNumberLiteral(s.clone())),
            RawValue::Bool(b) => Err(EvalError::InvalidNumberLiteral(b.to_string())),
        }
    }

    /// Extract a native bool, requiring kind Boolean
    ///
    /// Accepts a native boolean or the exact literals `"true"`/`"false"`
    /// (case-sensitive).
    pub fn as_boolean(&self) -> Result<bool, EvalError> {
        if self.kind != ValueKind::Boolean {
            return Err(EvalError::TypeMismatch {
                expected: ValueKind::Boolean,
                actual: self.kind,
            });
        }
        match &self.value {
            RawValue::Bool(b) => Ok(*b),
            RawValue::Text(s) => match s.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(EvalError::InvalidBooleanLiteral(other.to_string())),
            },
        }
    }

    /// Borrow the verbatim text, requiring kind String
    pub fn as_text(&self) -> Result<&str, EvalError> {
        if self.kind != ValueKind::String {
            return Err(EvalError::TypeMismatch {
                expected: ValueKind::String,
                actual: self.kind,
            });
        }
        match &self.value {
            RawValue::Text(s) => Ok(s),
            RawValue::Bool(_) => Err(EvalError::TypeMismatch {
                expected: ValueKind::String,
                actual: ValueKind::Boolean,
            }),
        }
    }
}
