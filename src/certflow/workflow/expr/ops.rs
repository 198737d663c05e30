//! Comparison and logical operators over typed values
//!
//! All functions are pure: they read two (or one) [`EvalResult`]s and
//! build a fresh Boolean result or fail with a typed error.

use std::str::FromStr;

use super::error::EvalError;
use super::value::{EvalResult, ValueKind};

/// Comparison operators, resolved from their wire tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
    Neq,
}

impl FromStr for ComparisonOp {
    type Err = EvalError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "gt" => Ok(ComparisonOp::Gt),
            "gte" => Ok(ComparisonOp::Gte),
            "lt" => Ok(ComparisonOp::Lt),
            "lte" => Ok(ComparisonOp::Lte),
            "eq" => Ok(ComparisonOp::Eq),
            "neq" => Ok(ComparisonOp::Neq),
            other => Err(EvalError::UnknownOperator(other.to_string())),
        }
    }
}

impl std::fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparisonOp::Gt => write!(f, "gt"),
            ComparisonOp::Gte => write!(f, "gte"),
            ComparisonOp::Lt => write!(f, "lt"),
            ComparisonOp::Lte => write!(f, "lte"),
            ComparisonOp::Eq => write!(f, "eq"),
            ComparisonOp::Neq => write!(f, "neq"),
        }
    }
}

/// Logical operators, resolved from their wire tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl FromStr for LogicalOp {
    type Err = EvalError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "and" => Ok(LogicalOp::And),
            "or" => Ok(LogicalOp::Or),
            other => Err(EvalError::UnknownOperator(other.to_string())),
        }
    }
}

/// Apply a comparison operator to two typed values
///
/// Operands must share a kind. Strings compare lexicographically by
/// bytes, numbers by exact IEEE-754 comparison; booleans support only
/// `eq`/`neq`.
pub fn compare(
    op: ComparisonOp,
    left: &EvalResult,
    right: &EvalResult,
) -> Result<EvalResult, EvalError> {
    if left.kind != right.kind {
        return Err(EvalError::TypeMismatch {
            expected: left.kind,
            actual: right.kind,
        });
    }

    let outcome = match left.kind {
        ValueKind::String => compare_text(op, left.as_text()?, right.as_text()?),
        ValueKind::Number => compare_numbers(op, left.as_number()?, right.as_number()?),
        ValueKind::Boolean => compare_booleans(op, left.as_boolean()?, right.as_boolean()?)?,
    };
    Ok(EvalResult::boolean(outcome))
}

fn compare_text(op: ComparisonOp, left: &str, right: &str) -> bool {
    match op {
        ComparisonOp::Gt => left > right,
        ComparisonOp::Gte => left >= right,
        ComparisonOp::Lt => left < right,
        ComparisonOp::Lte => left <= right,
        ComparisonOp::Eq => left == right,
        ComparisonOp::Neq => left != right,
    }
}

fn compare_numbers(op: ComparisonOp, left: f64, right: f64) -> bool {
    match op {
        ComparisonOp::Gt => left > right,
        ComparisonOp::Gte => left >= right,
        ComparisonOp::Lt => left < right,
        ComparisonOp::Lte => left <= right,
        ComparisonOp::Eq => left == right,
        ComparisonOp::Neq => left != right,
    }
}

fn compare_booleans(op: ComparisonOp, left: bool, right: bool) -> Result<bool, EvalError> {
    match op {
        ComparisonOp::Eq => Ok(left == right),
        ComparisonOp::Neq => Ok(left != right),
        other => Err(EvalError::UnsupportedOperation {
            operator: other,
            kind: ValueKind::Boolean,
        }),
    }
}

/// Apply `and`/`or` to two Boolean values
pub fn logical(
    op: LogicalOp,
    left: &EvalResult,
    right: &EvalResult,
) -> Result<EvalResult, EvalError> {
    let left = left.as_boolean()?;
    let right = right.as_boolean()?;
    let outcome = match op {
        LogicalOp::And => left && right,
        LogicalOp::Or => left || right,
    };
    Ok(EvalResult::boolean(outcome))
}

/// Negate a Boolean value
pub fn negate(operand: &EvalResult) -> Result<EvalResult, EvalError> {
    Ok(EvalResult::boolean(!operand.as_boolean()?))
}
