//! Condition expression evaluator
//!
//! A stateless recursive descent over the decoded tree. The first error
//! aborts the whole walk; there is no retry and no default substitution.

use super::ast::{Expr, VariableSelector};
use super::error::EvalError;
use super::ops::{self, ComparisonOp, LogicalOp};
use super::value::{EvalResult, RawValue};
use crate::certflow::workflow::context::VariableContext;

/// Evaluate a condition expression against a variable context
pub fn evaluate(expr: &Expr, context: &VariableContext) -> Result<EvalResult, EvalError> {
    match expr {
        Expr::Constant { kind, value } => {
            Ok(EvalResult::new(*kind, RawValue::Text(value.clone())))
        }
        Expr::Variable { selector } => resolve_variable(selector, context),
        Expr::Comparison {
            operator,
            left,
            right,
        } => {
            // Left first; a failing left leaves the right untouched
            let lhs = evaluate(left, context)?;
            let rhs = evaluate(right, context)?;
            let op: ComparisonOp = operator.parse()?;
            ops::compare(op, &lhs, &rhs)
        }
        Expr::Logical {
            operator,
            left,
            right,
        } => {
            // Both operands always evaluate on the success path; there is
            // no short-circuit on the left operand's value
            let lhs = evaluate(left, context)?;
            let rhs = evaluate(right, context)?;
            let op: LogicalOp = operator.parse()?;
            ops::logical(op, &lhs, &rhs)
        }
        Expr::Not { operand } => ops::negate(&evaluate(operand, context)?),
    }
}

fn resolve_variable(
    selector: &VariableSelector,
    context: &VariableContext,
) -> Result<EvalResult, EvalError> {
    if selector.node_id.is_empty() {
        return Err(EvalError::EmptySelectorId);
    }
    if selector.name.is_empty() {
        return Err(EvalError::EmptySelectorName);
    }

    let node = context
        .node(&selector.node_id)
        .ok_or_else(|| EvalError::NodeNotFound(selector.node_id.clone()))?;
    let raw = node.get(&selector.name).ok_or_else(|| EvalError::VariableNotFound {
        node_id: selector.node_id.clone(),
        name: selector.name.clone(),
    })?;

    // The declared kind is trusted here; a wrong annotation surfaces when
    // an operator reads the payload
    Ok(EvalResult::from_json(selector.kind, raw))
}
