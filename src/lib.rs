// SPDX-License-Identifier: MIT

//! certflow-rs - condition rules for certificate workflows
//!
//! The crate centers on a small, strongly-typed expression engine used to
//! decide workflow branches (for example "certificate validity == true and
//! daysLeft == 2"). Rules arrive as tagged JSON trees, are decoded into an
//! immutable AST and evaluated against a context of values produced by
//! other workflow nodes.

pub mod certflow;
