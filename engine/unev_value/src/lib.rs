//! Unev Value - runtime values and operator kernels.
//!
//! This crate provides:
//! - `Value`: the concrete values evaluation produces and environments store
//! - `EvalError` / `EvalErrorKind`: typed evaluation failures
//! - `evaluate_binary` / `evaluate_unary`: enum-dispatch operator kernels
//!
//! The kernels operate on values only; they know nothing about expression
//! trees or environments. Literal folding at construction time and the
//! evaluator both go through the same kernels, so eager and deferred
//! arithmetic cannot disagree.

pub mod errors;
mod operators;
mod unary_operators;
mod value;

pub use errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op_for,
    invalid_unary_op_for, modulo_by_zero, type_mismatch, undefined_variable, EvalError,
    EvalErrorKind, EvalResult,
};
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
pub use value::Value;
