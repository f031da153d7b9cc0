//! Unev Eval - environments and the evaluator.
//!
//! This crate provides the two environment flavors and the `evaluate`
//! function:
//! - `Environment`: ordered, persistent name/value bindings resolved at
//!   evaluation time (the dynamic flavor)
//! - `typed`: a type-level environment whose lookups are resolved while the
//!   program type-checks (the static flavor), bridgeable into the dynamic
//!   one via `IntoEnvironment`
//! - `evaluate`: a pure recursive walk resolving variables against an
//!   `Environment`
//!
//! # Re-exports
//!
//! Value and error types from `unev_value`, and the construction surface
//! from `unev_expr`, are re-exported so most callers need only this crate.

mod environment;
mod eval;
pub mod typed;

pub use environment::{Binding, Environment};
pub use eval::evaluate;
pub use typed::{IntoEnvironment, StaticEnv};

// Re-export value types and error constructors
pub use unev_value::{
    division_by_zero, integer_overflow, modulo_by_zero, type_mismatch, undefined_variable,
    EvalError, EvalErrorKind, EvalResult, Value,
};

// Re-export the construction surface
pub use unev_expr::{try_binary, try_unary, var, var_of, ConstructError, Expr, Literal};
pub use unev_ir::{BinaryOp, Name, Ty, UnaryOp};
