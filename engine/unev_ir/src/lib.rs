//! Unev IR - core data types for the unev expression engine.
//!
//! This crate contains the leaf data types shared by every other crate:
//! - `Name` for variable identifiers
//! - `Ty` runtime type tags
//! - `UnaryOp` / `BinaryOp` operator kinds and their type table
//!
//! It deliberately knows nothing about expression trees, values, or
//! environments; those live in the crates above it.

mod name;
mod operators;
mod ty;

pub use name::Name;
pub use operators::{BinaryOp, UnaryOp};
pub use ty::Ty;
