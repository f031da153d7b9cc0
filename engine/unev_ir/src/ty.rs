//! Runtime type tags.
//!
//! Every expression node has a statically determined result type; `Ty` is the
//! tag that construction checks and evaluation-time mismatch reporting agree
//! on. The set is closed: operators are not user-extensible.

use std::fmt;

/// Type tag for values and expression results.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Ty {
    /// 64-bit signed integer. The default type of a variable.
    Int,
    /// 64-bit float.
    Float,
    /// Boolean.
    Bool,
    /// String.
    Str,
    /// Fixed-size tuple of further values.
    Tuple,
}

impl Ty {
    /// Human-readable type name for error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Ty::Int => "int",
            Ty::Float => "float",
            Ty::Bool => "bool",
            Ty::Str => "str",
            Ty::Tuple => "tuple",
        }
    }
}

impl Default for Ty {
    /// Variables declared without an explicit type are integers.
    fn default() -> Self {
        Ty::Int
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
