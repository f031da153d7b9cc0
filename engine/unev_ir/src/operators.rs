//! Binary and unary operators.
//!
//! All operator kinds used in expressions, plus the single type table that
//! decides which operand types each operator accepts. Construction checks and
//! the evaluation kernels both consult this table, so an expression that was
//! accepted at construction cannot hit an unsupported-operator error later.

use crate::ty::Ty;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used by the formatter and in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// The result type of applying this operator to two operands, or `None`
    /// if the combination is unsupported.
    ///
    /// Both operands must share a type; there are no implicit promotions.
    /// The result type always equals the operand type:
    /// - `+` works on int, float, and str (concatenation)
    /// - `-` `*` `/` work on int and float
    /// - `%` works on int only (float remainder is not offered)
    pub fn result_ty(self, left: Ty, right: Ty) -> Option<Ty> {
        if left != right {
            return None;
        }
        let ok = match self {
            Self::Add => matches!(left, Ty::Int | Ty::Float | Ty::Str),
            Self::Sub | Self::Mul | Self::Div => matches!(left, Ty::Int | Ty::Float),
            Self::Mod => matches!(left, Ty::Int),
        };
        ok.then_some(left)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Unary plus. Identity-like, but still goes through the value's own
    /// unary-plus operation at evaluation time.
    Plus,
    /// Arithmetic negation.
    Neg,
    /// Bitwise not.
    BitNot,
}

impl UnaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::BitNot => "~",
        }
    }

    /// The result type of applying this operator, or `None` if the operand
    /// type does not support it. The result type always equals the operand
    /// type.
    pub fn result_ty(self, operand: Ty) -> Option<Ty> {
        let ok = match self {
            Self::Plus | Self::Neg => matches!(operand, Ty::Int | Ty::Float),
            Self::BitNot => matches!(operand, Ty::Int),
        };
        ok.then_some(operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn symbols() {
        assert_eq!(BinaryOp::Mod.as_symbol(), "%");
        assert_eq!(UnaryOp::BitNot.as_symbol(), "~");
    }

    #[test]
    fn mixed_operand_types_are_rejected() {
        assert_eq!(BinaryOp::Add.result_ty(Ty::Int, Ty::Float), None);
    }

    #[test]
    fn string_concatenation_is_add_only() {
        assert_eq!(BinaryOp::Add.result_ty(Ty::Str, Ty::Str), Some(Ty::Str));
        assert_eq!(BinaryOp::Sub.result_ty(Ty::Str, Ty::Str), None);
    }

    #[test]
    fn modulus_is_integer_only() {
        assert_eq!(BinaryOp::Mod.result_ty(Ty::Int, Ty::Int), Some(Ty::Int));
        assert_eq!(BinaryOp::Mod.result_ty(Ty::Float, Ty::Float), None);
    }

    #[test]
    fn bitnot_is_integer_only() {
        assert_eq!(UnaryOp::BitNot.result_ty(Ty::Int), Some(Ty::Int));
        assert_eq!(UnaryOp::BitNot.result_ty(Ty::Float), None);
    }

    #[test]
    fn booleans_support_no_arithmetic() {
        assert_eq!(BinaryOp::Add.result_ty(Ty::Bool, Ty::Bool), None);
        assert_eq!(UnaryOp::Neg.result_ty(Ty::Bool), None);
    }

    #[test]
    fn result_type_equals_operand_type() {
        assert_eq!(UnaryOp::Neg.result_ty(Ty::Float), Some(Ty::Float));
        assert_eq!(BinaryOp::Div.result_ty(Ty::Int, Ty::Int), Some(Ty::Int));
    }
}
