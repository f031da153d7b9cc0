//! Binary operator kernels.
//!
//! Direct enum-based dispatch for binary operations on concrete values. The
//! type set is fixed (not user-extensible), so pattern matching is preferred
//! over trait objects for exhaustiveness checking.

use unev_ir::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op_for,
    modulo_by_zero, EvalResult,
};
use crate::Value;

/// Checked arithmetic operation with overflow handling.
///
/// Used for Add, Sub, Mul where the only error case is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division with zero guard.
#[inline]
fn checked_div<F>(is_zero: bool, op: F, op_name: &'static str) -> EvalResult
where
    F: FnOnce() -> Option<i64>,
{
    if is_zero {
        Err(division_by_zero())
    } else {
        op().map(Value::Int).ok_or_else(|| integer_overflow(op_name))
    }
}

/// Checked modulo with zero guard.
#[inline]
fn checked_mod<F>(is_zero: bool, op: F, op_name: &'static str) -> EvalResult
where
    F: FnOnce() -> Option<i64>,
{
    if is_zero {
        Err(modulo_by_zero())
    } else {
        op().map(Value::Int).ok_or_else(|| integer_overflow(op_name))
    }
}

/// Evaluate a binary operation using direct pattern matching.
///
/// Operand types must match; there are no implicit promotions. For trees that
/// went through the checked constructors the error paths here are dead, but
/// the kernel is also callable on raw values (and is what literal folding
/// uses), so every unsupported combination still reports a typed error.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_str_binary(a, b, op),
        _ if left.ty() == right.ty() => Err(invalid_binary_op_for(left.type_name(), op)),
        _ => Err(binary_type_mismatch(left.type_name(), right.type_name())),
    }
}

/// Binary operations on integers.
///
/// All arithmetic is checked: overflow is an error, never a wrap. Division
/// truncates toward zero and `%` keeps the sign of the dividend (the host
/// `i64` convention).
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(b == 0, || a.checked_div(b), "division"),
        BinaryOp::Mod => checked_mod(b == 0, || a.checked_rem(b), "remainder"),
    }
}

/// Binary operations on floats.
///
/// Native IEEE 754 semantics throughout; `x / 0.0` yields the host's own
/// result (infinity or NaN), it is not trapped. Remainder is not offered for
/// floats and is rejected at construction.
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div => Ok(Value::Float(a / b)),
        BinaryOp::Mod => Err(invalid_binary_op_for("float", op)),
    }
}

/// Binary operations on strings. `+` concatenates.
fn eval_str_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::string(format!("{a}{b}"))),
        _ => Err(invalid_binary_op_for("str", op)),
    }
}
