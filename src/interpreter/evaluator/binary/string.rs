use crate::{
    ast::BinaryOperator,
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::binary::core::Operation,
        value::core::{Value, ValueKind},
    },
    util::num::f64_to_usize_checked,
};

/// Applies an operator whose left operand is the string `left`.
///
/// `+` concatenates two strings, `*` repeats a string a whole number of
/// times, `==` and `!=` compare two strings.
///
/// # Errors
/// Returns an `IllegalOperation` error for any other combination, including
/// a negative or fractional repeat count, and for a repetition too long to
/// allocate.
pub fn apply(operation: &Operation<'_>, left: &str) -> Result<Value, Error> {
    if let Some(result) = operation.logic() {
        return Ok(result);
    }

    match (operation.op, &operation.right.kind) {
        (BinaryOperator::Add, ValueKind::String(right)) => {
            Ok(Value::string(format!("{left}{right}")))
        },
        (BinaryOperator::Mul, ValueKind::Number(count)) => {
            let count = f64_to_usize_checked(*count).map_err(|_| operation.illegal())?;
            repeat(operation, left, count).map(Value::string)
        },
        (BinaryOperator::Equal, ValueKind::String(right)) => Ok(Value::boolean(left == right)),
        (BinaryOperator::NotEqual, ValueKind::String(right)) => Ok(Value::boolean(left != right)),
        _ => Err(operation.illegal()),
    }
}

/// Repeats `text` `count` times, reserving the whole result up front so an
/// oversized repetition fails instead of aborting.
fn repeat(operation: &Operation<'_>, text: &str, count: usize) -> Result<String, Error> {
    let too_long =
        || operation.right_error(ErrorKind::IllegalOperation, "repeated string would be too long");

    if text.is_empty() {
        return Ok(String::new());
    }
    let len = text.len().checked_mul(count).ok_or_else(too_long)?;
    let mut out = String::new();
    out.try_reserve_exact(len).map_err(|_| too_long())?;
    for _ in 0..count {
        out.push_str(text);
    }
    Ok(out)
}
