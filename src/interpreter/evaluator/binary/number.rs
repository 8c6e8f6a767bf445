use crate::{
    ast::BinaryOperator,
    error::{Error, ErrorKind},
    interpreter::{evaluator::binary::core::Operation, value::core::Value},
};

/// Applies an operator whose left operand is the number `left`.
///
/// Arithmetic and comparisons need a number on the right. `^` is
/// exponentiation, so `2 ^ 0.5` is a square root.
///
/// # Errors
/// Returns a `DivisionByZero` error pointing at the divisor for `x / 0`, and
/// an `IllegalOperation` error for a right operand of another type.
pub fn apply(operation: &Operation<'_>, left: f64) -> Result<Value, Error> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow, Sub,
    };

    if let Some(result) = operation.logic() {
        return Ok(result);
    }
    let Some(right) = operation.right.as_number() else {
        return Err(operation.illegal());
    };

    let result = match operation.op {
        Add => Value::number(left + right),
        Sub => Value::number(left - right),
        Mul => Value::number(left * right),
        Div => {
            if right == 0.0 {
                return Err(operation.right_error(ErrorKind::DivisionByZero, "division by zero"));
            }
            Value::number(left / right)
        },
        Pow => Value::number(left.powf(right)),
        Equal => Value::boolean(left == right),
        NotEqual => Value::boolean(left != right),
        Less => Value::boolean(left < right),
        Greater => Value::boolean(left > right),
        LessEqual => Value::boolean(left <= right),
        GreaterEqual => Value::boolean(left >= right),
        And | Or => return Err(operation.illegal()),
    };

    Ok(result)
}
