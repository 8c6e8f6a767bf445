use crate::{
    ast::BinaryOperator,
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::binary::core::Operation,
        value::{
            core::{Value, ValueKind},
            list::{List, resolve_index},
        },
    },
};

/// Applies an operator whose left operand is the list `left`.
///
/// | Operator | Right operand | Result |
/// |---|---|---|
/// | `+` | list | a copy of `left` followed by copies of the right elements |
/// | `-` | number | a copy of `left` without the element at that index |
/// | `*` | anything | a copy of `left` with a copy of the value appended |
/// | `^` | number | the element at that index |
/// | `==`, `!=` | list | deep element-wise comparison |
///
/// `left` itself is never modified.
///
/// # Errors
/// Returns an `IndexOutOfRange` error pointing at the index for `-` and `^`,
/// and an `IllegalOperation` error for unsupported combinations.
pub fn apply(operation: &Operation<'_>, left: &List) -> Result<Value, Error> {
    if let Some(result) = operation.logic() {
        return Ok(result);
    }

    match (operation.op, &operation.right.kind) {
        (BinaryOperator::Add, ValueKind::List(right)) => {
            let joined = left.deep_copy();
            joined.extend(right.elements().iter().map(Value::detached).collect());
            Ok(ValueKind::List(joined).into())
        },
        (BinaryOperator::Sub, ValueKind::Number(index)) => {
            let remaining = left.deep_copy();
            let index = index_into(operation, *index, &remaining)?;
            remaining.remove(index);
            Ok(ValueKind::List(remaining).into())
        },
        (BinaryOperator::Mul, _) => {
            let grown = left.deep_copy();
            grown.push(operation.right.detached());
            Ok(ValueKind::List(grown).into())
        },
        (BinaryOperator::Pow, ValueKind::Number(index)) => {
            let index = index_into(operation, *index, left)?;
            left.get(index).ok_or_else(|| {
                                operation.right_error(ErrorKind::IndexOutOfRange,
                                                      "index is out of bounds")
                            })
        },
        (BinaryOperator::Equal, ValueKind::List(right)) => Ok(Value::boolean(left.deep_eq(right))),
        (BinaryOperator::NotEqual, ValueKind::List(right)) => {
            Ok(Value::boolean(!left.deep_eq(right)))
        },
        _ => Err(operation.illegal()),
    }
}

fn index_into(operation: &Operation<'_>, index: f64, list: &List) -> Result<usize, Error> {
    resolve_index(index, list.len()).map_err(|message| {
                                        operation.right_error(ErrorKind::IndexOutOfRange, message)
                                    })
}
