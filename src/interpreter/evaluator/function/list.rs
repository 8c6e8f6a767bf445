use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{core::Interpreter, function::builtin::BuiltinCall},
        value::{
            core::{Value, ValueKind},
            list::resolve_index,
        },
    },
    util::num::usize_to_f64,
};

/// Appends a copy of `value` to `list`.
pub fn append(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let list = call.list(0)?;
    list.push(call.arg(1).detached());
    Ok(Value::null())
}

/// Removes the element at `index` from `list` and returns it.
pub fn pop(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let list = call.list(0)?;
    let index = call.number(1)?;

    let index = resolve_index(index, list.len()).map_err(|message| {
                                                    call.fail(ErrorKind::IndexOutOfRange, message)
                                                })?;
    list.remove(index)
        .ok_or_else(|| call.fail(ErrorKind::IndexOutOfRange, "index is out of bounds"))
}

/// Appends copies of every element of `list_b` to `list_a`.
///
/// The elements are collected before anything is pushed, so extending a
/// list with itself doubles it once.
pub fn extend(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let target = call.list(0)?;
    let extra = call.list(1)?.elements().iter().map(Value::detached).collect();

    target.extend(extra);
    Ok(Value::null())
}

/// Reverses `list` in place.
pub fn reverse(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    call.list(0)?.reverse();
    Ok(Value::null())
}

/// Returns a reversed copy of `list`, leaving the argument untouched.
pub fn reversed(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let copy = call.list(0)?.deep_copy();
    copy.reverse();
    Ok(ValueKind::List(copy).into())
}

/// Removes every element of `list`.
pub fn clear(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    call.list(0)?.clear();
    Ok(Value::null())
}

/// The number of elements of a list, or characters of a string.
pub fn length(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let len = match &call.arg(0).kind {
        ValueKind::List(list) => list.len(),
        ValueKind::String(text) => text.chars().count(),
        _ => return Err(call.type_mismatch(0, "list or a string")),
    };
    Ok(Value::number(usize_to_f64(len)))
}
