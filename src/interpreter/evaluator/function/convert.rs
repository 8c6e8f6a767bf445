use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{core::Interpreter, function::builtin::BuiltinCall},
        value::core::{Value, ValueKind},
    },
};

/// `1` if the argument is a number.
pub fn is_number(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    Ok(Value::boolean(matches!(call.arg(0).kind, ValueKind::Number(_))))
}

/// `1` if the argument is a string.
pub fn is_string(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    Ok(Value::boolean(matches!(call.arg(0).kind, ValueKind::String(_))))
}

/// `1` if the argument is a list.
pub fn is_list(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    Ok(Value::boolean(matches!(call.arg(0).kind, ValueKind::List(_))))
}

/// `1` if the argument can be called.
pub fn is_function(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    Ok(Value::boolean(matches!(call.arg(0).kind,
                               ValueKind::Function(_) | ValueKind::Builtin(_))))
}

/// The type name of the argument, such as `"list"`.
pub fn type_of(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    Ok(Value::string(call.arg(0).type_name()))
}

/// The display form of the argument, as `bark` would print it.
pub fn to_string(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    Ok(Value::string(call.arg(0).to_string()))
}

/// Parses a string as a number. Numbers pass through unchanged.
///
/// Only finite decimal numbers are accepted, so `"inf"` and `"NaN"` are
/// rejected like any other non-number.
pub fn to_number(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let value = call.arg(0);

    match &value.kind {
        ValueKind::Number(n) => Ok(Value::number(*n)),
        ValueKind::String(text) => {
            text.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Value::number)
                .ok_or_else(|| {
                    call.fail(ErrorKind::InvalidInput,
                              format!("'{text}' cannot be converted to a number"))
                })
        },
        _ => Err(call.type_mismatch(0, "number or a string")),
    }
}
