use std::io;

use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{core::Interpreter, function::builtin::BuiltinCall},
        value::core::Value,
    },
    util::num::i64_to_f64_checked,
};

/// Turns a failed console read or write into an `Io` error for the call.
pub(super) fn io_failure(call: &BuiltinCall<'_>, error: &io::Error) -> Error {
    tracing::warn!(builtin = call.builtin.name(), %error, "host I/O failed");
    call.fail(ErrorKind::Io, error.to_string())
}

/// Writes the display form of `value` and a new line.
pub fn bark(interpreter: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    interpreter.host
               .write_line(&call.arg(0).to_string())
               .map_err(|error| io_failure(call, &error))?;
    Ok(Value::null())
}

/// Reads one line of input as a string.
pub fn chew(interpreter: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let line = interpreter.host.read_line().map_err(|error| io_failure(call, &error))?;
    Ok(Value::string(line))
}

/// Reads one line of input as an integer.
///
/// Surrounding whitespace is ignored. Anything else that is not an integer,
/// including `2.5`, is rejected.
pub fn chew_num(interpreter: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let line = interpreter.host.read_line().map_err(|error| io_failure(call, &error))?;
    let invalid = || {
        call.fail(ErrorKind::InvalidInput,
                  format!("'{}' is not an integer", line.trim()))
    };

    let parsed = line.trim().parse::<i64>().map_err(|_| invalid())?;
    Ok(Value::number(i64_to_f64_checked(parsed, ()).map_err(|()| invalid())?))
}
