use std::io;

use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{
            context::Context,
            core::Interpreter,
            environment::Environment,
            function::{builtin::BuiltinCall, console::io_failure},
        },
        value::core::Value,
    },
};

/// Reads `path` through the host.
///
/// A missing file is reported as `missing`, so `dig` and `fetch` can name
/// the failure differently. Every other failure is an `Io` error.
pub(super) fn read_source(interpreter: &mut Interpreter<'_>,
                          call: &BuiltinCall<'_>,
                          path: &str,
                          missing: ErrorKind)
                          -> Result<String, Error> {
    interpreter.host.read_file(path).map_err(|error| {
                                        if error.kind() == io::ErrorKind::NotFound {
                                            tracing::warn!(path, "file not found");
                                            call.fail(missing, format!("'{path}' does not exist"))
                                        } else {
                                            io_failure(call, &error)
                                        }
                                    })
}

/// Returns the contents of the file at `path`.
pub fn dig(interpreter: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let path = call.string(0)?;
    let text = read_source(interpreter, call, path, ErrorKind::FileNotFound)?;
    Ok(Value::string(text))
}

/// Replaces the file at `path` with the display form of `content`.
pub fn bury(interpreter: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let path = call.string(0)?;
    interpreter.host
               .write_file(path, &call.arg(1).to_string())
               .map_err(|error| io_failure(call, &error))?;
    Ok(Value::null())
}

/// Runs the program in the file at `path`.
///
/// The program gets a fresh root environment, so it neither sees nor
/// changes the caller's variables. Its errors propagate to the caller.
pub fn run(interpreter: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let path = call.string(0)?;
    let text = read_source(interpreter, call, path, ErrorKind::FileNotFound)?;

    let frame = Context::enter(call.context, format!("<program {path}>"), call.span.clone());
    interpreter.execute_source(path, &text, &Environment::root(), &frame)?;
    Ok(Value::null())
}
