use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{
            context::Context,
            core::Interpreter,
            environment::Environment,
            function::{builtin::BuiltinCall, file::read_source},
        },
        value::core::Value,
    },
};

/// The symbol name that imports every top-level binding of a module.
pub const IMPORT_ALL: &str = "*all";

/// Imports bindings from the module at `path` into the caller's
/// environment.
///
/// The module runs in a fresh root environment. Afterwards either every
/// binding it created (for `["*all"]`) or each named one is copied into the
/// caller's frame. Functions keep the module's environment, so they still
/// see the module's other bindings.
///
/// # Errors
/// - `TypeMismatch` if `symbols` is not a list of strings.
/// - `ModuleNotFound` if the file does not exist.
/// - Any lexical, syntax or runtime error of the module itself.
/// - `SymbolNotFound` for a named symbol the module does not define.
pub fn fetch(interpreter: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    let symbols = call.list(0)?
                      .elements()
                      .iter()
                      .map(|symbol| symbol.as_str().map(str::to_owned))
                      .collect::<Option<Vec<String>>>()
                      .ok_or_else(|| call.type_mismatch(0, "list of strings"))?;
    let path = call.string(1)?;

    let text = read_source(interpreter, call, path, ErrorKind::ModuleNotFound)?;
    tracing::debug!(module = path, ?symbols, "importing");

    let module_env = Environment::root();
    let frame = Context::enter(call.context, format!("<module {path}>"), call.span.clone());
    interpreter.execute_source(path, &text, &module_env, &frame)?;

    let module = module_env.borrow();
    let mut caller = call.env.borrow_mut();

    if symbols.len() == 1 && symbols[0] == IMPORT_ALL {
        for (name, value) in module.locals() {
            caller.set(name.as_str(), value.detached());
        }
        return Ok(Value::null());
    }

    for name in &symbols {
        let value = module.local(name).ok_or_else(|| {
                                          call.fail(ErrorKind::SymbolNotFound,
                                                    format!("'{name}' is not defined in module \
                                                             '{path}'"))
                                      })?;
        caller.set(name.as_str(), value.detached());
    }

    Ok(Value::null())
}
