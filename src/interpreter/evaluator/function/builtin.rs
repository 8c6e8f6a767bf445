use std::rc::Rc;

use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{
            context::Context,
            core::Interpreter,
            environment::Env,
            function::{console, convert, core::check_arity, file, list, module},
        },
        position::Span,
        value::{core::Value, list::List},
    },
};

/// Type alias for builtin function handlers.
///
/// A handler receives the interpreter, for host access and nested runs, and
/// the call with its already arity-checked arguments.
type BuiltinFn = fn(&mut Interpreter<'_>, &BuiltinCall<'_>) -> Result<Value, Error>;

/// Defines the built-in functions.
///
/// Each entry provides:
/// - the enum variant,
/// - the name the function is bound to in the prelude,
/// - its parameter names, which fix its arity,
/// - the function implementing it.
///
/// The macro produces the [`Builtin`] enum with its lookup table and
/// accessors.
macro_rules! builtin_functions {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => {
                name: $name:literal,
                params: [$($param:literal),* $(,)?],
                func: $func:path $(,)?
            }
        ),* $(,)?
    ) => {
        /// A function provided by the interpreter.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Builtin {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl Builtin {
            /// Every built-in, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The name the built-in is bound to.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// The parameter names, used for arity checks and type errors.
            #[must_use]
            pub const fn params(self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($param),*],)*
                }
            }

            const fn handler(self) -> BuiltinFn {
                match self {
                    $(Self::$variant => $func,)*
                }
            }
        }
    };
}

builtin_functions! {
    /// Prints a value.
    Bark       => { name: "bark",       params: ["value"],              func: console::bark },
    /// Reads a line.
    Chew       => { name: "chew",       params: [],                     func: console::chew },
    /// Reads a line holding an integer.
    ChewNum    => { name: "chewnum",    params: [],                     func: console::chew_num },
    /// Tests for a number.
    IsNumber   => { name: "isnumber",   params: ["value"],              func: convert::is_number },
    /// Tests for a string.
    IsString   => { name: "isstring",   params: ["value"],              func: convert::is_string },
    /// Tests for a list.
    IsList     => { name: "islist",     params: ["value"],              func: convert::is_list },
    /// Tests for a user-defined or built-in function.
    IsFunction => { name: "isfunction", params: ["value"],              func: convert::is_function },
    /// Names the type of a value.
    Type       => { name: "type",       params: ["value"],              func: convert::type_of },
    /// Converts to a string.
    ToString   => { name: "tostring",   params: ["value"],              func: convert::to_string },
    /// Converts to a number.
    ToNumber   => { name: "tonumber",   params: ["value"],              func: convert::to_number },
    /// Appends to a list in place.
    Append     => { name: "append",     params: ["list", "value"],      func: list::append },
    /// Removes an element from a list in place.
    Pop        => { name: "pop",        params: ["list", "index"],      func: list::pop },
    /// Appends every element of a list to another in place.
    Extend     => { name: "extend",     params: ["list_a", "list_b"],   func: list::extend },
    /// Reverses a list in place.
    Reverse    => { name: "reverse",    params: ["list"],               func: list::reverse },
    /// Returns a reversed copy of a list.
    Reversed   => { name: "reversed",   params: ["list"],               func: list::reversed },
    /// Empties a list in place.
    Clear      => { name: "clear",      params: ["list"],               func: list::clear },
    /// Length of a list or string.
    Length     => { name: "length",     params: ["obj"],                func: list::length },
    /// Reads a file.
    Dig        => { name: "dig",        params: ["path"],               func: file::dig },
    /// Writes a file.
    Bury       => { name: "bury",       params: ["path", "content"],    func: file::bury },
    /// Raises a user error.
    Uhoh       => { name: "uhoh",       params: ["message"],            func: uhoh },
    /// Imports symbols from a module.
    Fetch      => { name: "fetch",      params: ["symbols", "path"],    func: module::fetch },
    /// Runs another program.
    Run        => { name: "run",        params: ["path"],               func: file::run },
}

/// A call to a built-in, with its arguments and surroundings.
pub struct BuiltinCall<'a> {
    /// The called built-in.
    pub builtin: Builtin,
    /// The arguments, as handles to the caller's values.
    pub args:    &'a [Value],
    /// The call expression.
    pub span:    &'a Span,
    /// The caller's environment.
    pub env:     &'a Env,
    /// The built-in's own frame.
    pub context: &'a Rc<Context>,
}

impl BuiltinCall<'_> {
    /// Returns the argument at `index`.
    ///
    /// Arity is checked before any handler runs, so every declared
    /// parameter has an argument.
    #[must_use]
    pub fn arg(&self, index: usize) -> &Value {
        &self.args[index]
    }

    /// An error of `kind` raised by this call.
    #[must_use]
    pub fn fail(&self, kind: ErrorKind, message: impl Into<String>) -> Error {
        Error::runtime(kind, message, self.span.clone(), self.context)
    }

    /// A `TypeMismatch` error naming the parameter at `index`.
    #[must_use]
    pub fn type_mismatch(&self, index: usize, expected: &str) -> Error {
        let value = self.arg(index);
        let param = self.builtin.params().get(index).copied().unwrap_or("argument");
        let span = value.span.as_ref().unwrap_or(self.span);

        Error::runtime(ErrorKind::TypeMismatch,
                       format!("'{param}' must be a {expected}, not a {}", value.type_name()),
                       span.clone(),
                       self.context)
    }

    /// The argument at `index` as a number.
    pub fn number(&self, index: usize) -> Result<f64, Error> {
        self.arg(index).as_number().ok_or_else(|| self.type_mismatch(index, "number"))
    }

    /// The argument at `index` as a string.
    pub fn string(&self, index: usize) -> Result<&str, Error> {
        self.arg(index).as_str().ok_or_else(|| self.type_mismatch(index, "string"))
    }

    /// The argument at `index` as a list handle.
    pub fn list(&self, index: usize) -> Result<&List, Error> {
        self.arg(index).as_list().ok_or_else(|| self.type_mismatch(index, "list"))
    }
}

impl Interpreter<'_> {
    /// Calls a built-in.
    ///
    /// Built-ins get a frame of their own, like user functions, so errors
    /// they raise show up in the traceback under their name.
    pub(crate) fn call_builtin(&mut self,
                               builtin: Builtin,
                               args: &[Value],
                               span: &Span,
                               env: &Env,
                               context: &Rc<Context>)
                               -> Result<Value, Error> {
        let frame = Context::enter(context, builtin.name(), span.clone());
        check_arity(builtin.name(), builtin.params().len(), args, span, &frame)?;

        let call = BuiltinCall { builtin,
                                 args,
                                 span,
                                 env,
                                 context: &frame };
        (builtin.handler())(self, &call)
    }
}

/// Fails with a `UserError` carrying the text of `message`.
fn uhoh(_: &mut Interpreter<'_>, call: &BuiltinCall<'_>) -> Result<Value, Error> {
    Err(call.fail(ErrorKind::UserError, call.arg(0).to_string()))
}
