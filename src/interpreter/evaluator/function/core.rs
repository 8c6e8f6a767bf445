use std::rc::Rc;

use crate::{
    ast::Node,
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{
            context::Context,
            core::Interpreter,
            environment::{Env, Environment},
            signal::{Interrupt, RuntimeSignal},
        },
        position::Span,
        value::{
            core::{Value, ValueKind},
            function::UserFunction,
        },
    },
};

/// Checks that a call passes exactly `expected` arguments.
///
/// Functions have a fixed arity; there are no optional or variadic
/// parameters.
///
/// # Errors
/// Returns an `ArityMismatch` error at the call site.
///
/// # Example
/// ```
/// use glang::interpreter::{
///     evaluator::{context::Context, function::core::check_arity},
///     lexer::tokenize,
///     value::core::Value,
/// };
///
/// let (tokens, _) = tokenize("<test>", "add(1)");
/// let context = Context::root("<program>");
/// let error = check_arity("add", 2, &[Value::number(1.0)], &tokens[0].span, &context).unwrap_err();
///
/// assert_eq!(error.message,
///            "'add' takes 2 positional argument(s) but the program gave 1");
/// ```
pub fn check_arity(name: &str,
                   expected: usize,
                   args: &[Value],
                   span: &Span,
                   context: &Rc<Context>)
                   -> Result<(), Error> {
    if args.len() == expected {
        return Ok(());
    }
    Err(Error::runtime(ErrorKind::ArityMismatch,
                       format!("'{name}' takes {expected} positional argument(s) but the program \
                                gave {}",
                               args.len()),
                       span.clone(),
                       context))
}

impl Interpreter<'_> {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then every argument from left to right,
    /// stopping at the first failure. The result is bound to the call span
    /// and the caller's frame.
    pub(crate) fn eval_call(&mut self,
                            callee: &Node,
                            args: &[Node],
                            span: &Span,
                            env: &Env,
                            context: &Rc<Context>)
                            -> RuntimeSignal {
        let target = self.evaluate(callee, env, context)?;

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.evaluate(arg, env, context)?);
        }

        let result = match &target.kind {
            ValueKind::Function(function) => self.call_user(function, &values, span, context)?,
            ValueKind::Builtin(builtin) => {
                self.call_builtin(*builtin, &values, span, env, context)?
            },
            _ => {
                return Err(Error::runtime(ErrorKind::IllegalOperation,
                                          format!("a {} cannot be called", target.type_name()),
                                          callee.span.clone(),
                                          context).into());
            },
        };

        Ok(result.located(span, context))
    }

    /// Runs a user-defined function.
    ///
    /// The call gets its own frame, named after the function and entered at
    /// `span`, and its own environment whose parent is the environment the
    /// function was defined in. Arguments are bound as independent copies.
    ///
    /// A `give` ends the call with its value. Without one, an inline
    /// (`->`) body returns its own value and a block body returns null.
    /// `leave` and `next` are not absorbed here and keep unwinding into the
    /// caller.
    #[tracing::instrument(level = "debug", skip_all, fields(function = function.display_name()))]
    fn call_user(&mut self,
                 function: &UserFunction,
                 args: &[Value],
                 span: &Span,
                 context: &Rc<Context>)
                 -> RuntimeSignal {
        let definition = &function.definition;
        let frame = Context::enter(context, function.display_name(), span.clone());
        check_arity(function.display_name(), definition.params.len(), args, span, &frame)?;

        let Some(parent) = function.env() else {
            return Err(Error::runtime(ErrorKind::IllegalOperation,
                                      format!("'{}' outlived the scope it was defined in",
                                              function.display_name()),
                                      span.clone(),
                                      &frame).into());
        };
        let scope = Environment::child(&parent);
        for (param, arg) in definition.params.iter().zip(args) {
            scope.borrow_mut().set(param.as_str(), arg.detached().with_context(&frame));
        }

        match self.evaluate(&definition.body, &scope, &frame) {
            Ok(value) if definition.auto_return => Ok(value),
            Ok(_) => Ok(Value::null()),
            Err(Interrupt::Return(value)) => Ok(value),
            Err(other) => Err(other),
        }
    }
}
