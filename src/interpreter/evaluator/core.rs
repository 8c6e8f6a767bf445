use std::rc::Rc;

use crate::{
    ast::{Branch, IfCase, Node, NodeKind},
    error::{Error, ErrorKind},
    host::Host,
    interpreter::{
        evaluator::{
            context::Context,
            environment::Env,
            loops::Walk,
            signal::{Interrupt, RuntimeSignal},
        },
        lexer::tokenize,
        parser::parse,
        position::Span,
        value::{
            core::{Value, ValueKind},
            function::UserFunction,
        },
    },
};

/// Walks syntax trees and produces values.
///
/// The interpreter itself holds no program state: variables live in the
/// [`Env`] chain and the call stack lives in the [`Context`] chain, both
/// passed into every call. It only borrows the [`Host`] that built-ins use
/// for console and file access.
pub struct Interpreter<'h> {
    pub(crate) host: &'h mut dyn Host,
}

impl<'h> Interpreter<'h> {
    /// Creates an interpreter doing its I/O through `host`.
    pub fn new(host: &'h mut dyn Host) -> Self {
        Self { host }
    }

    /// Evaluates a node.
    ///
    /// This is the main entry point for evaluation. Every node kind has its
    /// own arm; errors and control-flow signals travel in the `Err` side of
    /// the result until a loop, a call or the top level absorbs them.
    ///
    /// # Parameters
    /// - `node`: The node to evaluate.
    /// - `env`: The innermost variable frame.
    /// - `context`: The current call frame.
    ///
    /// # Example
    /// ```
    /// use glang::{
    ///     host::MemoryHost,
    ///     interpreter::{
    ///         evaluator::{context::Context, core::Interpreter, environment::Environment},
    ///         lexer::tokenize,
    ///         parser::parse,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let (tokens, _) = tokenize("<test>", "obj x = 4\nx * 2");
    /// let program = parse(tokens).unwrap();
    ///
    /// let mut host = MemoryHost::default();
    /// let mut interpreter = Interpreter::new(&mut host);
    /// let value = interpreter.evaluate(&program, &Environment::root(), &Context::root("<program>"))
    ///                        .unwrap();
    ///
    /// assert_eq!(value, Value::list(vec![Value::number(4.0), Value::number(8.0)]));
    /// ```
    pub fn evaluate(&mut self, node: &Node, env: &Env, context: &Rc<Context>) -> RuntimeSignal {
        match &node.kind {
            NodeKind::Number(n) => Ok(Value::number(*n).located(&node.span, context)),
            NodeKind::String(s) => Ok(Value::string(s.as_str()).located(&node.span, context)),
            NodeKind::List(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.evaluate(element, env, context)?.detached());
                }
                Ok(Value::list(values).located(&node.span, context))
            },
            NodeKind::Statements(statements) => {
                let mut values = Vec::with_capacity(statements.len());
                for statement in statements {
                    values.push(self.evaluate(statement, env, context)?);
                }
                Ok(Value::list(values).located(&node.span, context))
            },
            NodeKind::VariableAccess(name) => Self::eval_variable(name, node, env, context),
            NodeKind::VariableAssign { name, value } => {
                let value = self.evaluate(value, env, context)?.detached();
                env.borrow_mut().set(name.as_str(), value.clone());
                Ok(value)
            },
            NodeKind::BinaryOp { left, op, right } => {
                self.eval_binary_op(left, *op, right, env, context)
            },
            NodeKind::UnaryOp { op, operand } => {
                self.eval_unary_op(*op, operand, &node.span, env, context)
            },
            NodeKind::If { cases, otherwise } => {
                self.eval_if(cases, otherwise.as_deref(), &node.span, env, context)
            },
            NodeKind::For { var,
                            start,
                            end,
                            step,
                            body,
                            yields_null, } => {
                let walk = Walk { var,
                                  start,
                                  end,
                                  step: step.as_deref(),
                                  body,
                                  yields_null: *yields_null };
                self.eval_for(&walk, &node.span, env, context)
            },
            NodeKind::While { condition,
                              body,
                              yields_null, } => {
                self.eval_while(condition, body, *yields_null, &node.span, env, context)
            },
            NodeKind::FunctionDef(definition) => {
                let function = UserFunction::new(Rc::clone(definition), env);
                let value = Value::from(ValueKind::Function(Rc::new(function))).located(&node.span,
                                                                                          context);
                if let Some(name) = &definition.name {
                    env.borrow_mut().set(name.as_str(), value.clone());
                }
                Ok(value)
            },
            NodeKind::Call { callee, args } => {
                self.eval_call(callee, args, &node.span, env, context)
            },
            NodeKind::Return(value) => {
                let value = match value {
                    Some(value) => self.evaluate(value, env, context)?,
                    None => Value::null().located(&node.span, context),
                };
                Err(Interrupt::Return(value))
            },
            NodeKind::Break => Err(Interrupt::Break),
            NodeKind::Continue => Err(Interrupt::Continue),
        }
    }

    /// Lexes, parses and evaluates a complete source text.
    ///
    /// A `give`, `leave` or `next` that reaches the top level stops the
    /// program; `give` makes its value the result, the others give null.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or runtime error.
    pub fn execute_source(&mut self,
                          source_name: &str,
                          text: &str,
                          env: &Env,
                          context: &Rc<Context>)
                          -> Result<Value, Error> {
        let (tokens, error) = tokenize(source_name, text);
        if let Some(error) = error {
            return Err(error);
        }
        let program = parse(tokens)?;

        match self.evaluate(&program, env, context) {
            Ok(value) | Err(Interrupt::Return(value)) => Ok(value),
            Err(Interrupt::Break | Interrupt::Continue) => Ok(Value::null()),
            Err(Interrupt::Failure(error)) => Err(error),
        }
    }

    fn eval_variable(name: &str, node: &Node, env: &Env, context: &Rc<Context>) -> RuntimeSignal {
        let value = env.borrow().get(name).ok_or_else(|| {
                                               Error::runtime(ErrorKind::UndefinedVariable,
                                                              format!("'{name}' is not defined"),
                                                              node.span.clone(),
                                                              context)
                                           })?;
        Ok(value.located(&node.span, context))
    }

    /// Evaluates the first case whose condition is truthy, else the
    /// `otherwise` branch. Block bodies and unmatched conditionals yield
    /// null.
    fn eval_if(&mut self,
               cases: &[IfCase],
               otherwise: Option<&Branch>,
               span: &Span,
               env: &Env,
               context: &Rc<Context>)
               -> RuntimeSignal {
        for case in cases {
            if self.evaluate(&case.condition, env, context)?.is_truthy() {
                return self.eval_branch(&case.body, case.yields_null, span, env, context);
            }
        }

        match otherwise {
            Some(branch) => self.eval_branch(&branch.body, branch.yields_null, span, env, context),
            None => Ok(Value::null().located(span, context)),
        }
    }

    fn eval_branch(&mut self,
                   body: &Node,
                   yields_null: bool,
                   span: &Span,
                   env: &Env,
                   context: &Rc<Context>)
                   -> RuntimeSignal {
        let value = self.evaluate(body, env, context)?;
        if yields_null {
            return Ok(Value::null().located(span, context));
        }
        Ok(value)
    }
}
