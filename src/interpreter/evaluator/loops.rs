use std::rc::Rc;

use crate::{
    ast::Node,
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{
            context::Context,
            core::Interpreter,
            environment::Env,
            signal::{Interrupt, RuntimeSignal},
        },
        position::Span,
        value::core::Value,
    },
};

/// The parts of a `walk` loop.
pub struct Walk<'a> {
    /// The loop variable.
    pub var:         &'a str,
    /// Initial value.
    pub start:       &'a Node,
    /// Exclusive bound.
    pub end:         &'a Node,
    /// Increment, `1` when absent.
    pub step:        Option<&'a Node>,
    /// The loop body.
    pub body:        &'a Node,
    /// Whether the loop evaluates to null instead of a list.
    pub yields_null: bool,
}

/// What a single iteration asks the loop to do next.
enum Flow {
    Collect(Value),
    Skip,
    Stop,
}

impl Interpreter<'_> {
    /// Evaluates a `walk` loop.
    ///
    /// The variable is bound in the current frame before each iteration and
    /// keeps its last value after the loop. A non-negative step runs while
    /// the variable is below the bound, a negative one while it is above.
    ///
    /// # Returns
    /// A list of the value of every completed iteration, or null for a block
    /// body.
    pub(crate) fn eval_for(&mut self,
                           walk: &Walk<'_>,
                           span: &Span,
                           env: &Env,
                           context: &Rc<Context>)
                           -> RuntimeSignal {
        let start = self.eval_bound(walk.start, "start", env, context)?;
        let end = self.eval_bound(walk.end, "end", env, context)?;
        let step = match walk.step {
            Some(node) => {
                let step = self.eval_bound(node, "step", env, context)?;
                if step == 0.0 {
                    return Err(Error::runtime(ErrorKind::IllegalOperation,
                                              "walk step cannot be zero",
                                              node.span.clone(),
                                              context).into());
                }
                step
            },
            None => 1.0,
        };

        let running = |i: f64| if step >= 0.0 { i < end } else { i > end };
        let mut values = Vec::new();
        let mut i = start;

        while running(i) {
            env.borrow_mut().set(walk.var, Value::number(i));
            i += step;

            match self.iterate(walk.body, env, context)? {
                Flow::Collect(value) => values.push(value),
                Flow::Skip => {},
                Flow::Stop => break,
            }
        }

        Ok(Self::loop_result(values, walk.yields_null, span, context))
    }

    /// Evaluates a `while` loop, testing `condition` before every iteration.
    pub(crate) fn eval_while(&mut self,
                             condition: &Node,
                             body: &Node,
                             yields_null: bool,
                             span: &Span,
                             env: &Env,
                             context: &Rc<Context>)
                             -> RuntimeSignal {
        let mut values = Vec::new();

        while self.evaluate(condition, env, context)?.is_truthy() {
            match self.iterate(body, env, context)? {
                Flow::Collect(value) => values.push(value),
                Flow::Skip => {},
                Flow::Stop => break,
            }
        }

        Ok(Self::loop_result(values, yields_null, span, context))
    }

    /// Runs the body once and absorbs `leave` and `next`.
    fn iterate(&mut self, body: &Node, env: &Env, context: &Rc<Context>) -> Result<Flow, Interrupt> {
        match self.evaluate(body, env, context) {
            Ok(value) => Ok(Flow::Collect(value.detached())),
            Err(Interrupt::Continue) => Ok(Flow::Skip),
            Err(Interrupt::Break) => Ok(Flow::Stop),
            Err(other) => Err(other),
        }
    }

    fn eval_bound(&mut self,
                  node: &Node,
                  role: &str,
                  env: &Env,
                  context: &Rc<Context>)
                  -> Result<f64, Interrupt> {
        let value = self.evaluate(node, env, context)?;
        value.as_number().ok_or_else(|| {
                              Error::runtime(ErrorKind::TypeMismatch,
                                             format!("walk {role} must be a number, not a {}",
                                                     value.type_name()),
                                             node.span.clone(),
                                             context).into()
                          })
    }

    fn loop_result(values: Vec<Value>,
                   yields_null: bool,
                   span: &Span,
                   context: &Rc<Context>)
                   -> Value {
        if yields_null {
            Value::null().located(span, context)
        } else {
            Value::list(values).located(span, context)
        }
    }
}
