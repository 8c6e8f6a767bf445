use std::rc::Rc;

use crate::{
    ast::{Node, UnaryOperator},
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{context::Context, core::Interpreter, environment::Env, signal::RuntimeSignal},
        position::Span,
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a prefix operation.
    ///
    /// `+` and `-` accept numbers only. `oppositeof` negates the truthiness
    /// of any value and produces `0` or `1`.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                operand: &Node,
                                span: &Span,
                                env: &Env,
                                context: &Rc<Context>)
                                -> RuntimeSignal {
        let value = self.evaluate(operand, env, context)?;

        let result = match (op, value.as_number()) {
            (UnaryOperator::OppositeOf, _) => Value::boolean(!value.is_truthy()),
            (UnaryOperator::Plus, Some(n)) => Value::number(n),
            (UnaryOperator::Minus, Some(n)) => Value::number(-n),
            (UnaryOperator::Plus | UnaryOperator::Minus, None) => {
                return Err(Error::runtime(ErrorKind::IllegalOperation,
                                          format!("cannot apply '{op}' to a {}",
                                                  value.type_name()),
                                          span.clone(),
                                          context).into());
            },
        };

        Ok(result.located(span, context))
    }
}
