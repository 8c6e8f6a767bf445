use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Node},
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{
            binary::{list, number, string},
            context::Context,
            core::Interpreter,
            environment::Env,
            signal::RuntimeSignal,
        },
        position::Span,
        value::core::{Value, ValueKind},
    },
};

/// A binary operator applied to two evaluated operands.
///
/// Carries everything the operator sets need to build a result or an error.
pub struct Operation<'a> {
    /// The operator.
    pub op:      BinaryOperator,
    /// Left operand.
    pub left:    &'a Value,
    /// Right operand.
    pub right:   &'a Value,
    /// From the start of the left operand to the end of the right one.
    pub span:    &'a Span,
    /// The call frame the operation runs in.
    pub context: &'a Rc<Context>,
}

impl Operation<'_> {
    /// Applies the operator.
    ///
    /// Dispatch happens on the left operand's type. Functions support no
    /// operator at all. `and` and `or` work on the truthiness of any
    /// non-function operands.
    ///
    /// # Errors
    /// Returns an `IllegalOperation` error if the operand types do not
    /// support the operator, and whatever the operator set itself reports.
    ///
    /// # Example
    /// ```
    /// use glang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         evaluator::{binary::core::Operation, context::Context},
    ///         lexer::tokenize,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let (tokens, _) = tokenize("<test>", "x");
    /// let context = Context::root("<program>");
    /// let (left, right) = (Value::number(3.0), Value::number(4.0));
    ///
    /// let operation = Operation { op:      BinaryOperator::Mul,
    ///                             left:    &left,
    ///                             right:   &right,
    ///                             span:    &tokens[0].span,
    ///                             context: &context, };
    ///
    /// assert_eq!(operation.apply().unwrap(), Value::number(12.0));
    /// ```
    pub fn apply(&self) -> Result<Value, Error> {
        if matches!(self.right.kind, ValueKind::Function(_) | ValueKind::Builtin(_))
           && matches!(self.op, BinaryOperator::And | BinaryOperator::Or)
        {
            return Err(self.illegal());
        }

        match &self.left.kind {
            ValueKind::Number(n) => number::apply(self, *n),
            ValueKind::String(s) => string::apply(self, s),
            ValueKind::List(items) => list::apply(self, items),
            ValueKind::Function(_) | ValueKind::Builtin(_) => Err(self.illegal()),
        }
    }

    /// The `IllegalOperation` error for this operand pair.
    #[must_use]
    pub fn illegal(&self) -> Error {
        Error::runtime(ErrorKind::IllegalOperation,
                       format!("cannot apply '{}' to a {} and a {}",
                               self.op,
                               self.left.type_name(),
                               self.right.type_name()),
                       self.span.clone(),
                       self.context)
    }

    /// An error pointing at the right operand.
    #[must_use]
    pub fn right_error(&self, kind: ErrorKind, message: impl Into<String>) -> Error {
        let span = self.right.span.as_ref().unwrap_or(self.span);
        Error::runtime(kind, message, span.clone(), self.context)
    }

    /// Handles `and` and `or`, which every non-function type shares.
    ///
    /// Returns `None` for any other operator.
    #[must_use]
    pub fn logic(&self) -> Option<Value> {
        match self.op {
            BinaryOperator::And => {
                Some(Value::boolean(self.left.is_truthy() && self.right.is_truthy()))
            },
            BinaryOperator::Or => {
                Some(Value::boolean(self.left.is_truthy() || self.right.is_truthy()))
            },
            _ => None,
        }
    }
}

impl Interpreter<'_> {
    /// Evaluates a binary operation.
    ///
    /// Both operands are always evaluated, left first; `and` and `or` do not
    /// short-circuit. The result is bound to the span covering both operands.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Node,
                                 op: BinaryOperator,
                                 right: &Node,
                                 env: &Env,
                                 context: &Rc<Context>)
                                 -> RuntimeSignal {
        let lhs = self.evaluate(left, env, context)?;
        let rhs = self.evaluate(right, env, context)?;
        let span = left.span.to(&right.span);

        let operation = Operation { op,
                                    left: &lhs,
                                    right: &rhs,
                                    span: &span,
                                    context };
        let result = operation.apply()?;

        Ok(result.located(&span, context))
    }
}
