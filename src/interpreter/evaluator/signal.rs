use crate::{error::Error, interpreter::value::core::Value};

/// Why evaluation of a node stopped before producing a value.
///
/// Every node forwards an interruption unchanged, except loops, which absorb
/// `Break` and `Continue`, and calls, which absorb `Return`.
#[derive(Debug, Clone)]
pub enum Interrupt {
    /// A runtime error.
    Failure(Error),
    /// `give`, with its value or null.
    Return(Value),
    /// `leave`
    Break,
    /// `next`
    Continue,
}

impl From<Error> for Interrupt {
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

/// The outcome of evaluating a node.
///
/// `Ok` is a successful value; `Err` carries the error or control-flow signal
/// that is unwinding.
pub type RuntimeSignal = Result<Value, Interrupt>;
