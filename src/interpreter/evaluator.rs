/// Core evaluation logic.
///
/// Contains the [`core::Interpreter`], its per-node dispatch, conditionals,
/// variables, and the routine that runs a complete source text.
pub mod core;

/// Control-flow signals.
///
/// Defines how errors, `give`, `leave` and `next` unwind through evaluation.
pub mod signal;

/// Variable scopes.
///
/// The environment chain used for lexical lookup and local assignment.
pub mod environment;

/// Call contexts.
///
/// One frame per function call, kept only to build tracebacks.
pub mod context;

/// Binary operator evaluation.
///
/// Dispatches on the type of the left operand and implements the number,
/// string and list operator sets.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements `+`, `-` and `oppositeof`.
pub mod unary;

/// Loop evaluation.
///
/// Supports `walk` and `while`, collecting the value of every iteration.
pub mod loops;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// the built-in library.
pub mod function;
