/// Parser state, backtracking bookkeeping and the parse entry point.
///
/// Defines [`core::Parser`], the [`core::Parsed`] result every grammar rule
/// returns, and the [`core::Attempt`] tracker that counts consumed tokens so a
/// failed speculative parse can be rewound.
pub mod core;

/// Statement-level parsing.
///
/// Handles statement sequences, `give`, `next` and `leave`.
pub mod statement;

/// Binary operator parsing.
///
/// The left-associative operator chains from `and`/`or` down to `^`.
pub mod binary;

/// Unary operator, call and atom parsing.
///
/// Prefix `+`/`-`, function calls and the primary expressions.
pub mod unary;

/// Block-forming constructs.
///
/// `if`, `walk`, `while` and `func`, with their inline and block bodies.
pub mod block;

/// Shared parsing helpers.
///
/// Comma-separated lists, list literals and token expectations.
pub mod utils;

pub use self::core::{Parser, parse};
