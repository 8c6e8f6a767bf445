/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator walks the tree produced by the parser, applies operators,
/// manages variable scopes and call frames, and runs the built-in library.
///
/// # Responsibilities
/// - Evaluates every node kind, including loops, calls and conditionals.
/// - Propagates `give`, `leave` and `next` to the construct that absorbs
///   them.
/// - Reports runtime errors with the call context needed for a traceback.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a number, string, identifier, keyword or operator, and
/// each carrying the span it was read from.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source locations.
/// - Translates escapes in string literals.
/// - Reports the first lexical error and stops.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// The parser is a recursive descent parser over the token stream. Optional
/// constructs are parsed speculatively and rewound when they consume
/// nothing.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees.
/// - Encodes operator precedence and associativity in its call structure.
/// - Reports the syntax error of the attempt that got furthest.
pub mod parser;
/// Source text and locations.
///
/// Defines the shared [`position::Source`], the [`position::Position`]
/// cursor and the [`position::Span`] ranges attached to tokens, nodes,
/// values and errors.
pub mod position;
/// The value module defines the runtime data types.
///
/// Numbers, strings, list handles and functions, along with truthiness,
/// equality, display forms and the copy rules that keep stored lists
/// independent.
pub mod value;
