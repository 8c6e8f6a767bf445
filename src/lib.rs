//! # glang
//!
//! glang is a small dynamically typed scripting language written in Rust.
//! Programs are lexed, parsed into a syntax tree and evaluated by a tree
//! walking interpreter with numbers, strings, lists, first-class functions
//! and closures, loops, file I/O and module imports.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{rc::Rc, sync::Once};

use crate::{
    error::Error,
    host::{Host, StdHost},
    interpreter::{
        evaluator::{
            context::Context,
            core::Interpreter,
            environment::{Env, Environment},
        },
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the [`ast::Node`] tree built by the parser and walked
/// by the evaluator.
///
/// # Responsibilities
/// - Defines a node kind for every language construct.
/// - Attaches the source span of every node for error reporting.
/// - Shares function definitions between the tree and function values.
pub mod ast;
/// Provides the unified error type for lexing, parsing and evaluation.
///
/// Every failure is an [`error::Error`] with an [`error::ErrorKind`], a
/// message and the source span it points at. Runtime errors also carry the
/// call context used to render a traceback.
///
/// # Responsibilities
/// - Defines the closed set of error kinds and their titles.
/// - Renders diagnostics with tracebacks and underlined source excerpts.
pub mod error;
/// Console and filesystem access for running programs.
///
/// Built-ins reach the outside world only through the [`host::Host`] trait,
/// so programs can run against the real process or entirely in memory.
pub mod host;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines used throughout the lexer and
/// evaluator wherever a language number meets an integer.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

/// The display name of the outermost call frame.
pub const PROGRAM_FRAME: &str = "<program>";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=glang=debug` or `RUST_LOG=glang=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    // Only initialize if RUST_LOG is set
                    if std::env::var("RUST_LOG").is_ok() {
                        let filter = EnvFilter::from_default_env();
                        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                                         .with_level(true)
                                                                         .with_writer(std::io::stderr))
                                                      .with(filter)
                                                      .init();
                    }
                });
}

/// A sequence of programs sharing one root environment.
///
/// Used by the REPL, where every line sees the variables and functions of
/// the lines before it.
///
/// # Example
/// ```
/// use glang::{Session, host::MemoryHost, interpreter::value::core::Value};
///
/// let mut host = MemoryHost::default();
/// let mut session = Session::new();
///
/// session.run("<stdin>", "obj x = 20", &mut host).unwrap();
/// let value = session.run("<stdin>", "x + 1", &mut host).unwrap();
///
/// assert_eq!(value, Value::list(vec![Value::number(21.0)]));
/// ```
#[derive(Debug)]
pub struct Session {
    env:     Env,
    context: Rc<Context>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with a fresh root environment.
    #[must_use]
    pub fn new() -> Self {
        Self { env:     Environment::root(),
               context: Context::root(PROGRAM_FRAME), }
    }

    /// Runs `text` in the session's environment.
    ///
    /// # Returns
    /// The list of the values of the program's top-level statements, or the
    /// value of a top-level `give`.
    pub fn run(&mut self, source_name: &str, text: &str, host: &mut dyn Host) -> Result<Value, Error> {
        Interpreter::new(host).execute_source(source_name, text, &self.env, &self.context)
    }
}

/// Runs a program against the real console and filesystem.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error. Use
/// [`Error::render`] for the text shown to users.
pub fn run(source_name: &str, text: &str) -> Result<Value, Error> {
    run_with_host(source_name, text, &mut StdHost)
}

/// Runs a program, doing all I/O through `host`.
///
/// # Examples
/// ```
/// use glang::{host::MemoryHost, run_with_host};
///
/// let mut host = MemoryHost::default();
/// run_with_host("<test>", "func add(a, b) -> a + b\nbark(add(2, 3))", &mut host).unwrap();
/// assert_eq!(host.output(), ["5"]);
///
/// // Example with an intentional error (unknown variable).
/// let error = run_with_host("<test>", "obj y = x + 1", &mut host).unwrap_err();
/// assert_eq!(error.message, "'x' is not defined");
/// ```
pub fn run_with_host(source_name: &str, text: &str, host: &mut dyn Host) -> Result<Value, Error> {
    Session::new().run(source_name, text, host)
}
