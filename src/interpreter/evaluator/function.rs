/// Calls.
///
/// Evaluates callees and arguments, checks arity and runs user-defined
/// functions in their own frame.
pub mod core;
/// The built-in function table.
///
/// Declares every built-in with its parameter names and dispatches calls to
/// the implementations below.
pub mod builtin;
/// Console built-ins: `bark`, `chew` and `chewnum`.
pub mod console;
/// Type tests and conversions: `isnumber`, `type`, `tostring`, `tonumber`
/// and friends.
pub mod convert;
/// List built-ins.
///
/// Unlike the list operators these modify their argument in place.
pub mod list;
/// File built-ins: `dig`, `bury` and `run`.
pub mod file;
/// The `fetch` module import.
pub mod module;
