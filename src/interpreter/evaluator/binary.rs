/// Operator dispatch.
///
/// Evaluates both operands, picks the operator set of the left operand's
/// type and builds the errors shared by every set.
pub mod core;
/// Number operators: arithmetic, comparisons and logic.
pub mod number;
/// String operators: concatenation, repetition and equality.
pub mod string;
/// List operators.
///
/// `+` concatenates, `-` removes an index, `*` appends and `^` indexes. Every
/// result that builds a list is a fresh copy.
pub mod list;
