/// Core value representation.
///
/// Defines [`core::Value`], the runtime value with its source span and call
/// context, and [`core::ValueKind`], the closed set of value types. Includes
/// truthiness, display forms and deep copying.
pub mod core;
/// List values.
///
/// A [`list::List`] is a shared handle over a mutable sequence. Built-ins that
/// mutate a list argument act through the handle; every binding or container
/// that stores a list stores an independent deep copy.
pub mod list;
/// User-defined function values.
///
/// A function value pairs a shared definition from the syntax tree with the
/// environment it was defined in.
pub mod function;
