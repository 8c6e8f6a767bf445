use std::{fmt, rc::Rc};

use crate::interpreter::{
    evaluator::{context::Context, function::builtin::Builtin},
    position::Span,
    value::{function::UserFunction, list::List},
};

/// Represents a runtime value in the interpreter.
///
/// Besides its data, every value remembers the source span that produced it
/// and the call context it lives in. Both are rebound on a copy whenever a
/// value is read from a variable or returned from a call, so errors point at
/// the place the value was used.
#[derive(Debug, Clone)]
pub struct Value {
    /// The data.
    pub kind:    ValueKind,
    /// Where the value was produced or last read.
    pub span:    Option<Span>,
    /// The call context the value belongs to.
    pub context: Option<Rc<Context>>,
}

/// The types a value can have.
///
/// There is no boolean type: comparisons and logic produce the numbers `0`
/// and `1`.
#[derive(Debug, Clone)]
pub enum ValueKind {
    /// A double precision number.
    Number(f64),
    /// A string.
    String(String),
    /// A list handle.
    List(List),
    /// A function defined in the program.
    Function(Rc<UserFunction>),
    /// A function provided by the interpreter.
    Builtin(Builtin),
}

impl From<ValueKind> for Value {
    fn from(kind: ValueKind) -> Self {
        Self { kind,
               span: None,
               context: None }
    }
}

impl Value {
    /// Creates a number.
    #[must_use]
    pub fn number(value: f64) -> Self {
        ValueKind::Number(value).into()
    }

    /// Creates a string.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        ValueKind::String(value.into()).into()
    }

    /// Creates a list owning `elements`.
    #[must_use]
    pub fn list(elements: Vec<Self>) -> Self {
        ValueKind::List(List::new(elements)).into()
    }

    /// The null sentinel, the number `0`.
    #[must_use]
    pub fn null() -> Self {
        Self::number(0.0)
    }

    /// `1` for `true`, `0` for `false`.
    ///
    /// # Example
    /// ```
    /// use glang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::boolean(true), Value::number(1.0));
    /// ```
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::number(if value { 1.0 } else { 0.0 })
    }

    /// Returns a copy bound to `span`.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns a copy bound to `context`.
    #[must_use]
    pub fn with_context(mut self, context: &Rc<Context>) -> Self {
        self.context = Some(Rc::clone(context));
        self
    }

    /// Returns a copy bound to both `span` and `context`.
    #[must_use]
    pub fn located(self, span: &Span, context: &Rc<Context>) -> Self {
        self.with_span(span.clone()).with_context(context)
    }

    /// Returns a copy that shares no list storage with `self`.
    ///
    /// Used whenever a value is stored into a binding or a container, so two
    /// bindings never alias the same list.
    #[must_use]
    pub fn detached(&self) -> Self {
        match &self.kind {
            ValueKind::List(list) => Self { kind:    ValueKind::List(list.deep_copy()),
                                            span:    self.span.clone(),
                                            context: self.context.clone(), },
            _ => self.resolved(),
        }
    }

    /// Returns a copy safe to use outside the environment it was read from.
    ///
    /// A function bound in its own defining environment only links back to
    /// it weakly; the copy holds the environment strongly again.
    #[must_use]
    pub fn resolved(&self) -> Self {
        match &self.kind {
            ValueKind::Function(function) => match function.to_owned_scope() {
                Some(owned) => Self { kind:    ValueKind::Function(Rc::new(owned)),
                                      span:    self.span.clone(),
                                      context: self.context.clone(), },
                None => self.clone(),
            },
            _ => self.clone(),
        }
    }

    /// Whether the value counts as true in conditions.
    ///
    /// Zero, the empty string and the empty list are false. Functions are
    /// always false.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match &self.kind {
            ValueKind::Number(n) => *n != 0.0,
            ValueKind::String(s) => !s.is_empty(),
            ValueKind::List(list) => !list.is_empty(),
            ValueKind::Function(_) | ValueKind::Builtin(_) => false,
        }
    }

    /// The name of the value's type, as reported by `type` and in error
    /// messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match &self.kind {
            ValueKind::Number(_) => "number",
            ValueKind::String(_) => "string",
            ValueKind::List(_) => "list",
            ValueKind::Function(_) => "function",
            ValueKind::Builtin(_) => "built-in function",
        }
    }

    /// Returns the number, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self.kind {
            ValueKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list handle, if this is a list.
    #[must_use]
    pub const fn as_list(&self) -> Option<&List> {
        match &self.kind {
            ValueKind::List(list) => Some(list),
            _ => None,
        }
    }

    /// The form used for values nested inside a list: strings are quoted and
    /// lists are bracketed.
    ///
    /// # Example
    /// ```
    /// use glang::interpreter::value::core::Value;
    ///
    /// let nested = Value::list(vec![Value::string("a"), Value::list(vec![Value::number(1.0)])]);
    ///
    /// assert_eq!(nested.to_string(), "a, [1]");
    /// assert_eq!(nested.repr(), "[\"a\", [1]]");
    /// ```
    #[must_use]
    pub fn repr(&self) -> String {
        match &self.kind {
            ValueKind::String(s) => format!("\"{s}\""),
            ValueKind::List(list) => {
                let items: Vec<String> = list.elements().iter().map(Self::repr).collect();
                format!("[{}]", items.join(", "))
            },
            _ => self.to_string(),
        }
    }
}

/// Values compare by content: lists deeply, functions by definition and
/// defining environment.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b)) => a == b,
            (ValueKind::String(a), ValueKind::String(b)) => a == b,
            (ValueKind::List(a), ValueKind::List(b)) => a.deep_eq(b),
            (ValueKind::Function(a), ValueKind::Function(b)) => a.same_as(b),
            (ValueKind::Builtin(a), ValueKind::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

/// The form printed by `bark` and returned by `tostring`.
///
/// Numbers print without a trailing `.0` when whole, strings print raw and
/// lists print their elements joined by `, `.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Number(n) => write!(f, "{n}"),
            ValueKind::String(s) => f.write_str(s),
            ValueKind::List(list) => {
                let items: Vec<String> = list.elements().iter().map(Self::repr).collect();
                f.write_str(&items.join(", "))
            },
            ValueKind::Function(function) => write!(f, "<function {}>", function.display_name()),
            ValueKind::Builtin(builtin) => write!(f, "<built-in function {}>", builtin.name()),
        }
    }
}
