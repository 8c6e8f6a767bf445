use std::rc::Rc;

use crate::interpreter::position::Span;

/// A frame of the call stack, used to build tracebacks.
///
/// Contexts are immutable. Each call creates one whose parent is the caller's
/// context and whose entry span is the call expression.
#[derive(Debug)]
pub struct Context {
    /// The frame name, a function name or `<program>`.
    pub display_name: String,
    /// The calling frame.
    pub parent:       Option<Rc<Self>>,
    /// Where the frame was entered from.
    pub entry_span:   Option<Span>,
}

impl Context {
    /// Creates an outermost frame.
    #[must_use]
    pub fn root(display_name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { display_name: display_name.into(),
                       parent:       None,
                       entry_span:   None, })
    }

    /// Creates a frame entered from `parent` at `entry_span`.
    #[must_use]
    pub fn enter(parent: &Rc<Self>, display_name: impl Into<String>, entry_span: Span) -> Rc<Self> {
        Rc::new(Self { display_name: display_name.into(),
                       parent:       Some(Rc::clone(parent)),
                       entry_span:   Some(entry_span), })
    }
}
