use std::{cell::RefCell, collections::HashMap, f64::consts::PI, fmt, rc::Rc};

use crate::interpreter::{
    evaluator::function::builtin::Builtin,
    value::core::{Value, ValueKind},
};

/// A shared handle to an [`Environment`].
///
/// Environments are shared between the frame that owns them, the child
/// frames that read through them and the functions defined in them.
pub type Env = Rc<RefCell<Environment>>;

/// One frame of variables.
///
/// Lookups fall back to the parent frame on a miss. Assignment always writes
/// this frame, so a function can shadow but never rebind an outer variable.
#[derive(Default)]
pub struct Environment {
    symbols: HashMap<String, Value>,
    parent:  Option<Env>,
}

impl Environment {
    /// Creates the frame holding every built-in function and the constants
    /// `null`, `false`, `true` and `pi`.
    #[must_use]
    pub fn prelude() -> Env {
        let mut prelude = Self::default();

        for builtin in Builtin::ALL {
            prelude.set(builtin.name(), ValueKind::Builtin(*builtin).into());
        }
        prelude.set("null", Value::null());
        prelude.set("false", Value::boolean(false));
        prelude.set("true", Value::boolean(true));
        prelude.set("pi", Value::number(PI));

        Rc::new(RefCell::new(prelude))
    }

    /// Creates the top-level frame of a program or module.
    ///
    /// It sits directly on a fresh prelude, so it holds exactly the names the
    /// program defines.
    #[must_use]
    pub fn root() -> Env {
        Self::child(&Self::prelude())
    }

    /// Creates an empty frame whose lookups fall back to `parent`.
    #[must_use]
    pub fn child(parent: &Env) -> Env {
        Rc::new(RefCell::new(Self { symbols: HashMap::new(),
                                    parent:  Some(Rc::clone(parent)), }))
    }

    /// Looks `name` up in this frame, then in each ancestor.
    ///
    /// # Example
    /// ```
    /// use glang::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let root = Environment::root();
    /// root.borrow_mut().set("x", Value::number(1.0));
    /// let inner = Environment::child(&root);
    ///
    /// assert_eq!(inner.borrow().get("x"), Some(Value::number(1.0)));
    /// assert!(inner.borrow().get("y").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.symbols.get(name) {
            return Some(value.resolved());
        }
        self.parent.as_ref().and_then(|parent| parent.borrow().get(name))
    }

    /// Binds `name` in this frame, replacing any previous local binding.
    ///
    /// A function defined in this very frame is stored with a weak link back
    /// to it, so the frame and the function do not keep each other alive.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let value = match &value.kind {
            ValueKind::Function(function) if function.is_defined_in(self) => {
                let kind = ValueKind::Function(Rc::new(function.as_binding()));
                Value { kind,
                        span: value.span,
                        context: value.context }
            },
            _ => value,
        };
        self.symbols.insert(name.into(), value);
    }

    /// Returns the binding of `name` in this frame only, as stored.
    #[must_use]
    pub fn local(&self, name: &str) -> Option<&Value> {
        self.symbols.get(name)
    }

    /// Every binding of this frame, in no particular order.
    pub fn locals(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.symbols.iter()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.symbols.keys().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("has_parent", &self.parent.is_some())
         .finish()
    }
}
