use std::{
    cell::RefCell,
    fmt, ptr,
    rc::{Rc, Weak},
};

use crate::{
    ast::FunctionDef,
    interpreter::evaluator::environment::{Env, Environment},
};

/// How a function holds on to the environment it was defined in.
#[derive(Clone)]
enum Scope {
    /// Keeps the environment alive.
    Owned(Env),
    /// Used for a function stored inside its own defining environment, which
    /// would otherwise keep itself alive.
    Binding(Weak<RefCell<Environment>>),
}

/// A function defined in the program.
///
/// The definition is shared with the syntax tree. The defining environment
/// is captured too; calls run in a child of it, which gives lexical scoping
/// and closures.
pub struct UserFunction {
    /// Parameters, body and return mode.
    pub definition: Rc<FunctionDef>,
    scope:          Scope,
}

impl UserFunction {
    /// Creates a function closing over `env`.
    #[must_use]
    pub fn new(definition: Rc<FunctionDef>, env: &Env) -> Self {
        Self { definition,
               scope: Scope::Owned(Rc::clone(env)) }
    }

    /// The name used in tracebacks and messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.definition.name.as_deref().unwrap_or("<anonymous>")
    }

    /// The defining environment, or `None` once it has been dropped.
    #[must_use]
    pub fn env(&self) -> Option<Env> {
        match &self.scope {
            Scope::Owned(env) => Some(Rc::clone(env)),
            Scope::Binding(env) => env.upgrade(),
        }
    }

    /// Returns `true` if the function was defined in `env`.
    #[must_use]
    pub fn is_defined_in(&self, env: &Environment) -> bool {
        self.scope_ptr().is_some_and(|scope| ptr::eq(scope, env))
    }

    /// The copy stored in the defining environment itself, with a weak link
    /// back to it.
    #[must_use]
    pub fn as_binding(&self) -> Self {
        let scope = match &self.scope {
            Scope::Owned(env) => Scope::Binding(Rc::downgrade(env)),
            binding @ Scope::Binding(_) => binding.clone(),
        };
        Self { definition: Rc::clone(&self.definition),
               scope }
    }

    /// A copy that keeps the defining environment alive, if this one does
    /// not and the environment still exists.
    #[must_use]
    pub fn to_owned_scope(&self) -> Option<Self> {
        match &self.scope {
            Scope::Owned(_) => None,
            Scope::Binding(env) => {
                env.upgrade().map(|env| Self { definition: Rc::clone(&self.definition),
                                               scope:      Scope::Owned(env), })
            },
        }
    }

    /// Two functions are the same if they come from the same definition
    /// evaluated in the same environment.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.definition, &other.definition) && self.scope_ptr() == other.scope_ptr()
    }

    fn scope_ptr(&self) -> Option<*const Environment> {
        self.env().map(|env| env.as_ptr().cast_const())
    }
}

impl fmt::Debug for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFunction")
         .field("name", &self.display_name())
         .field("params", &self.definition.params)
         .finish_non_exhaustive()
    }
}
