use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    interpreter::value::core::Value,
    util::num::{WholeNumberError, f64_to_usize_checked},
};

/// A handle to a mutable sequence of values.
///
/// Cloning a `List` clones the handle, not the elements. Use
/// [`List::deep_copy`] for an independent sequence.
#[derive(Clone, Default)]
pub struct List(Rc<RefCell<Vec<Value>>>);

impl List {
    /// Creates a list owning the given elements.
    #[must_use]
    pub fn new(elements: Vec<Value>) -> Self {
        Self(Rc::new(RefCell::new(elements)))
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns the element at `index`, sharing any nested list.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Returns handles to all elements.
    #[must_use]
    pub fn elements(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Appends a value.
    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    /// Appends every value of `values`.
    pub fn extend(&self, values: Vec<Value>) {
        self.0.borrow_mut().extend(values);
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&self, index: usize) -> Option<Value> {
        let mut elements = self.0.borrow_mut();
        (index < elements.len()).then(|| elements.remove(index))
    }

    /// Reverses the elements in place.
    pub fn reverse(&self) {
        self.0.borrow_mut().reverse();
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Copies the list and, recursively, every list inside it.
    ///
    /// # Example
    /// ```
    /// use glang::interpreter::value::{core::Value, list::List};
    ///
    /// let original = List::new(vec![Value::number(1.0)]);
    /// let copy = original.deep_copy();
    /// copy.push(Value::number(2.0));
    ///
    /// assert_eq!(original.len(), 1);
    /// assert_eq!(copy.len(), 2);
    /// ```
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Self::new(self.0.borrow().iter().map(Value::detached).collect())
    }

    /// Compares two lists element by element, stopping at the first
    /// difference.
    #[must_use]
    pub fn deep_eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        let left = self.0.borrow();
        let right = other.0.borrow();
        left.len() == right.len() && left.iter().zip(right.iter()).all(|(a, b)| a == b)
    }
}

/// Validates a language number as an index into a list of length `len`.
///
/// # Errors
/// Returns the message describing why `index` does not address an element.
///
/// # Example
/// ```
/// use glang::interpreter::value::list::resolve_index;
///
/// assert_eq!(resolve_index(1.0, 3), Ok(1));
/// assert_eq!(resolve_index(3.0, 3), Err("index is out of bounds"));
/// assert_eq!(resolve_index(-1.0, 3), Err("cannot access a negative index"));
/// ```
pub fn resolve_index(index: f64, len: usize) -> Result<usize, &'static str> {
    match f64_to_usize_checked(index) {
        Ok(index) if index < len => Ok(index),
        Ok(_) | Err(WholeNumberError::TooLarge) => Err("index is out of bounds"),
        Err(WholeNumberError::Negative) => Err("cannot access a negative index"),
        Err(WholeNumberError::Fractional) => Err("index must be a whole number"),
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}
