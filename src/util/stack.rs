use crate::error::StackError;

/// A last-in, first-out stack backed by a `Vec`.
///
/// # Example
/// ```
/// use tiercalc::{error::StackError, util::stack::Stack};
///
/// let mut stack = Stack::new();
/// stack.push("outer");
/// stack.push("inner");
///
/// assert_eq!(stack.peek(), Ok(&"inner"));
/// assert_eq!(stack.pop(), Ok("inner"));
/// assert_eq!(stack.pop(), Ok("outer"));
/// assert_eq!(stack.pop(), Err(StackError::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Pushes an element on top of the stack.
    pub fn push(&mut self, element: T) {
        self.data.push(element);
    }

    /// Removes and returns the top-most element.
    ///
    /// # Errors
    /// Returns [`StackError::Empty`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.data.pop().ok_or(StackError::Empty)
    }

    /// Returns the top-most element without removing it.
    ///
    /// # Errors
    /// Returns [`StackError::Empty`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.data.last().ok_or(StackError::Empty)
    }

    /// Number of elements currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// The last element of the vector becomes the top of the stack.
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}
