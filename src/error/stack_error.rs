#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents the errors a stack can report.
pub enum StackError {
    /// Tried to pop or peek while the stack held no elements.
    Empty,
}

impl std::fmt::Display for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Cannot pop from an empty stack."),
        }
    }
}

impl std::error::Error for StackError {}
