use std::{
    fmt::{self, Display},
    mem,
};

/// A node of an n-ary tree.
///
/// A node without children is a leaf. Children are owned, so a tree is
/// always acyclic and dropping the root drops everything below it. Dropping
/// and display walk the tree with a work list, so a tree may be far deeper
/// than the call stack.
///
/// `Display` renders the tree as an s-expression: a leaf prints its payload,
/// an inner node prints `(payload child...)`. Empty leaf payloads print as
/// `""` so they stay visible.
///
/// # Example
/// ```
/// use tiercalc::util::tree::Node;
///
/// let tree = Node::new("-", vec![Node::leaf("1"), Node::leaf("2")]);
///
/// assert!(!tree.is_leaf());
/// assert_eq!(tree.children.len(), 2);
/// assert_eq!(tree.to_string(), "(- 1 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// The payload carried by this node.
    pub data:     T,
    /// The ordered children of this node.
    pub children: Vec<Self>,
}

impl<T> Node<T> {
    /// Creates a node with the given children.
    #[must_use]
    pub const fn new(data: T, children: Vec<Self>) -> Self {
        Self { data, children }
    }

    /// Creates a node without children.
    #[must_use]
    pub const fn leaf(data: T) -> Self {
        Self { data,
               children: Vec::new() }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Replaces the child at `index`, returning the previous child.
    ///
    /// Returns `None` and leaves the tree untouched if `index` is out of
    /// bounds.
    pub fn replace_child(&mut self, index: usize, node: Self) -> Option<Self> {
        self.children
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, node))
    }

    /// Payloads of all leaves, left to right.
    pub fn leaves(&self) -> Vec<&T> {
        let mut leaves = Vec::new();
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            if node.is_leaf() {
                leaves.push(&node.data);
            }
            pending.extend(node.children.iter().rev());
        }

        leaves
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// One step of the s-expression rendering.
enum Piece<'a, T> {
    Node(&'a Node<T>),
    Close,
}

impl<T: Display> Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        let mut first = true;

        while let Some(piece) = pending.pop() {
            let node = match piece {
                Piece::Close => {
                    write!(f, ")")?;
                    continue;
                },
                Piece::Node(node) => node,
            };

            if !first {
                write!(f, " ")?;
            }
            first = false;

            let data = node.data.to_string();
            let data = if data.is_empty() { "\"\"" } else { data.as_str() };

            if node.is_leaf() {
                write!(f, "{data}")?;
                continue;
            }

            write!(f, "({data}")?;
            pending.push(Piece::Close);
            pending.extend(node.children.iter().rev().map(Piece::Node));
        }

        Ok(())
    }
}
