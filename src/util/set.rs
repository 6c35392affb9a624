use std::{
    collections::HashSet,
    fmt::{self, Display},
    hash::Hash,
};

/// An unordered collection of unique elements.
///
/// # Example
/// ```
/// use tiercalc::util::set::Set;
///
/// let low = Set::from_elements(['+', '-']);
/// let high = Set::from_elements(['*', '/']);
/// let all = low.union(&high);
///
/// assert!(all.contains(&'*'));
/// assert!(!low.contains(&'*'));
/// assert_eq!(all.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set<T: Eq + Hash> {
    data: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { data: HashSet::new() }
    }

    /// Creates a set holding the given elements. Duplicates collapse.
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> Self {
        Self { data: elements.into_iter().collect() }
    }

    /// Adds an element. Returns `false` if it was already present.
    pub fn insert(&mut self, element: T) -> bool {
        self.data.insert(element)
    }

    /// Removes an element. Does nothing if the element is absent.
    pub fn remove(&mut self, element: &T) -> bool {
        self.data.remove(element)
    }

    /// Checks whether the element belongs to this set.
    pub fn contains(&self, element: &T) -> bool {
        self.data.contains(element)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the set has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the elements in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Returns a new set containing every element of `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self { data: self.data.union(&other.data).cloned().collect() }
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: Eq + Hash + Display> Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, element) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "}}")
    }
}
