//! A head-prepending singly linked list whose nodes remember their insertion
//! position.
//!
//! [`IndexedList::add`] is O(1) and never moves existing elements: the new
//! element becomes the head and the previous head becomes its successor. As a
//! result, head-to-tail traversal yields elements in the *reverse* of their
//! insertion order, with positions strictly descending from `len - 1` at the
//! head down to `0` at the tail.
//!
//! The parser collects every repeated grammar element this way and relinks
//! each finished list once with [`IndexedList::into_reversed`], so lists in a
//! parsed [`Document`](crate::ast::Document) traverse in source order.
//!
//! ```rust
//! use gqlparse::ast::IndexedList;
//!
//! let mut list = IndexedList::new();
//! list.add("a");
//! list.add("b");
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
//!
//! let list = list.into_reversed();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
//! ```

struct Node<T> {
    data: T,
    pos: usize,
    next: Option<Box<Node<T>>>,
}

/// A generic ordered collection with the ordering contract described in the
/// [module docs](self).
///
/// The empty list is a valid receiver for every operation.
pub struct IndexedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> IndexedList<T> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Builds a list whose head-to-tail order equals `items`' order.
    ///
    /// This is equivalent to calling [`add`](Self::add) for each item
    /// left-to-right and then reversing the result.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        items.iter().cloned().collect()
    }

    /// Prepends `data`, recording the current length as its position.
    pub fn add(&mut self, data: T) {
        let pos = self.head.as_ref().map_or(0, |head| head.pos + 1);
        let next = self.head.take();
        self.head = Some(Box::new(Node { data, pos, next }));
    }

    /// Appends `other`'s entire sequence after this list's tail.
    ///
    /// `other`'s nodes keep their positions. This list's own nodes are shifted
    /// up by `other.len()` so that positions remain strictly descending from
    /// the head (`len - 1`) to the tail (`0`).
    pub fn join(&mut self, mut other: IndexedList<T>) {
        let other_len = other.len();
        if other_len == 0 {
            return;
        }

        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            node.pos += other_len;
            cursor = &mut node.next;
        }
        *cursor = other.head.take();
    }

    /// Returns a new list with the opposite traversal order, with positions
    /// recomputed so the head holds `len - 1` and the tail holds `0`.
    ///
    /// `self` is left untouched.
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        let mut reversed = Self::new();
        for data in self.iter() {
            reversed.add(data.clone());
        }
        reversed
    }

    /// Owned counterpart of [`reverse`](Self::reverse) that relinks the
    /// existing nodes in place instead of cloning them.
    pub fn into_reversed(mut self) -> Self {
        let mut reversed: Option<Box<Node<T>>> = None;
        let mut pos = 0;
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
            node.pos = pos;
            node.next = reversed;
            reversed = Some(node);
            pos += 1;
        }
        Self { head: reversed }
    }

    /// Calls `f(value, i)` for every element head-to-tail, where `i` is the
    /// zero-based traversal index (not the stored position).
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize),
    {
        for (i, data) in self.iter().enumerate() {
            f(data, i);
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.data)
    }

    /// Iterates elements head-to-tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Iterates `(position, element)` pairs head-to-tail.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, &T)> {
        let mut next = self.head.as_deref();
        std::iter::from_fn(move || {
            let node = next?;
            next = node.next.as_deref();
            Some((node.pos, &node.data))
        })
    }
}

impl<T> Default for IndexedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects items so that head-to-tail order equals iteration order.
impl<T> FromIterator<T> for IndexedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for data in iter {
            list.add(data);
        }
        list.into_reversed()
    }
}

impl<T: Clone> Clone for IndexedList<T> {
    fn clone(&self) -> Self {
        let mut clone = Self::new();
        let mut tail = &mut clone.head;
        for (pos, data) in self.positioned() {
            let node = tail.insert(Box::new(Node {
                data: data.clone(),
                pos,
                next: None,
            }));
            tail = &mut node.next;
        }
        clone
    }
}

impl<T: PartialEq> PartialEq for IndexedList<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut lhs = self.positioned();
        let mut rhs = other.positioned();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => continue,
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for IndexedList<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for IndexedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Unlink iteratively; the default recursive drop of a long `Box` chain can
// overflow the stack.
impl<T> Drop for IndexedList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

/// Head-to-tail iterator over an [`IndexedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.data)
    }
}

impl<'a, T> IntoIterator for &'a IndexedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
