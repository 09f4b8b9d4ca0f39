use crate::{Lifo, Result};

/// Growable stack. The top is the last element of the backing vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
    inner: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Reserve room for `capacity` items up front. The stack still grows past it.
    pub fn with_capacity(capacity: usize) -> Self {
        tracing::trace!(capacity, "reserving unbounded stack");
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.inner.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.inner.last_mut()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Index of the top item, `None` when empty.
    pub fn top_index(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

/// Seed a stack from `items` in order, so the last item ends up on top.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        tracing::trace!(len = items.len(), "seeding unbounded stack");
        Self { inner: items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Lifo<T> for Stack<T> {
    fn try_push(&mut self, item: T) -> Result<()> {
        Stack::push(self, item);
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }

    fn peek(&self) -> Option<&T> {
        Stack::peek(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }
}
