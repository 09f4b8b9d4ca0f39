use util::collections::Array;

use crate::{Error, Lifo, Result};

/// Fixed capacity stack over a pre-allocated slot array.
///
/// Slots at or above [BoundedStack::len] are always `None`, so popped items are dropped as
/// soon as they leave the stack rather than lingering in the backing storage.
#[derive(Clone, Debug)]
pub struct BoundedStack<T> {
    slots: Array<Option<T>>,
    len: usize,
}

impl<T> BoundedStack<T> {
    /// Allocate exactly `capacity` empty slots. The capacity never changes afterwards.
    pub fn new(capacity: usize) -> Self {
        tracing::trace!(capacity, "allocating bounded stack");
        Self {
            slots: Array::from_fn(capacity, |_| None),
            len: 0,
        }
    }

    /// Push `item` as the new top, or fail with [Error::Overflow] if every slot is taken. The
    /// stack is left untouched on failure.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "rejected push onto full stack");
            return Err(Error::Overflow {
                capacity: self.capacity(),
            });
        }
        debug_assert!(self.slots[self.len].is_none());
        self.slots[self.len] = Some(item);
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        let top = self.top_index()?;
        self.len = top;
        self.slots[top].take()
    }

    pub fn peek(&self) -> Option<&T> {
        let top = self.top_index()?;
        self.slots[top].as_ref()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let top = self.top_index()?;
        self.slots[top].as_mut()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Index of the top slot, `None` when empty.
    pub fn top_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Drop every item, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots
            .iter_mut()
            .take(self.len)
            .for_each(|slot| *slot = None);
        self.len = 0;
    }
}

impl<T> Lifo<T> for BoundedStack<T> {
    fn try_push(&mut self, item: T) -> Result<()> {
        BoundedStack::push(self, item)
    }

    fn pop(&mut self) -> Option<T> {
        BoundedStack::pop(self)
    }

    fn peek(&self) -> Option<&T> {
        BoundedStack::peek(self)
    }

    fn len(&self) -> usize {
        BoundedStack::len(self)
    }
}
