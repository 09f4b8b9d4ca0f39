use crate::Result;

/// Operations shared by every stack in this crate.
///
/// Capacity queries such as [crate::BoundedStack::is_full] are not part of this trait since an
/// unbounded stack has no notion of being full.
pub trait Lifo<T> {
    /// Push `item` as the new top. Only fails for stacks with a fixed capacity.
    fn try_push(&mut self, item: T) -> Result<()>;

    fn pop(&mut self) -> Option<T>;

    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
