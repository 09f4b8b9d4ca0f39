#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A push was attempted on a bounded stack with every slot occupied.
    #[error("stack is full; cannot add more items (capacity {capacity})")]
    Overflow { capacity: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
