pub mod array;
pub use array::Array;
