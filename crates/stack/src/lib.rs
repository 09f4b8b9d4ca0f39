//! Last-in-first-out containers.
//!
//! ## Usage
//!
//! ```
//! use lifo_stack::{BoundedStack, Error, Stack};
//!
//! let mut stack = Stack::from(vec![1, 2, 3]);
//! assert_eq!(stack.peek(), Some(&3));
//! stack.push(4);
//! assert_eq!(stack.pop(), Some(4));
//!
//! // A bounded stack rejects pushes once every slot is taken.
//! let mut bounded = BoundedStack::new(2);
//! bounded.push('x').unwrap();
//! bounded.push('y').unwrap();
//! assert!(matches!(bounded.push('z'), Err(Error::Overflow { capacity: 2 })));
//! assert_eq!(bounded.peek(), Some(&'y'));
//! ```
//!
//! Underflow is not an error: `pop` and `peek` on an empty stack return `None`.
pub mod bounded;
pub mod error;
pub mod lifo;
pub mod unbounded;

pub use bounded::BoundedStack;
pub use error::{Error, Result};
pub use lifo::Lifo;
pub use unbounded::Stack;
