//! # Collections
//!
//! Bounded containers and sorting helpers.

pub mod heap;
pub mod sort;
pub mod stack;

pub use heap::MaxHeap;
pub use stack::BoundedStack;
