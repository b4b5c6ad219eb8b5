use primer_common::error::PrimerError;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 10;

/// LIFO stack that refuses to grow past a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    capacity: usize,
    items: Vec<T>,
}

impl<T> BoundedStack<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` is a limit on pushes. Only a small prefix is allocated up
    /// front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
        }
    }

    pub fn push(&mut self, item: T) -> Result<(), PrimerError> {
        if self.items.len() >= self.capacity {
            return Err(PrimerError::StackFull(self.capacity));
        }
        self.items.push(item);
        debug!(len = self.items.len(), "stack push");
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, PrimerError> {
        let item: T = self.items.pop().ok_or(PrimerError::StackEmpty)?;
        debug!(len = self.items.len(), "stack pop");
        Ok(item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
