use primer_common::error::PrimerError;
use tracing::debug;

use crate::collections::stack::DEFAULT_CAPACITY;

/// Binary max-heap of integers with a fixed maximum size.
///
/// Stored as an implicit tree in a `Vec`: the children of index `i` live
/// at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxHeap {
    max_size: usize,
    items: Vec<i32>,
}

impl MaxHeap {
    /// `max_size` bounds inserts; storage grows on demand.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            items: Vec::with_capacity(max_size.min(DEFAULT_CAPACITY)),
        }
    }

    pub fn insert(&mut self, element: i32) -> Result<(), PrimerError> {
        if self.items.len() >= self.max_size {
            return Err(PrimerError::HeapFull(self.max_size));
        }
        self.items.push(element);
        self.sift_up(self.items.len() - 1);
        debug!(element, len = self.items.len(), "heap insert");
        Ok(())
    }

    pub fn extract_max(&mut self) -> Result<i32, PrimerError> {
        if self.items.is_empty() {
            return Err(PrimerError::HeapEmpty);
        }
        let popped: i32 = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        debug!(popped, len = self.items.len(), "heap extract");
        Ok(popped)
    }

    pub fn peek(&self) -> Option<i32> {
        self.items.first().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// One line per node that has at least one child.
    pub fn describe(&self) -> Vec<String> {
        (0..self.items.len() / 2)
            .map(|i| {
                let mut line: String = format!(
                    "PARENT : {} LEFT CHILD : {}",
                    self.items[i],
                    self.items[left_child(i)]
                );
                if let Some(right) = self.items.get(right_child(i)) {
                    line.push_str(&format!(" RIGHT CHILD : {right}"));
                }
                line
            })
            .collect()
    }

    fn sift_up(&mut self, mut current: usize) {
        while current > 0 {
            let parent: usize = parent(current);
            if self.items[current] <= self.items[parent] {
                break;
            }
            self.items.swap(current, parent);
            current = parent;
        }
    }

    fn sift_down(&mut self, mut current: usize) {
        let len: usize = self.items.len();
        loop {
            let mut largest: usize = current;
            for child in [left_child(current), right_child(current)] {
                if child < len && self.items[child] > self.items[largest] {
                    largest = child;
                }
            }
            if largest == current {
                return;
            }
            self.items.swap(current, largest);
            current = largest;
        }
    }
}

fn parent(pos: usize) -> usize {
    (pos - 1) / 2
}

fn left_child(pos: usize) -> usize {
    2 * pos + 1
}

fn right_child(pos: usize) -> usize {
    2 * pos + 2
}
