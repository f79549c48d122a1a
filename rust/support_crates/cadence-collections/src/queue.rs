//! FIFO queue used for level-order traversals.

use std::collections::VecDeque;

use cadence_common::{Result, error::Error};

/// First-in first-out queue.
///
/// Reading or removing the front of an empty queue is an error rather than a `None`,
/// matching the other containers of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the front value.
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items
            .pop_front()
            .ok_or_else(|| Error::empty_container("dequeue"))
    }

    /// Returns the front value without removing it.
    ///
    /// # Errors
    ///
    /// Returns an empty-container error when the queue is empty.
    pub fn front(&self) -> Result<&T> {
        self.items
            .front()
            .ok_or_else(|| Error::empty_container("front"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}
