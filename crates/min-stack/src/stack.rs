//! The min-tracking stack.
//!
//! Each frame pairs a pushed value with the minimum of every value at or
//! below it. The minimum of the whole stack is therefore always the `min`
//! of the top frame, and popping restores the previous minimum for free.

use crate::config::StackConfig;
use crate::error::{Error, Operation, Result};

/// Element type stored on the stack.
pub type Value = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    value: Value,
    // Minimum of this frame's value and every frame below it.
    min: Value,
}

/// A LIFO stack of integers with O(1) `push`, `pop`, `top`, and `get_min`.
///
/// # Examples
///
/// ```
/// use min_stack::MinStack;
///
/// let mut stack = MinStack::new();
/// stack.push(5);
/// stack.push(3);
/// stack.push(7);
/// assert_eq!(stack.get_min().unwrap(), 3);
/// assert_eq!(stack.top().unwrap(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinStack {
    frames: Vec<Frame>,
    max_depth: Option<usize>,
}

impl MinStack {
    /// Creates a new, empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            max_depth: None,
        }
    }

    /// Creates an empty stack from validated configuration.
    ///
    /// A `max_depth` bound only affects [`MinStack::try_push`].
    pub fn with_config(config: &StackConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            initial_capacity = config.initial_capacity,
            max_depth = ?config.max_depth,
            "Building stack from config"
        );
        Ok(Self {
            frames: Vec::with_capacity(config.initial_capacity),
            max_depth: config.max_depth,
        })
    }

    /// Pushes `value` onto the stack.
    pub fn push(&mut self, value: Value) {
        let min = match self.frames.last() {
            Some(frame) => frame.min.min(value),
            None => value,
        };
        self.frames.push(Frame { value, min });
        tracing::trace!(value, min, depth = self.frames.len(), "push");
    }

    /// Pushes `value`, honouring the configured `max_depth` bound.
    ///
    /// Returns [`Error::DepthExceeded`] and leaves the stack unchanged when
    /// the stack is already full. Without a bound this never fails.
    pub fn try_push(&mut self, value: Value) -> Result<()> {
        if let Some(max_depth) = self.max_depth
            && self.frames.len() >= max_depth
        {
            tracing::debug!(value, max_depth, "Rejected push on full stack");
            return Err(Error::DepthExceeded { max_depth });
        }
        self.push(value);
        Ok(())
    }

    /// Removes the top element and returns it.
    pub fn pop(&mut self) -> Result<Value> {
        let frame = self.frames.pop().ok_or_else(|| reject(Operation::Pop))?;
        tracing::trace!(
            value = frame.value,
            depth = self.frames.len(),
            min = ?self.frames.last().map(|f| f.min),
            "pop"
        );
        Ok(frame.value)
    }

    /// Returns the most recently pushed element without removing it.
    pub fn top(&self) -> Result<Value> {
        self.last(Operation::Top).map(|frame| frame.value)
    }

    /// Returns the smallest element currently on the stack.
    pub fn get_min(&self) -> Result<Value> {
        self.last(Operation::GetMin).map(|frame| frame.min)
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the configured `max_depth` bound, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Removes every element, keeping the allocation and any depth bound.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    fn last(&self, operation: Operation) -> Result<&Frame> {
        self.frames.last().ok_or_else(|| reject(operation))
    }
}

fn reject(operation: Operation) -> Error {
    tracing::debug!(%operation, "Rejected operation on empty stack");
    Error::empty_stack(operation)
}

impl Extend<Value> for MinStack {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<Value> for MinStack {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
