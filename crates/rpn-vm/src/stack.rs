//! Calculator operand stack.
//!
//! The stack holds `f64` operands up to a fixed capacity. A full stack is a
//! recoverable condition: pushes past the bound are refused and leave the
//! stack untouched.

use smallvec::SmallVec;

use crate::error::StackError;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Operands taken off the stack by one operation, bottom first.
pub type Operands = SmallVec<[f64; 2]>;

/// The calculator operand stack.
#[derive(Clone, Debug)]
pub struct Stack {
    items: Vec<f64>,
    capacity: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Create an empty stack with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty stack holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Get the number of values on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The fixed upper bound on `len()`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if another push would be refused.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Push a value onto the stack.
    pub fn push(&mut self, value: f64) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow);
        }
        self.items.push(value);
        Ok(())
    }

    /// Pop a value from the stack.
    pub fn pop(&mut self) -> Result<f64, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    /// Peek at the top of stack without removing it.
    pub fn top(&self) -> Result<f64, StackError> {
        self.items.last().copied().ok_or(StackError::Underflow)
    }

    /// Clear the stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get a slice of all values (bottom to top).
    pub fn as_slice(&self) -> &[f64] {
        &self.items
    }

    /// Pop `count` values at once, returned bottom first.
    ///
    /// Nothing is removed unless all `count` values are present.
    pub fn pop_many(&mut self, count: usize) -> Result<Operands, StackError> {
        let len = self.items.len();
        if count > len {
            return Err(StackError::Underflow);
        }
        Ok(self.items.drain(len - count..).collect())
    }

    /// Put back operands previously taken with [`Stack::pop_many`].
    ///
    /// The slots they came from are still free, so this cannot overflow.
    pub fn restore(&mut self, operands: Operands) {
        debug_assert!(self.items.len() + operands.len() <= self.capacity);
        self.items.extend(operands);
    }

    /// Fixed-height view of the stack, `slots` positions high.
    ///
    /// Positions run from `slots` down to 1. Position `pos` shows
    /// `items[len - pos]` when `pos <= len` and `0.0` otherwise, so position 1
    /// is always the top of stack.
    pub fn window(&self, slots: usize) -> Vec<(usize, f64)> {
        let len = self.items.len();
        (1..=slots)
            .rev()
            .map(|pos| {
                let value = if pos <= len { self.items[len - pos] } else { 0.0 };
                (pos, value)
            })
            .collect()
    }
}
