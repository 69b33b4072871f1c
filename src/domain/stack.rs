//! Bounded LIFO stack of string tokens

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use crate::domain::DomainError;

/// Capacity used when nothing else is configured.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Last-in-first-out container with a fixed upper bound.
///
/// The last element of `elements` is the top of the stack.
/// Invariant: `elements.len() <= capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack {
    elements: Vec<String>,
    capacity: NonZeroUsize,
}

impl Default for BoundedStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl BoundedStack {
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity.get()),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity.get()
    }

    /// Push a token onto the stack.
    ///
    /// The token is trimmed first. Blank tokens and pushes onto a full stack
    /// are rejected without touching the contents. Returns the stored token.
    #[instrument(level = "debug", skip(self))]
    pub fn push(&mut self, value: &str) -> Result<String, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::EmptyInput);
        }
        if self.is_full() {
            debug!("push rejected: {} of {} slots used", self.len(), self.capacity);
            return Err(DomainError::StackOverflow {
                capacity: self.capacity.get(),
            });
        }
        self.elements.push(value.to_string());
        Ok(value.to_string())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn pop(&mut self) -> Result<String, DomainError> {
        self.elements.pop().ok_or(DomainError::StackUnderflow)
    }

    pub fn peek(&self) -> Result<&str, DomainError> {
        self.elements
            .last()
            .map(String::as_str)
            .ok_or(DomainError::EmptyStack)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Elements ordered from top to bottom.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().rev().map(String::as_str)
    }
}
