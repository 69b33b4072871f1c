//! Stack simulator service
//!
//! Wraps the bounded stack and turns every call into a [`Report`].

use std::num::NonZeroUsize;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ApplicationResult, Report, Status};
use crate::config::StackSettings;
use crate::domain::{BoundedStack, DEFAULT_CAPACITY};

/// Shown in place of the contents when the stack holds nothing.
pub const EMPTY_STACK_DISPLAY: &str = "Stack is empty.";

/// Bounded LIFO simulator with status reporting.
#[derive(Debug, Clone)]
pub struct StackSimulator {
    stack: BoundedStack,
    separator: String,
    status: Status,
}

impl Default for StackSimulator {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl StackSimulator {
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::new(capacity, StackSettings::default().separator)
    }

    pub fn new(capacity: NonZeroUsize, separator: impl Into<String>) -> Self {
        Self {
            stack: BoundedStack::with_capacity(capacity),
            separator: separator.into(),
            status: Status::default(),
        }
    }

    pub fn from_settings(settings: &StackSettings) -> ApplicationResult<Self> {
        Ok(Self::new(settings.capacity()?, settings.separator.clone()))
    }

    /// Empty the stack and clear the message.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> Report<()> {
        self.stack.clear();
        self.record(Report::new(Ok(()), |_| Status::neutral("")))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn push(&mut self, value: &str) -> Report<String> {
        let outcome = self.stack.push(value);
        self.record(Report::new(outcome, |v| {
            Status::success(format!("Successfully Pushed: {}", v))
        }))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn pop(&mut self) -> Report<String> {
        let outcome = self.stack.pop();
        self.record(Report::new(outcome, |v| {
            Status::success(format!("Successfully Popped: {}", v))
        }))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn peek(&mut self) -> Report<String> {
        let outcome = self.stack.peek().map(str::to_string);
        self.record(Report::new(outcome, |v| {
            Status::success(format!("Peeked (Top Element): {}", v))
        }))
    }

    /// Contents from top to bottom, or the empty sentinel.
    pub fn render(&self) -> String {
        if self.stack.is_empty() {
            EMPTY_STACK_DISPLAY.to_string()
        } else {
            self.stack.iter_top_down().join(&self.separator)
        }
    }

    /// Status of the most recent operation.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Elements from top to bottom.
    pub fn elements(&self) -> Vec<&str> {
        self.stack.iter_top_down().collect()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    fn record<T>(&mut self, report: Report<T>) -> Report<T> {
        debug!("stack: {:?} ({}/{})", report.status, self.len(), self.capacity());
        self.status = report.status.clone();
        report
    }
}
