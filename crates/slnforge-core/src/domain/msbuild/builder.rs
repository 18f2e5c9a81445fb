//! Fluent single-instance builder over any [`TaskModel`].
//!
//! Mutation goes through typed closures, so "selector refers to something
//! that is not a member" is a compile error rather than a runtime failure.
//! [`ElementBuilder::build`] is a pure function of the current state: it can
//! be called repeatedly and performs the full validate-then-serialize pass
//! each time, caching nothing.

use super::fields::{to_element, MarkupError, TaskModel};
use super::xml::XmlElement;

/// Fluent builder for one instance of a serializable task type.
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder<T> {
    value: T,
}

impl<T: TaskModel + Default> ElementBuilder<T> {
    pub fn new() -> Self {
        Self {
            value: T::default(),
        }
    }

    /// Apply a typed mutation to the underlying instance.
    pub fn with(mut self, set: impl FnOnce(&mut T)) -> Self {
        set(&mut self.value);
        self
    }

    /// Validate every required field (recursively), then serialize.
    /// Fails with [`MarkupError::MissingRequiredField`] before producing
    /// any output.
    pub fn build(&self) -> Result<XmlElement, MarkupError> {
        to_element(&self.value)
    }

    /// Surrender the underlying instance for deferred serialization.
    pub fn into_inner(self) -> T {
        self.value
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
