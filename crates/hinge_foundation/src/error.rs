//! Error types for hinge.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Absence of optional data and unknown handles are not errors; they surface
//! as `Option`. Errors are reserved for calls that cannot be honoured.

use std::fmt;

use thiserror::Error;

use crate::entity::{EntityId, EntityKind};

/// The main error type for hinge operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(id: EntityId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates a wrong kind error.
    #[must_use]
    pub fn wrong_kind(id: EntityId, expected: EntityKind, actual: EntityKind) -> Self {
        Self::new(ErrorKind::WrongKind {
            id,
            expected,
            actual,
        })
    }

    /// Creates an already bound error.
    #[must_use]
    pub fn already_bound(id: EntityId) -> Self {
        Self::new(ErrorKind::AlreadyBound(id))
    }

    /// Creates a dangling parent error.
    #[must_use]
    pub fn dangling_parent(parent: EntityId) -> Self {
        Self::new(ErrorKind::DanglingParent(parent))
    }

    /// Creates a composition rejected error.
    #[must_use]
    pub fn composition_rejected(feature: impl Into<String>, missing: impl Into<String>) -> Self {
        Self::new(ErrorKind::CompositionRejected {
            feature: feature.into(),
            missing: missing.into(),
        })
    }

    /// Creates an unsupported operation error.
    #[must_use]
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported(operation.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The id is not known to the registry.
    #[error("entity not found: {0:?}")]
    EntityNotFound(EntityId),

    /// The id names an entity of a different kind than the operation needs.
    #[error("entity {id:?} is a {actual}, expected a {expected}")]
    WrongKind {
        /// The id that was used.
        id: EntityId,
        /// The kind the operation needed.
        expected: EntityKind,
        /// The kind actually registered.
        actual: EntityKind,
    },

    /// The slot already holds a native object.
    #[error("entity {0:?} is already bound to a native object")]
    AlreadyBound(EntityId),

    /// A child was registered under a parent id the registry does not know.
    #[error("parent entity {0:?} is not registered")]
    DanglingParent(EntityId),

    /// A feature list does not satisfy the requirements of one of its members.
    #[error("feature composition rejected: {feature} requires {missing}")]
    CompositionRejected {
        /// The feature whose requirement is unmet.
        feature: String,
        /// The missing required feature.
        missing: String,
    },

    /// Two distinct types claimed the same data label.
    #[error("data label collision on {label}: {existing} and {incoming}")]
    DataLabelCollision {
        /// The contested label.
        label: &'static str,
        /// Type name registered first.
        existing: &'static str,
        /// Type name that tried to claim the label.
        incoming: &'static str,
    },

    /// The backend cannot perform this operation on this entity.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Backend or plugin that raised the error.
    pub backend: Option<String>,
    /// Chain of operations that led to the error, outermost first.
    pub operations: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend name.
    #[must_use]
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }

    /// Adds an operation frame.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operations.push(operation.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(backend) = &self.backend {
            write!(f, "in backend {backend}")?;
        }
        for operation in &self.operations {
            write!(f, "\n  during {operation}")?;
        }
        Ok(())
    }
}
