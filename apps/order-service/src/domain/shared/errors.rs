//! Domain errors shared across bounded contexts.

use std::fmt;

/// Domain-level errors that can occur in business logic.
///
/// The taxonomy maps directly onto the HTTP surface: validation failures
/// become 400 responses, unresolvable ids become 404 responses, and store
/// failures become 500 responses. No retries happen at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input (empty item list, unknown status value, negative price).
    Validation {
        /// Field with the invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// Entity could not be resolved by id.
    NotFound {
        /// Entity type (e.g., "order", "menu item").
        entity: &'static str,
        /// Offending identifier.
        id: String,
    },

    /// Document store unreachable or a query failed.
    Infrastructure {
        /// Error message from the store.
        message: String,
    },
}

impl DomainError {
    /// Build a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build a not-found error for an entity id.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Build an infrastructure error.
    #[must_use]
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::Infrastructure {
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::NotFound { entity, id } => {
                write!(f, "{entity} not found or unavailable: {id}")
            }
            Self::Infrastructure { message } => {
                write!(f, "Store failure: {message}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
