//! Error types for typekind
//!
//! Every failure in the library is one variant of [`Error`]. All of them are
//! raised synchronously at the call site of the offending operation; nothing
//! is deferred, batched or retried.
//!
//! | Category | Variants |
//! |----------|----------|
//! | Declaration | `InvalidKindDeclaration`, `ReservedKind` |
//! | Type | `TypeMismatch`, `Unclassifiable` |
//! | Structural | `SealViolation`, `UndeclaredAttribute`, `Destroyed` |
//! | Configuration | `Config` |

use crate::kind::Kind;
use thiserror::Error;

/// Result type alias for typekind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for classification and validated attributes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An attribute was declared with a kind that cannot be assigned
    #[error("invalid kind declaration for '{attribute}': {kind} ({reason})")]
    InvalidKindDeclaration {
        /// Attribute being declared
        attribute: String,
        /// The rejected kind label
        kind: String,
        /// Why the label was rejected
        reason: String,
    },

    /// A reserved sentinel label was used where a declarable kind is required
    #[error("type cannot be: {kind}")]
    ReservedKind {
        /// The reserved kind (`undefined` or `null`)
        kind: Kind,
    },

    /// An initialized value of the wrong kind was assigned to an attribute
    #[error("key: {attribute}, value: {actual} ({value}), is expected to be: {expected} type.")]
    TypeMismatch {
        /// Attribute being written
        attribute: String,
        /// Classified kind of the rejected value
        actual: Kind,
        /// Rendered rejected value
        value: String,
        /// Declared kind of the attribute
        expected: Kind,
    },

    /// A value matched none of the recognized kinds
    #[error("unclassifiable value: {value}")]
    Unclassifiable {
        /// Rendered value
        value: String,
    },

    /// A property outside the declared set was added to a sealed entity
    #[error("Can't add property {property}, object is not extensible")]
    SealViolation {
        /// The rejected property name
        property: String,
    },

    /// A property outside the declared set was read
    #[error("attribute not declared: {attribute}")]
    UndeclaredAttribute {
        /// The requested attribute name
        attribute: String,
    },

    /// An attribute was read after the entity was torn down
    #[error("entity destroyed: cannot read '{attribute}'")]
    Destroyed {
        /// The requested attribute name
        attribute: String,
    },

    /// A schema configuration could not be read or parsed
    #[error("invalid schema config: {reason}")]
    Config {
        /// What went wrong
        reason: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// True for errors about a value's kind, as opposed to an entity's shape
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Error::TypeMismatch { .. } | Error::Unclassifiable { .. }
        )
    }

    /// True for errors about an entity's shape or lifecycle
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::SealViolation { .. }
                | Error::UndeclaredAttribute { .. }
                | Error::Destroyed { .. }
        )
    }
}
