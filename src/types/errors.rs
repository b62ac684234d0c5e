//! Error types for the type-system core
//!
//! [`TypeError`] has exactly two kinds:
//!
//! - [`TypeError::Internal`]: a contract violation by the caller (asking for the
//!   rank of a struct, finalizing a union, reading the layout of a struct that
//!   is still being built). It signals a compiler bug and is never recoverable.
//! - [`TypeError::Unimplemented`]: a language feature this layer does not
//!   handle yet, reported against a source position.
//!
//! Not-found results of field lookups are `None`, never an error.

use crate::types::ty::SourceLocation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("internal error: {message}")]
    Internal { message: String },

    #[error("unimplemented: {feature} at line {}", .location.line)]
    Unimplemented {
        feature: String,
        location: SourceLocation,
    },
}

impl TypeError {
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        TypeError::Internal {
            message: message.into(),
        }
    }

    pub(crate) fn unimplemented(feature: impl Into<String>, location: SourceLocation) -> Self {
        TypeError::Unimplemented {
            feature: feature.into(),
            location,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            TypeError::Unimplemented { location, .. } => Some(location),
            TypeError::Internal { .. } => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, TypeError::Internal { .. })
    }

    pub fn is_unimplemented(&self) -> bool {
        matches!(self, TypeError::Unimplemented { .. })
    }
}

pub type Result<T> = std::result::Result<T, TypeError>;
