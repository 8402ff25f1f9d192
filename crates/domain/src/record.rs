//! Traits shared by every record kind.
//!
//! A record kind comes in three shapes: the stored record (carrying its
//! store-assigned id), the *draft* accepted on creation, and the *patch*
//! accepted on partial update. These traits let the application layer
//! handle all kinds through a single generic service.

use std::fmt::Display;

use crate::error::ValidationError;

/// A stored record with an identity.
pub trait Record {
    /// Typed identifier of this record kind.
    type Id: Copy + Display + Send + Sync;

    /// Human-readable kind name used in not-found errors.
    const KIND: &'static str;

    /// The store-assigned identifier.
    fn id(&self) -> Self::Id;
}

/// Input that must satisfy declared bounds before reaching the store.
pub trait Validate {
    /// Check every supplied field against its bound.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Overwrite `slot` when a patch supplied a value.
pub(crate) fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
