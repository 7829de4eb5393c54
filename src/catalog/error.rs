use std::fmt;
use thiserror::Error;

/// Kind of record held by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Listing,
    Store,
    Studio,
    Product,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Listing => "listing",
            RecordKind::Store => "store",
            RecordKind::Studio => "studio",
            RecordKind::Product => "product",
        };
        f.write_str(name)
    }
}

/// Errors raised by catalog construction and lookups.
/// List queries never fail; an empty result is a normal outcome.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No record with this identity exists.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: RecordKind, id: String },

    /// The seed holds two records with the same identity.
    #[error("duplicate {kind} id '{id}' in seed")]
    DuplicateId { kind: RecordKind, id: String },

    /// A rating is negative or not a finite number.
    #[error("{kind} '{id}' has an invalid rating")]
    InvalidRating { kind: RecordKind, id: String },
}

impl CatalogError {
    pub(crate) fn not_found(kind: RecordKind, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
