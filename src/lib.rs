//! Catalog query engine for the TuneLax music-gear marketplace.
//!
//! A [`Catalog`] wraps a read-only [`Seed`] of official stores, second-hand
//! listings and rentable studios, and answers filter-and-sort queries over
//! them. Seeds come from a [`SeedSource`]: the bundled document, a file, or
//! an HTTP URL.

pub mod catalog;
pub mod models;
pub mod sources;

pub use catalog::{
    Catalog, CatalogError, ListingQuery, ListingSort, RecordKind, StoreQuery, StoreSort,
    StudioQuery, StudioSort,
};
pub use models::{City, Condition, Listing, ListingStatus, Product, Seed, Store, Studio};
pub use sources::{source_for, SeedSource};
