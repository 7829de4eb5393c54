pub mod error;
pub mod query;
pub mod types;

pub use error::{CatalogError, RecordKind};
pub use query::{run_query, CatalogQuery};
pub use types::{ListingQuery, ListingSort, StoreQuery, StoreSort, StudioQuery, StudioSort};

use crate::models::{Listing, Product, Seed, Store, Studio};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Number of records per collection
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CatalogCounts {
    pub stores: usize,
    pub products: usize,
    pub listings: usize,
    pub studios: usize,
}

/// Read-only catalog over a validated seed.
///
/// Built once, then shared; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    seed: Seed,
}

impl Catalog {
    /// Validate the seed and wrap it.
    ///
    /// Rejects duplicate identities within a collection (product ids are
    /// checked across all stores) and ratings that are negative or NaN.
    pub fn new(seed: Seed) -> Result<Self, CatalogError> {
        check_unique(RecordKind::Store, seed.stores.iter().map(|s| s.id.as_str()))?;
        check_unique(
            RecordKind::Listing,
            seed.listings.iter().map(|l| l.id.as_str()),
        )?;
        check_unique(
            RecordKind::Studio,
            seed.studios.iter().map(|s| s.id.as_str()),
        )?;
        check_unique(
            RecordKind::Product,
            seed.stores
                .iter()
                .flat_map(|s| s.products.iter().map(|p| p.id.as_str())),
        )?;

        for store in &seed.stores {
            check_rating(RecordKind::Store, &store.id, store.rating)?;
        }
        for studio in &seed.studios {
            check_rating(RecordKind::Studio, &studio.id, studio.rating)?;
        }

        let catalog = Self { seed };
        let counts = catalog.counts();
        info!(
            "Catalog ready: {} stores ({} products), {} listings, {} studios",
            counts.stores, counts.products, counts.listings, counts.studios
        );
        Ok(catalog)
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn counts(&self) -> CatalogCounts {
        CatalogCounts {
            stores: self.seed.stores.len(),
            products: self.seed.stores.iter().map(|s| s.products.len()).sum(),
            listings: self.seed.listings.len(),
            studios: self.seed.studios.len(),
        }
    }

    /// Active listings matching `query`, ordered by its sort key
    pub fn listings(&self, query: &ListingQuery) -> Vec<&Listing> {
        let hits = run_query(&self.seed.listings, query);
        debug!("Listing query {:?} matched {}", query, hits.len());
        hits
    }

    pub fn stores(&self, query: &StoreQuery) -> Vec<&Store> {
        let hits = run_query(&self.seed.stores, query);
        debug!("Store query {:?} matched {}", query, hits.len());
        hits
    }

    pub fn studios(&self, query: &StudioQuery) -> Vec<&Studio> {
        let hits = run_query(&self.seed.studios, query);
        debug!("Studio query {:?} matched {}", query, hits.len());
        hits
    }

    /// Look up a listing by id, whatever its status
    pub fn listing(&self, id: &str) -> Result<&Listing, CatalogError> {
        self.seed
            .listings
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| CatalogError::not_found(RecordKind::Listing, id))
    }

    pub fn store(&self, id: &str) -> Result<&Store, CatalogError> {
        self.seed
            .stores
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::not_found(RecordKind::Store, id))
    }

    pub fn studio(&self, id: &str) -> Result<&Studio, CatalogError> {
        self.seed
            .studios
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::not_found(RecordKind::Studio, id))
    }

    pub fn product(&self, id: &str) -> Result<&Product, CatalogError> {
        self.seed
            .stores
            .iter()
            .flat_map(|s| s.products.iter())
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::not_found(RecordKind::Product, id))
    }

    /// Products of one store, in seed order
    pub fn store_products(&self, store_id: &str) -> Result<&[Product], CatalogError> {
        self.store(store_id).map(|s| s.products.as_slice())
    }

    /// Distinct brands across all stores, in first-seen order
    pub fn brands(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.seed
            .stores
            .iter()
            .flat_map(|s| s.brands.iter().map(String::as_str))
            .filter(|brand| seen.insert(*brand))
            .collect()
    }

    /// The first `limit` listings in seed order
    pub fn featured_listings(&self, limit: usize) -> &[Listing] {
        let end = limit.min(self.seed.listings.len());
        &self.seed.listings[..end]
    }
}

fn check_unique<'a>(
    kind: RecordKind,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_rating(kind: RecordKind, id: &str, rating: f64) -> Result<(), CatalogError> {
    if rating.is_finite() && rating >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidRating {
            kind,
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::embedded::EMBEDDED_SEED;
    use pretty_assertions::assert_eq;

    fn seed() -> Seed {
        serde_json::from_str(EMBEDDED_SEED).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(seed()).unwrap()
    }

    #[test]
    fn counts_cover_every_collection() {
        assert_eq!(
            catalog().counts(),
            CatalogCounts {
                stores: 4,
                products: 5,
                listings: 6,
                studios: 4,
            }
        );
    }

    #[test]
    fn lookup_by_id() {
        let catalog = catalog();
        assert_eq!(
            catalog.listing("listing-3").unwrap().title,
            "Fender Blues Junior IV"
        );
        assert_eq!(catalog.store("store-2").unwrap().name, "Ritim Dunyasi");
        assert_eq!(catalog.studio("studio-4").unwrap().name, "Bursa Sound Lab");
        assert_eq!(catalog.product("prod-5").unwrap().store_id, "store-4");
    }

    #[test]
    fn lookup_miss_is_not_found() {
        let catalog = catalog();
        assert_eq!(
            catalog.listing("listing-99"),
            Err(CatalogError::NotFound {
                kind: RecordKind::Listing,
                id: "listing-99".to_string(),
            })
        );
        let err = catalog.studio("nope").unwrap_err();
        assert_eq!(err.to_string(), "studio 'nope' not found");
        assert!(catalog.store_products("store-9").is_err());
    }

    #[test]
    fn sold_listing_is_still_addressable() {
        let mut seed = seed();
        seed.listings[0].status = crate::models::ListingStatus::Sold;
        let catalog = Catalog::new(seed).unwrap();

        assert!(catalog.listing("listing-1").is_ok());
        assert!(catalog
            .listings(&ListingQuery::default())
            .iter()
            .all(|l| l.id != "listing-1"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut seed = seed();
        seed.listings[1].id = "listing-1".to_string();
        assert_eq!(
            Catalog::new(seed).unwrap_err(),
            CatalogError::DuplicateId {
                kind: RecordKind::Listing,
                id: "listing-1".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_product_ids_across_stores_are_rejected() {
        let mut seed = seed();
        seed.stores[1].products[0].id = "prod-1".to_string();
        assert!(matches!(
            Catalog::new(seed),
            Err(CatalogError::DuplicateId {
                kind: RecordKind::Product,
                ..
            })
        ));
    }

    #[test]
    fn negative_or_nan_rating_is_rejected() {
        let mut seed = seed();
        seed.studios[2].rating = -1.0;
        assert!(matches!(
            Catalog::new(seed),
            Err(CatalogError::InvalidRating { .. })
        ));

        let mut seed = self::seed();
        seed.stores[0].rating = f64::NAN;
        assert!(Catalog::new(seed).is_err());
    }

    #[test]
    fn brands_are_distinct_in_first_seen_order() {
        let mut seed = seed();
        seed.stores[1].brands.push("Fender".to_string());
        let catalog = Catalog::new(seed).unwrap();
        let brands = catalog.brands();

        assert_eq!(
            &brands[..5],
            &["Fender", "Gibson", "Marshall", "Roland", "Pearl"]
        );
        assert_eq!(brands.len(), 16);
        assert_eq!(brands.iter().filter(|b| **b == "Fender").count(), 1);
    }

    #[test]
    fn featured_listings_are_capped() {
        let catalog = catalog();
        assert_eq!(catalog.featured_listings(2).len(), 2);
        assert_eq!(catalog.featured_listings(2)[0].id, "listing-1");
        assert_eq!(catalog.featured_listings(50).len(), 6);
        assert!(catalog.featured_listings(0).is_empty());
    }

    #[test]
    fn store_products_in_seed_order() {
        let catalog = catalog();
        let products: Vec<&str> = catalog
            .store_products("store-1")
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            products,
            vec!["Fender Player Stratocaster", "Marshall JCM800 Head"]
        );
    }

    #[test]
    fn catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
