//! End-to-end tests: load a seed through a source, build the catalog, query it.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use tunelax::models::CATEGORIES;
use tunelax::sources::{EmbeddedSeed, FileSeed};
use tunelax::{
    source_for, Catalog, CatalogError, City, Condition, ListingQuery, ListingSort, ListingStatus,
    RecordKind, SeedSource, StoreQuery, StudioQuery, StudioSort,
};

async fn embedded_catalog() -> Catalog {
    let seed = EmbeddedSeed::new().load().await.unwrap();
    Catalog::new(seed).unwrap()
}

fn ids<'a>(records: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    records.into_iter().collect()
}

#[tokio::test]
async fn istanbul_listings_cheapest_first() {
    let catalog = embedded_catalog().await;
    let query = ListingQuery::new()
        .city(City::Istanbul)
        .sort(ListingSort::PriceLow);

    let hits = catalog.listings(&query);

    assert_eq!(
        ids(hits.iter().map(|l| l.id.as_str())),
        vec!["listing-4", "listing-5", "listing-2", "listing-1"]
    );
}

#[tokio::test]
async fn results_are_sound_and_complete() {
    let catalog = embedded_catalog().await;

    for city in City::ALL {
        for condition in Condition::ALL {
            for category in CATEGORIES {
                let query = ListingQuery::new()
                    .city(city)
                    .condition(condition)
                    .category(category);
                let hits = catalog.listings(&query);

                let expected: Vec<&str> = catalog
                    .seed()
                    .listings
                    .iter()
                    .filter(|l| {
                        l.status == ListingStatus::Active
                            && l.city == city
                            && l.condition == condition
                            && l.category == category
                    })
                    .map(|l| l.id.as_str())
                    .collect();

                let mut got: Vec<&str> = hits.iter().map(|l| l.id.as_str()).collect();
                got.sort();
                let mut expected = expected;
                expected.sort();
                assert_eq!(got, expected, "{:?}", query);
            }
        }
    }
}

#[tokio::test]
async fn sold_and_pending_listings_are_hidden_from_every_query() {
    let mut seed = EmbeddedSeed::new().load().await.unwrap();
    seed.listings[2].status = ListingStatus::Sold;
    seed.listings[5].status = ListingStatus::Pending;
    let catalog = Catalog::new(seed).unwrap();

    let all = catalog.listings(&ListingQuery::default());
    assert_eq!(all.len(), 4);

    let bursa = catalog.listings(&ListingQuery::new().city(City::Bursa));
    assert!(bursa.is_empty());
}

#[tokio::test]
async fn unknown_ids_are_reported_not_defaulted() {
    let catalog = embedded_catalog().await;

    assert_eq!(
        catalog.store("store-42").unwrap_err(),
        CatalogError::NotFound {
            kind: RecordKind::Store,
            id: "store-42".to_string(),
        }
    );
    assert!(catalog.product("prod-42").is_err());
}

#[tokio::test]
async fn file_source_round_trips_through_the_catalog() {
    let embedded = EmbeddedSeed::new().load().await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    std::fs::write(&path, serde_json::to_string(&embedded).unwrap()).unwrap();

    let source = source_for(path.to_str()).unwrap();
    assert_eq!(source.source_name(), "file");

    let from_file = source.load().await.unwrap();
    assert_eq!(from_file, embedded);

    let catalog = Catalog::new(from_file).unwrap();
    let studios = catalog.studios(&StudioQuery::new().city(City::Bursa));
    assert_eq!(studios.len(), 1);
    assert_eq!(studios[0].name, "Bursa Sound Lab");
}

#[tokio::test]
async fn file_source_rejects_duplicate_ids_at_catalog_build() {
    let mut seed = EmbeddedSeed::new().load().await.unwrap();
    seed.studios[1].id = seed.studios[0].id.clone();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.json");
    std::fs::write(&path, serde_json::to_string(&seed).unwrap()).unwrap();

    let loaded = FileSeed::new(&path).load().await.unwrap();
    assert!(matches!(
        Catalog::new(loaded),
        Err(CatalogError::DuplicateId {
            kind: RecordKind::Studio,
            ..
        })
    ));
}

#[tokio::test]
async fn shared_catalog_answers_concurrent_queries_identically() {
    let catalog = Arc::new(embedded_catalog().await);

    let mut handles = Vec::new();
    for _ in 0..4 {
        let catalog = Arc::clone(&catalog);
        handles.push(tokio::spawn(async move {
            catalog
                .studios(&StudioQuery::new().sort(StudioSort::PriceHigh))
                .iter()
                .map(|s| s.id.clone())
                .collect::<Vec<_>>()
        }));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(results[0], vec!["studio-1", "studio-2", "studio-4", "studio-3"]);
}

#[tokio::test]
async fn store_search_and_brand_filter_combine() {
    let catalog = embedded_catalog().await;

    let hits = catalog.stores(&StoreQuery::new().search("muzik").city(City::Istanbul));
    assert_eq!(ids(hits.iter().map(|s| s.id.as_str())), vec!["store-1"]);

    let hits = catalog.stores(&StoreQuery::new().search("muzik").brand("Moog"));
    assert_eq!(ids(hits.iter().map(|s| s.id.as_str())), vec!["store-3"]);
}
