use crate::catalog::types::{
    ListingQuery, ListingSort, StoreQuery, StoreSort, StudioQuery, StudioSort,
};
use crate::models::{Listing, Store, Studio};
use std::cmp::Ordering;

/// A query description over one kind of record.
///
/// Implementors supply the filter predicate and the ordering; [`run_query`]
/// applies them. Both must be total: every record either passes or not, and
/// every pair compares.
pub trait CatalogQuery {
    type Record;

    /// True if the record passes every active filter.
    fn matches(&self, record: &Self::Record) -> bool;

    /// Ordering of two matching records. `Equal` keeps seed order.
    fn compare(&self, a: &Self::Record, b: &Self::Record) -> Ordering;
}

/// Filter `records` with `query` and stably sort the survivors.
///
/// The source slice is left untouched; the result borrows from it.
pub fn run_query<'a, Q>(records: &'a [Q::Record], query: &Q) -> Vec<&'a Q::Record>
where
    Q: CatalogQuery,
{
    let mut hits: Vec<&Q::Record> = records.iter().filter(|r| query.matches(r)).collect();
    // sort_by is stable
    hits.sort_by(|a, b| query.compare(a, b));
    hits
}

/// Case-insensitive substring test. An empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn any_contains(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| contains_ignore_case(v, needle))
}

fn passes<T: PartialEq>(filter: Option<&T>, value: &T) -> bool {
    filter.is_none_or(|wanted| wanted == value)
}

impl CatalogQuery for ListingQuery {
    type Record = Listing;

    fn matches(&self, listing: &Listing) -> bool {
        listing.is_active()
            && (contains_ignore_case(&listing.title, &self.search)
                || contains_ignore_case(&listing.description, &self.search))
            && passes(self.city.as_ref(), &listing.city)
            && passes(self.category.as_ref(), &listing.category)
            && passes(self.condition.as_ref(), &listing.condition)
    }

    fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        match self.sort {
            ListingSort::Newest => b.created_at.cmp(&a.created_at),
            ListingSort::PriceLow => a.price.cmp(&b.price),
            ListingSort::PriceHigh => b.price.cmp(&a.price),
        }
    }
}

impl CatalogQuery for StoreQuery {
    type Record = Store;

    fn matches(&self, store: &Store) -> bool {
        (contains_ignore_case(&store.name, &self.search)
            || any_contains(&store.brands, &self.search))
            && passes(self.city.as_ref(), &store.city)
            && self
                .brand
                .as_ref()
                .is_none_or(|brand| store.brands.contains(brand))
    }

    fn compare(&self, a: &Store, b: &Store) -> Ordering {
        match self.sort {
            StoreSort::Featured => Ordering::Equal,
            StoreSort::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl CatalogQuery for StudioQuery {
    type Record = Studio;

    fn matches(&self, studio: &Studio) -> bool {
        (contains_ignore_case(&studio.name, &self.search)
            || contains_ignore_case(&studio.description, &self.search)
            || any_contains(&studio.equipment, &self.search))
            && passes(self.city.as_ref(), &studio.city)
    }

    fn compare(&self, a: &Studio, b: &Studio) -> Ordering {
        match self.sort {
            StudioSort::Rating => b.rating.total_cmp(&a.rating),
            StudioSort::PriceLow => a.hourly_rate.cmp(&b.hourly_rate),
            StudioSort::PriceHigh => b.hourly_rate.cmp(&a.hourly_rate),
        }
    }
}
