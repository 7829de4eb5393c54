use crate::models::{City, Condition};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordering for marketplace listings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ListingSort {
    /// Most recently created first
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
}

/// Ordering for official stores
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StoreSort {
    /// Seed order
    #[default]
    Featured,
    Rating,
}

/// Ordering for studios. Price sorts use the hourly rate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StudioSort {
    #[default]
    Rating,
    PriceLow,
    PriceHigh,
}

fn parse_sort<T: Copy>(s: &str, options: &[(&str, T)]) -> Result<T, String> {
    options
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, value)| *value)
        .ok_or_else(|| {
            let names: Vec<&str> = options.iter().map(|(name, _)| *name).collect();
            format!("unknown sort '{}', expected one of: {}", s, names.join(", "))
        })
}

impl FromStr for ListingSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sort(
            s,
            &[
                ("newest", Self::Newest),
                ("price-low", Self::PriceLow),
                ("price-high", Self::PriceHigh),
            ],
        )
    }
}

impl FromStr for StoreSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sort(s, &[("featured", Self::Featured), ("rating", Self::Rating)])
    }
}

impl FromStr for StudioSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sort(
            s,
            &[
                ("rating", Self::Rating),
                ("price-low", Self::PriceLow),
                ("price-high", Self::PriceHigh),
            ],
        )
    }
}

/// Query parameters for marketplace listings.
/// Only active listings are ever returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingQuery {
    /// Case-insensitive text matched against title and description
    pub search: String,
    pub city: Option<City>,
    /// Exact category label, e.g. "Drums"
    pub category: Option<String>,
    pub condition: Option<Condition>,
    pub sort: ListingSort,
}

/// Query parameters for official stores
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreQuery {
    /// Case-insensitive text matched against name and brands
    pub search: String,
    pub city: Option<City>,
    /// Exact brand the store must carry
    pub brand: Option<String>,
    pub sort: StoreSort,
}

/// Query parameters for studios
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudioQuery {
    /// Case-insensitive text matched against name, description and equipment
    pub search: String,
    pub city: Option<City>,
    pub sort: StudioSort,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn sort(mut self, sort: ListingSort) -> Self {
        self.sort = sort;
        self
    }
}

impl StoreQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn sort(mut self, sort: StoreSort) -> Self {
        self.sort = sort;
        self
    }
}

impl StudioQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    pub fn sort(mut self, sort: StudioSort) -> Self {
        self.sort = sort;
        self
    }
}
