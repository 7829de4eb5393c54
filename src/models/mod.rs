use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cities the marketplace operates in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum City {
    Istanbul,
    Bursa,
}

impl City {
    pub const ALL: [City; 2] = [City::Istanbul, City::Bursa];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Istanbul => "Istanbul",
            City::Bursa => "Bursa",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|city| city.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown city '{}'", s))
    }
}

/// Condition of a second-hand item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
    ];

    /// Wire value, as used in the seed document
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like-new",
            Condition::Good => "good",
            Condition::Fair => "fair",
        }
    }

    /// Canonical English label
    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown condition '{}'", s))
    }
}

/// Lifecycle state of a marketplace listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Sold,
    Pending,
}

/// Listing categories offered by the category picker
pub const CATEGORIES: [&str; 9] = [
    "Guitars",
    "Drums",
    "Keyboards",
    "Amplifiers",
    "DJ Equipment",
    "Recording",
    "Accessories",
    "Wind Instruments",
    "String Instruments",
];

/// Peer-to-peer second-hand listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub description: String,
    /// Asking price in whole lira
    pub price: u64,
    pub condition: Condition,
    pub category: String,
    pub city: City,
    pub images: Vec<String>,
    pub status: ListingStatus,
    pub created_at: NaiveDate,
    pub views: u32,
}

impl Listing {
    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }
}

/// Product carried by an official store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub brand: String,
    pub image: String,
    pub stock: u32,
}

/// Verified official store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub instagram: String,
    pub city: City,
    pub is_verified: bool,
    pub brands: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    pub products: Vec<Product>,
}

/// Rentable recording or rehearsal studio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Studio {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub address: String,
    pub city: City,
    pub description: String,
    pub hourly_rate: u64,
    pub daily_rate: u64,
    pub equipment: Vec<String>,
    pub room_size: String,
    pub images: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
}

/// The complete seed document: every record the catalog serves
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    #[serde(default)]
    pub stores: Vec<Store>,
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub studios: Vec<Studio>,
}
