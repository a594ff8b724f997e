//! Core domain types for restaurant data.
//!
//! A `Restaurant` is immutable after construction. Fields the source data may
//! omit are modeled with `Option<T>`; the "No Name" / "No Price" style
//! placeholders the tool shows the operator exist only in the display
//! helpers, never in the data itself.

use std::fmt;

/// Price tier of a restaurant, one to four dollar signs.
///
/// A closed set, so an enum rather than a free-form string: a filter value
/// either parses into one of these four tiers or is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceTier {
    Dollar,
    DollarDollar,
    TripleDollar,
    QuadDollar,
}

impl PriceTier {
    /// Parse the canonical dollar-sign form. Exact match only: anything that
    /// is not `$`, `$$`, `$$$`, or `$$$$` is `None`.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "$" => Some(PriceTier::Dollar),
            "$$" => Some(PriceTier::DollarDollar),
            "$$$" => Some(PriceTier::TripleDollar),
            "$$$$" => Some(PriceTier::QuadDollar),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> &'static str {
        match self {
            PriceTier::Dollar => "$",
            PriceTier::DollarDollar => "$$",
            PriceTier::TripleDollar => "$$$",
            PriceTier::QuadDollar => "$$$$",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// One restaurant listing.
///
/// The rating is the only field that must be present in the source data:
/// downstream filtering compares it numerically, so construction fails fast
/// when it is missing instead of substituting a default (see
/// `parser::restaurant_from_business`).
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub price: Option<PriceTier>,
    /// Rating from 1.0 to 5.0.
    pub rating: f32,
    /// First category title from the source, e.g. "Pizza".
    pub cuisine: Option<String>,
    pub url: Option<String>,
}

impl Restaurant {
    /// Both coordinates, when the listing has them. Opening a map link
    /// requires the pair; a lone latitude is as useless as none.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// One-line summary shown in result listings:
    /// `name, cuisine, rating, price`, with placeholders for absent fields.
    pub fn summary(&self) -> String {
        format!(
            "{}, {}, {:.1}, {}",
            self.name.as_deref().unwrap_or("No Name"),
            self.cuisine.as_deref().unwrap_or("No Type"),
            self.rating,
            self.price
                .map(|p| p.as_symbol().to_string())
                .unwrap_or_else(|| "No Price".to_string()),
        )
    }
}
