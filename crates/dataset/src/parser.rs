//! Decoding of the search payload into domain types.
//!
//! The wire shape is the Yelp `/v3/businesses/search` response, which is also
//! the cache file format:
//!
//! ```json
//! { "businesses": [ { "name": "...", "rating": 4.5, "price": "$$",
//!   "coordinates": {"latitude": 42.2, "longitude": -83.7},
//!   "location": {"display_address": ["123 Main St", "Ann Arbor, MI"]},
//!   "categories": [{"title": "Pizza"}], "url": "..." } ] }
//! ```
//!
//! Every field except the rating may be absent and becomes `None` on the
//! domain type. A missing rating fails construction: the filter pipeline
//! compares ratings numerically and a defaulted value would silently satisfy
//! (or fail) thresholds it never earned.

use crate::error::{DatasetError, Result};
use crate::types::{PriceTier, Restaurant};
use serde::{Deserialize, Serialize};

/// Top-level search payload, as returned by the API and stored in cache files.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub businesses: Vec<Business>,
}

/// One business entry in a search payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct Business {
    pub name: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub location: Option<Location>,
    pub price: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub display_address: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Category {
    pub title: Option<String>,
}

/// Convert one decoded business into a `Restaurant`.
///
/// Fails with `MissingField` when the rating is absent and `InvalidValue`
/// when it falls outside [1.0, 5.0]. A price string that is not one of the
/// four canonical tiers degrades to `None` (shown as "No Price"); only the
/// rating carries the fail-fast contract.
pub fn restaurant_from_business(business: Business) -> Result<Restaurant> {
    let display_name = business.name.clone().unwrap_or_else(|| "No Name".to_string());

    let rating = business.rating.ok_or(DatasetError::MissingField {
        field: "rating",
        name: display_name.clone(),
    })?;
    if !rating.is_finite() || !(1.0..=5.0).contains(&rating) {
        return Err(DatasetError::InvalidValue {
            field: "rating",
            value: format!("{rating} (business {display_name:?})"),
        });
    }

    let (latitude, longitude) = match business.coordinates {
        Some(c) => (c.latitude, c.longitude),
        None => (None, None),
    };

    let address = business.location.and_then(|loc| {
        if loc.display_address.is_empty() {
            None
        } else {
            Some(loc.display_address.join(", "))
        }
    });

    // First category only; the rest are ignored.
    let cuisine = business
        .categories
        .into_iter()
        .next()
        .and_then(|c| c.title);

    Ok(Restaurant {
        name: business.name,
        latitude,
        longitude,
        address,
        price: business.price.as_deref().and_then(PriceTier::from_symbol),
        rating: rating as f32,
        cuisine,
        url: business.url,
    })
}

/// Decode a full search payload into restaurants, failing on the first
/// malformed record.
pub fn restaurants_from_payload(payload: SearchPayload) -> Result<Vec<Restaurant>> {
    payload
        .businesses
        .into_iter()
        .map(restaurant_from_business)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Business {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_business_decodes() {
        let business = decode(
            r#"{
                "name": "Tony's",
                "coordinates": {"latitude": 42.28, "longitude": -83.74},
                "location": {"display_address": ["123 Main St", "Ann Arbor, MI"]},
                "price": "$$",
                "rating": 4.5,
                "categories": [{"title": "Pizza"}, {"title": "Italian"}],
                "url": "https://example.com/tonys"
            }"#,
        );

        let r = restaurant_from_business(business).unwrap();
        assert_eq!(r.name.as_deref(), Some("Tony's"));
        assert_eq!(r.coordinates(), Some((42.28, -83.74)));
        assert_eq!(r.address.as_deref(), Some("123 Main St, Ann Arbor, MI"));
        assert_eq!(r.price, Some(PriceTier::DollarDollar));
        assert_eq!(r.rating, 4.5);
        // First category wins.
        assert_eq!(r.cuisine.as_deref(), Some("Pizza"));
    }

    #[test]
    fn test_missing_rating_is_fatal() {
        let business = decode(r#"{"name": "No Stars Diner"}"#);
        let err = restaurant_from_business(business).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingField { field: "rating", .. }
        ));
    }

    #[test]
    fn test_out_of_domain_rating_is_fatal() {
        let business = decode(r#"{"name": "Zero", "rating": 0.0}"#);
        let err = restaurant_from_business(business).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidValue { field: "rating", .. }));
    }

    #[test]
    fn test_absent_fields_become_none() {
        let business = decode(r#"{"rating": 3.5}"#);
        let r = restaurant_from_business(business).unwrap();
        assert_eq!(r.name, None);
        assert_eq!(r.coordinates(), None);
        assert_eq!(r.address, None);
        assert_eq!(r.price, None);
        assert_eq!(r.cuisine, None);
        assert_eq!(r.url, None);
    }

    #[test]
    fn test_unrecognized_price_degrades_to_none() {
        let business = decode(r#"{"rating": 4.0, "price": "€€€"}"#);
        let r = restaurant_from_business(business).unwrap();
        assert_eq!(r.price, None);
    }

    #[test]
    fn test_empty_categories_give_no_cuisine() {
        let business = decode(r#"{"rating": 4.0, "categories": []}"#);
        let r = restaurant_from_business(business).unwrap();
        assert_eq!(r.cuisine, None);
    }

    #[test]
    fn test_payload_fails_on_first_bad_record() {
        let payload: SearchPayload = serde_json::from_str(
            r#"{"businesses": [{"rating": 4.0}, {"name": "Broken"}]}"#,
        )
        .unwrap();
        assert!(restaurants_from_payload(payload).is_err());
    }
}
