//! Concrete filter stages for the restaurant pipeline.

pub mod cuisine;
pub mod price;
pub mod rating;

// Re-export for convenience
pub use cuisine::CuisineStage;
pub use price::PriceStage;
pub use rating::RatingStage;

#[cfg(test)]
pub(crate) mod fixtures {
    use dataset::{PriceTier, Restaurant};

    /// Shorthand constructor for stage tests.
    pub fn restaurant(name: &str, cuisine: &str, rating: f32, price: &str) -> Restaurant {
        Restaurant {
            name: Some(name.to_string()),
            latitude: Some(42.3),
            longitude: Some(-83.0),
            address: Some(format!("{name} St")),
            price: PriceTier::from_symbol(price),
            rating,
            cuisine: if cuisine.is_empty() {
                None
            } else {
                Some(cuisine.to_string())
            },
            url: None,
        }
    }
}
