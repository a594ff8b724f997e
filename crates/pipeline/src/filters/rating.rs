//! Stage narrowing by minimum rating.

use crate::traits::{FilterStage, Predicate};
use dataset::Restaurant;

/// Keeps restaurants rated at or above the entered threshold.
///
/// The threshold must parse as a number in [1.0, 5.0]; the comparison is
/// inclusive, so a threshold of 4.0 keeps a 4.0-rated restaurant.
pub struct RatingStage;

impl FilterStage for RatingStage {
    fn name(&self) -> &str {
        "rating"
    }

    fn question(&self) -> &str {
        "Do you want to filter the rating? (yes/no): "
    }

    fn value_prompt(&self) -> &str {
        "Enter a rating: "
    }

    fn build_predicate(&self, raw: &str) -> Result<Predicate, String> {
        let threshold: f32 = raw
            .trim()
            .parse()
            .map_err(|_| "Invalid input. Please enter a number.".to_string())?;
        if !(1.0..=5.0).contains(&threshold) {
            // Never clamp; out-of-range input is rejected outright.
            return Err("Invalid input. Please enter a rating between 1 and 5.".to_string());
        }
        Ok(Box::new(move |r: &Restaurant| r.rating >= threshold))
    }
}
