//! Stage narrowing by exact price tier.

use crate::traits::{FilterStage, Predicate};
use dataset::{PriceTier, Restaurant};

/// Keeps restaurants whose price tier equals the entered one exactly.
///
/// Unlike the rating stage this is never a range: "$$" keeps only "$$"
/// restaurants, not cheaper ones. The value must be one of the four
/// canonical dollar-sign strings.
pub struct PriceStage;

impl FilterStage for PriceStage {
    fn name(&self) -> &str {
        "price"
    }

    fn question(&self) -> &str {
        "Do you want to filter the price? (yes/no): "
    }

    fn value_prompt(&self) -> &str {
        "Enter a price: "
    }

    fn build_predicate(&self, raw: &str) -> Result<Predicate, String> {
        match PriceTier::from_symbol(raw.trim()) {
            Some(tier) => Ok(Box::new(move |r: &Restaurant| r.price == Some(tier))),
            None => Err("Invalid price. Please enter 1-4 dollar signs.".to_string()),
        }
    }
}
