//! Stage narrowing by cuisine type.

use crate::traits::{FilterStage, Predicate};
use dataset::Restaurant;

/// Keeps restaurants whose cuisine matches the entered type exactly,
/// ignoring case. Records with no cuisine on file never match.
pub struct CuisineStage;

impl FilterStage for CuisineStage {
    fn name(&self) -> &str {
        "cuisine"
    }

    fn question(&self) -> &str {
        "Do you want to filter the type of food? (yes/no): "
    }

    fn value_prompt(&self) -> &str {
        "Enter a food type: "
    }

    fn build_predicate(&self, raw: &str) -> Result<Predicate, String> {
        let wanted = raw.trim().to_lowercase();
        if wanted.is_empty() {
            return Err("Invalid input. Please enter a food type.".to_string());
        }
        Ok(Box::new(move |r: &Restaurant| {
            r.cuisine
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == wanted)
        }))
    }
}
