//! Session controller: dataset acquisition plus the ordered filter stages.
//!
//! The session is a small state machine:
//!
//! ```text
//! ACQUIRE -> TYPE -> RATING -> PRICE -> FINALIZE
//! ```
//!
//! An empty result at any filter stage re-runs that same stage from its
//! yes/no question; a result narrowed to exactly one record short-circuits
//! straight to FINALIZE, skipping the remaining stages.

use crate::console::{ask_yes_no, Console};
use crate::filters::{CuisineStage, PriceStage, RatingStage};
use crate::presenter::{self, MapOpener, DISPLAY_LIMIT};
use crate::traits::{FilterStage, StageOutcome};
use anyhow::Result;
use dataset::{Restaurant, RestaurantSource};
use tracing::{debug, warn};

/// Run one stage against the current record set.
///
/// The shared protocol every stage follows:
/// 1. Offer the filter as a yes/no question (re-asked until answered).
/// 2. On "no", pass the records through untouched.
/// 3. On "yes", solicit a value until the stage validates it, printing the
///    stage's correction message after each rejection.
/// 4. Keep the records the validated predicate accepts, preserving order.
///
/// Malformed operator input never escapes as an error; the only errors here
/// are console failures.
pub fn run_stage(
    stage: &dyn FilterStage,
    console: &mut dyn Console,
    records: &[Restaurant],
) -> Result<StageOutcome> {
    if !ask_yes_no(console, stage.question())? {
        return Ok(StageOutcome {
            survivors: records.to_vec(),
            applied: false,
        });
    }

    loop {
        let raw = console.read_line(stage.value_prompt())?;
        match stage.build_predicate(&raw) {
            Ok(predicate) => {
                let survivors: Vec<Restaurant> =
                    records.iter().filter(|r| predicate(r)).cloned().collect();
                debug!(
                    stage = stage.name(),
                    input = records.len(),
                    output = survivors.len(),
                    "applied filter stage"
                );
                return Ok(StageOutcome {
                    survivors,
                    applied: true,
                });
            }
            Err(message) => console.write_line(&message)?,
        }
    }
}

/// Drives a full interactive session over a restaurant source, the console,
/// and a map opener.
pub struct SessionController<'a> {
    source: &'a dyn RestaurantSource,
    opener: &'a dyn MapOpener,
}

impl<'a> SessionController<'a> {
    pub fn new(source: &'a dyn RestaurantSource, opener: &'a dyn MapOpener) -> Self {
        Self { source, opener }
    }

    /// Run the session to completion. Ending the session, by the "exit"
    /// sentinel or by declining directions, is a successful return.
    pub async fn run(&self, console: &mut dyn Console) -> Result<()> {
        let restaurants = match self.acquire(console).await? {
            Some(records) => records,
            None => return Ok(()), // operator typed "exit"
        };

        let stages: [Box<dyn FilterStage>; 3] = [
            Box::new(CuisineStage),
            Box::new(RatingStage),
            Box::new(PriceStage),
        ];

        let mut current = restaurants;
        for (position, stage) in stages.iter().enumerate() {
            loop {
                let outcome = run_stage(stage.as_ref(), console, &current)?;
                if outcome.survivors.is_empty() {
                    // Same stage again; the operator gets another chance to
                    // answer differently.
                    console.write_line("")?;
                    console.write_line("No results found. Please try again.")?;
                    continue;
                }

                // Survivors are always a subsequence of the input, so the
                // collection changed exactly when it shrank.
                let narrowed = outcome.applied && outcome.survivors.len() < current.len();
                current = outcome.survivors;

                if current.len() == 1 {
                    return presenter::present(console, self.opener, &current);
                }
                if narrowed && position + 1 < stages.len() {
                    self.preview(console, &current)?;
                }
                break;
            }
        }

        presenter::present(console, self.opener, &current)
    }

    /// ACQUIRE state: prompt for a city term until the source yields a
    /// non-empty dataset. Returns `None` when the operator types "exit".
    async fn acquire(&self, console: &mut dyn Console) -> Result<Option<Vec<Restaurant>>> {
        loop {
            let term = console.read_line("Enter a city: ")?;
            let term = term.trim();
            if term.eq_ignore_ascii_case("exit") {
                console.write_line("")?;
                console.write_line("Session Ended")?;
                return Ok(None);
            }

            match self.source.fetch(term).await {
                Ok(records) if records.is_empty() => {
                    console.write_line("No results for that city. Try another, or type exit.")?;
                }
                Ok(records) => {
                    console.write_line("")?;
                    console.write_line(&format!(
                        "Showing the first {} of {} results",
                        records.len().min(DISPLAY_LIMIT),
                        records.len()
                    ))?;
                    console.write_line("---------------------------")?;
                    for r in records.iter().take(DISPLAY_LIMIT) {
                        console.write_line(&r.summary())?;
                    }
                    return Ok(Some(records));
                }
                Err(err) => {
                    warn!(term, error = %err, "dataset fetch failed");
                    console.write_line(&format!("Could not load data for {term:?}: {err}"))?;
                }
            }
        }
    }

    fn preview(&self, console: &mut dyn Console, records: &[Restaurant]) -> Result<()> {
        console.write_line("")?;
        console.write_line("Previewing up to 50 results")?;
        console.write_line("---------------------------")?;
        for r in records.iter().take(DISPLAY_LIMIT) {
            console.write_line(&r.summary())?;
        }
        Ok(())
    }
}
