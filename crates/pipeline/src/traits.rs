//! Core trait for the cascading filter pipeline.

use dataset::Restaurant;

/// Predicate over a restaurant, built from a validated filter value.
pub type Predicate = Box<dyn Fn(&Restaurant) -> bool>;

/// One narrowing stage of the pipeline.
///
/// A stage supplies the wording of its prompts and the validation of its
/// filter value; the shared ask → validate → apply protocol lives in
/// `controller::run_stage`. Implementations hold no state and perform no I/O.
pub trait FilterStage {
    /// Short name for logging.
    fn name(&self) -> &str;

    /// The yes/no question offering this filter.
    fn question(&self) -> &str;

    /// The prompt soliciting a filter value.
    fn value_prompt(&self) -> &str;

    /// Validate a raw filter value.
    ///
    /// # Returns
    /// * `Ok(predicate)` - the value was valid; records satisfying the
    ///   predicate survive the stage
    /// * `Err(message)` - correction text to show before re-soliciting
    fn build_predicate(&self, raw: &str) -> Result<Predicate, String>;
}

/// Result of running one stage.
#[derive(Debug)]
pub struct StageOutcome {
    /// Surviving records, in their original relative order. Equals the input
    /// when the operator declined the filter.
    pub survivors: Vec<Restaurant>,
    /// Whether a filter value was actually applied ("yes" answered).
    pub applied: bool,
}
