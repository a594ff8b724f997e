//! Cascading filter pipeline for interactive restaurant search.
//!
//! This crate provides:
//! - The `Console` abstraction every prompt goes through
//! - The `FilterStage` trait and the cuisine / rating / price stages
//! - The `SessionController` state machine tying acquisition, filtering,
//!   and presentation together
//!
//! ## Architecture
//! A session acquires a dataset once, then applies the three stages in a
//! fixed order. Each stage offers itself as a yes/no question, validates its
//! filter value in a retry loop, and produces a narrowed copy of the record
//! set. Empty results re-run the same stage; a single survivor jumps straight
//! to presentation.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::SessionController;
//!
//! let controller = SessionController::new(&provider, &opener);
//! controller.run(&mut console).await?;
//! ```

pub mod console;
pub mod controller;
pub mod filters;
pub mod presenter;
pub mod traits;

// Re-export main types
pub use console::{ask_yes_no, Console, ScriptedConsole};
pub use controller::{run_stage, SessionController};
pub use presenter::{present, MapOpener, DISPLAY_LIMIT};
pub use traits::{FilterStage, Predicate, StageOutcome};
