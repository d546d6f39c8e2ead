//! Game rules: turn resolution and the end of the semester.
//!
//! - [`TurnResolver`]: applies a full selection, advances the round,
//!   detects the last round
//! - [`ReportCard`]: the transcript shown after the last round

pub mod report;
pub mod resolver;

pub use report::ReportCard;
pub use resolver::{summarize, TurnOutcome, TurnResolver};
