//! Command implementations

pub mod check;
pub mod hints;
pub mod simple;
pub mod survey;

pub use check::{CheckResult, CheckStep, run_check};
pub use hints::{HintResult, find_words, remaining_words};
pub use simple::{play_lines, run_simple};
pub use survey::{SurveyEntry, SurveyResult, run_survey};
