pub mod activity;
pub mod evaluator;
pub mod history;
pub mod rules;
pub mod verdict;

pub use activity::{extract_activity, DEFAULT_ACTIVITY};
pub use evaluator::evaluate;
pub use history::VerdictHistory;
pub use verdict::{CurrentConditions, FeasibilityTier, FeasibilityVerdict};
