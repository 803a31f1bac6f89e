// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod proximity;
pub mod scoring;
pub mod share;

pub use filters::{is_rankable, normalize_budget, normalize_tags, NormalizedAnswers};
pub use matcher::{MatchResult, Matcher};
pub use proximity::{budget_fit, duration_closeness, range_gap};
pub use scoring::{calculate_match_score, evaluate_criteria, Criterion, CriterionFit};
pub use share::ShareCard;
