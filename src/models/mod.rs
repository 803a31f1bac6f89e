// Model exports
pub mod domain;
pub mod lenient;
pub mod requests;
pub mod responses;

pub use domain::{
    DurationLabel, DurationPreference, Festival, FestivalMatch, FestivalStatus, Month, PriceRange,
    QuizAnswers, ScoringTuning, ScoringWeights, UnknownMonth,
};
pub use requests::FindMatchesRequest;
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse};
