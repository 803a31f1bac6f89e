//! Festival Matcher - ranking service for the festival discovery quiz
//!
//! This library provides the matching algorithm behind the quiz results page.
//! It scores every festival in a static catalog against a user's (possibly
//! partial) quiz answers and returns a stable, deterministic ranking.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, MatchResult, ShareCard};
pub use models::{Festival, FestivalMatch, QuizAnswers, ScoringTuning, ScoringWeights, FindMatchesRequest, FindMatchesResponse};
pub use services::{Catalog, CatalogError};
