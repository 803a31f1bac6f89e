use serde::{Deserialize, Serialize};

use crate::models::domain::FestivalMatch;

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<FestivalMatch>,
    /// Ranked festivals before the limit was applied
    pub total_results: usize,
    pub catalog_size: usize,
    /// Inactive or malformed festivals left out of the ranking
    pub excluded: usize,
    /// OG image URL for the top match
    pub share_image_url: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub festivals: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
