use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::QuizAnswers;
use crate::models::lenient;

/// Request to rank the catalog against quiz answers
///
/// `answers` may be partial; the quiz calls this for live previews too.
/// A missing, null or non-object `answers` ranks as an empty quiz.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[serde(default, deserialize_with = "lenient::object_or_default")]
    pub answers: QuizAnswers,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}
