use std::collections::BTreeSet;
use validator::Validate;

use crate::models::{Festival, Month, PriceRange, QuizAnswers};

/// Region answers that mean "no preference"
const ANY_REGION: [&str; 2] = ["any", "anywhere"];

/// Quiz answers cleaned up for scoring
///
/// Tag lists are trimmed, lowercased and de-duplicated in answer order.
/// Numbers are clamped into their valid ranges. Anything unusable is unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedAnswers {
    pub genres: Vec<String>,
    pub budget: Option<PriceRange>,
    pub months: BTreeSet<Month>,
    pub region: Option<String>,
    pub vibes: Vec<String>,
    pub duration_days: Option<f64>,
    pub camping: Option<bool>,
}

impl NormalizedAnswers {
    pub fn from_answers(answers: &QuizAnswers) -> Self {
        let months = answers
            .months
            .iter()
            .filter_map(|name| match name.parse::<Month>() {
                Ok(month) => Some(month),
                Err(e) => {
                    tracing::debug!("Ignoring answer month: {}", e);
                    None
                }
            })
            .collect();

        let region = answers
            .region
            .as_deref()
            .map(normalize_tag)
            .filter(|r| !r.is_empty() && !ANY_REGION.contains(&r.as_str()));

        Self {
            genres: normalize_tags(&answers.genres),
            budget: answers.budget.as_ref().and_then(normalize_budget),
            months,
            region,
            vibes: normalize_tags(&answers.vibes),
            duration_days: answers.duration.map(|d| d.target_days()),
            camping: answers.camping,
        }
    }

    /// True when no criterion can contribute
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
            && self.budget.is_none()
            && self.months.is_empty()
            && self.region.is_none()
            && self.vibes.is_empty()
            && self.duration_days.is_none()
            && self.camping.is_none()
    }
}

#[inline]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Lowercase, trim and de-duplicate tags, preserving first-seen order
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tags.iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}

/// Clamp a budget answer into a usable range
///
/// Negative bounds become zero and inverted bounds are swapped.
/// Returns `None` for non-finite input.
pub fn normalize_budget(budget: &PriceRange) -> Option<PriceRange> {
    if budget.min.is_nan() || budget.max.is_nan() {
        return None;
    }

    let low = budget.min.max(0.0);
    let high = budget.max.max(0.0);

    if low.is_infinite() {
        return None;
    }

    Some(PriceRange::new(low.min(high), low.max(high)))
}

/// Check if a festival can be ranked at all
///
/// Cancelled and inactive festivals are excluded. So are records that fail
/// validation; [`Catalog`](crate::services::Catalog) already warned about
/// those at load time, so this only logs at debug level.
#[inline]
pub fn is_rankable(festival: &Festival) -> bool {
    if !festival.status.is_active() {
        return false;
    }

    if let Err(errors) = festival.validate() {
        tracing::debug!("Skipping malformed festival '{}': {}", festival.id, errors);
        return false;
    }

    true
}
