use crate::core::{
    filters::{is_rankable, NormalizedAnswers},
    scoring::calculate_match_score,
};
use crate::models::{Festival, FestivalMatch, QuizAnswers, ScoringTuning, ScoringWeights};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<FestivalMatch>,
    /// Ranked festivals before truncation
    pub total_results: usize,
    pub total_candidates: usize,
    /// Inactive or malformed festivals left out of the ranking
    pub excluded: usize,
}

/// Main matching orchestrator - ranks the festival catalog against quiz answers
///
/// # Pipeline Stages
/// 1. Answer normalization (clamping, tag cleanup, month parsing)
/// 2. Status and validity filtering
/// 3. Per-criterion scoring and reasons
/// 4. Stable ranking by score
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    tuning: ScoringTuning,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self::with_tuning(weights, ScoringTuning::default())
    }

    pub fn with_tuning(weights: ScoringWeights, tuning: ScoringTuning) -> Self {
        Self {
            weights: weights.sanitised(),
            tuning: tuning.sanitised(),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn tuning(&self) -> &ScoringTuning {
        &self.tuning
    }

    /// Rank every active festival in the catalog
    ///
    /// Output is sorted by descending score. Equal scores keep catalog order.
    /// No festival is dropped for scoring low, only for being inactive or
    /// malformed.
    pub fn rank(&self, answers: &QuizAnswers, catalog: &[Festival]) -> Vec<FestivalMatch> {
        self.rank_counting_exclusions(answers, catalog).0
    }

    /// Find the top matches for a set of quiz answers
    ///
    /// # Arguments
    /// * `answers` - The user's (possibly partial) quiz answers
    /// * `catalog` - All known festivals
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult containing the ranked top matches and ranking counts
    pub fn find_matches(
        &self,
        answers: &QuizAnswers,
        catalog: &[Festival],
        limit: usize,
    ) -> MatchResult {
        let (mut matches, excluded) = self.rank_counting_exclusions(answers, catalog);
        let total_results = matches.len();

        matches.truncate(limit);

        MatchResult {
            matches,
            total_results,
            total_candidates: catalog.len(),
            excluded,
        }
    }

    fn rank_counting_exclusions(
        &self,
        answers: &QuizAnswers,
        catalog: &[Festival],
    ) -> (Vec<FestivalMatch>, usize) {
        // Stage 1: Normalize answers once per request
        let normalized = NormalizedAnswers::from_answers(answers);
        if normalized.is_empty() {
            tracing::debug!("No usable answers, every festival gets the baseline score");
        }

        let mut ranked: Vec<FestivalMatch> = catalog
            .iter()
            // Stage 2: Drop inactive and malformed festivals
            .filter(|festival| is_rankable(festival))
            // Stage 3: Score each remaining festival
            .map(|festival| {
                let (score, reasons) =
                    calculate_match_score(festival, &normalized, &self.weights, &self.tuning);

                FestivalMatch {
                    festival: festival.clone(),
                    score,
                    reasons,
                }
            })
            .collect();

        let excluded = catalog.len() - ranked.len();

        // Stage 4: Sort by score (descending); sort_by is stable so ties keep catalog order
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            "Ranked {} festivals ({} excluded)",
            ranked.len(),
            excluded
        );

        (ranked, excluded)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
