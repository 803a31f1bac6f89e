use crate::core::{
    filters::{normalize_tag, NormalizedAnswers},
    proximity::{budget_fit, duration_closeness},
};
use crate::models::{Festival, Month, PriceRange, ScoringTuning, ScoringWeights};

/// One independently scored dimension of fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Genre,
    Budget,
    Month,
    Region,
    Vibe,
    Duration,
    Camping,
}

impl Criterion {
    /// Evaluation order, which is also the order reasons are listed in
    pub const ALL: [Criterion; 7] = [
        Criterion::Genre,
        Criterion::Budget,
        Criterion::Month,
        Criterion::Region,
        Criterion::Vibe,
        Criterion::Duration,
        Criterion::Camping,
    ];

    #[inline]
    pub fn weight(self, weights: &ScoringWeights) -> f64 {
        match self {
            Criterion::Genre => weights.genre,
            Criterion::Budget => weights.budget,
            Criterion::Month => weights.month,
            Criterion::Region => weights.region,
            Criterion::Vibe => weights.vibe,
            Criterion::Duration => weights.duration,
            Criterion::Camping => weights.camping,
        }
    }
}

/// Fit of a single answered criterion
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionFit {
    pub criterion: Criterion,
    /// 0.0 (no fit) to 1.0 (perfect fit)
    pub fit: f64,
    /// Present whenever `fit > 0`
    pub reason: Option<String>,
}

/// Calculate a match score (0-100) for a festival based on quiz answers
///
/// Scoring formula, over answered criteria only:
/// score = 100 * sum(weight_i * fit_i) / sum(weight_i)
///
/// Unanswered criteria are left out of both sums, so a partial quiz still
/// produces a percentage. With nothing answered every festival scores 0.
///
/// # Returns
/// The score rounded to one decimal, and the reasons behind it
pub fn calculate_match_score(
    festival: &Festival,
    answers: &NormalizedAnswers,
    weights: &ScoringWeights,
    tuning: &ScoringTuning,
) -> (f64, Vec<String>) {
    let fits = evaluate_criteria(festival, answers, tuning);

    let (weighted, total_weight) = fits.iter().fold((0.0, 0.0), |(sum, total), f| {
        let weight = f.criterion.weight(weights);
        (sum + weight * f.fit, total + weight)
    });

    let ratio = weighted / total_weight;
    if !(total_weight > 0.0 && ratio.is_finite()) {
        return (0.0, Vec::new());
    }

    let score = round_score(100.0 * ratio).clamp(0.0, 100.0);

    let counts = |f: &&CriterionFit| f.fit > 0.0 && f.criterion.weight(weights) > 0.0;

    let mut reasons: Vec<String> = fits
        .iter()
        .filter(counts)
        .filter(|f| f.fit >= tuning.reason_threshold)
        .filter_map(|f| f.reason.clone())
        .collect();

    // A positive score always explains itself: fall back to the strongest contributor
    if score > 0.0 && reasons.is_empty() {
        let contribution = |f: &CriterionFit| f.criterion.weight(weights) * f.fit;
        let best = fits
            .iter()
            .filter(counts)
            .fold(None, |best: Option<&CriterionFit>, f| match best {
                Some(b) if contribution(b) >= contribution(f) => Some(b),
                _ => Some(f),
            });
        if let Some(reason) = best.and_then(|f| f.reason.clone()) {
            reasons.push(reason);
        }
    }

    (score, reasons)
}

/// Evaluate every answered criterion, in [`Criterion::ALL`] order
pub fn evaluate_criteria(
    festival: &Festival,
    answers: &NormalizedAnswers,
    tuning: &ScoringTuning,
) -> Vec<CriterionFit> {
    Criterion::ALL
        .iter()
        .filter_map(|criterion| match criterion {
            Criterion::Genre => genre_fit(festival, answers),
            Criterion::Budget => answers
                .budget
                .as_ref()
                .map(|budget| budget_criterion(festival, budget, tuning)),
            Criterion::Month => month_fit(festival, answers),
            Criterion::Region => region_fit(festival, answers),
            Criterion::Vibe => vibe_fit(festival, answers),
            Criterion::Duration => answers
                .duration_days
                .map(|days| duration_criterion(festival, days)),
            Criterion::Camping => answers.camping.map(|wanted| camping_criterion(festival, wanted)),
        })
        .collect()
}

/// Overlap between wanted tags and the festival's tags
///
/// # Returns
/// (share of wanted tags present, festival tags that matched in festival order)
fn tag_overlap<'a>(wanted: &[String], offered: &'a [String]) -> (f64, Vec<&'a str>) {
    let offered_normalized: Vec<String> = offered.iter().map(|t| normalize_tag(t)).collect();

    let hits = wanted
        .iter()
        .filter(|w| offered_normalized.contains(*w))
        .count();

    let mut matched: Vec<&str> = Vec::new();
    let mut matched_normalized: Vec<&str> = Vec::new();
    for (original, normalized) in offered.iter().zip(&offered_normalized) {
        if wanted.contains(normalized) && !matched_normalized.contains(&normalized.as_str()) {
            matched.push(original.trim());
            matched_normalized.push(normalized.as_str());
        }
    }

    (hits as f64 / wanted.len() as f64, matched)
}

fn genre_fit(festival: &Festival, answers: &NormalizedAnswers) -> Option<CriterionFit> {
    if answers.genres.is_empty() {
        return None;
    }

    let (fit, matched) = tag_overlap(&answers.genres, &festival.genres);
    Some(CriterionFit {
        criterion: Criterion::Genre,
        fit,
        reason: (fit > 0.0)
            .then(|| format!("Matches your genre preference: {}", matched.join(", "))),
    })
}

fn budget_criterion(festival: &Festival, budget: &PriceRange, tuning: &ScoringTuning) -> CriterionFit {
    let cost = &festival.estimated_cost_usd;
    let fit = budget_fit(cost, budget, tuning.budget_tolerance_ratio);

    let reason = if fit >= 1.0 {
        Some(format!("Fits your budget: {}", format_price_range(cost)))
    } else if fit > 0.0 {
        Some(format!("Close to your budget: {}", format_price_range(cost)))
    } else {
        None
    };

    CriterionFit { criterion: Criterion::Budget, fit, reason }
}

fn month_fit(festival: &Festival, answers: &NormalizedAnswers) -> Option<CriterionFit> {
    if answers.months.is_empty() {
        return None;
    }

    // BTreeSet iteration keeps calendar order
    let overlap: Vec<Month> = answers
        .months
        .iter()
        .copied()
        .filter(|m| festival.months.contains(m))
        .collect();

    let reason = match overlap.as_slice() {
        [] => None,
        [only] => Some(format!("Takes place in your preferred month: {}", only)),
        many => Some(format!(
            "Takes place in your preferred months: {}",
            many.iter().map(|m| m.name()).collect::<Vec<_>>().join(", ")
        )),
    };

    Some(CriterionFit {
        criterion: Criterion::Month,
        fit: if overlap.is_empty() { 0.0 } else { 1.0 },
        reason,
    })
}

fn region_fit(festival: &Festival, answers: &NormalizedAnswers) -> Option<CriterionFit> {
    let wanted = answers.region.as_ref()?;

    let matched = festival
        .region
        .iter()
        .chain(std::iter::once(&festival.country))
        .find(|candidate| normalize_tag(candidate) == *wanted);

    Some(CriterionFit {
        criterion: Criterion::Region,
        fit: if matched.is_some() { 1.0 } else { 0.0 },
        reason: matched.map(|place| format!("Located in your preferred region: {}", place.trim())),
    })
}

fn vibe_fit(festival: &Festival, answers: &NormalizedAnswers) -> Option<CriterionFit> {
    if answers.vibes.is_empty() {
        return None;
    }

    let (fit, matched) = tag_overlap(&answers.vibes, &festival.vibe);
    Some(CriterionFit {
        criterion: Criterion::Vibe,
        fit,
        reason: (fit > 0.0).then(|| format!("Matches your vibe: {}", matched.join(", "))),
    })
}

fn duration_criterion(festival: &Festival, requested_days: f64) -> CriterionFit {
    let actual = festival.duration_days;
    let fit = duration_closeness(requested_days, actual as f64);
    let length = if actual == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", actual)
    };

    let reason = if fit >= 1.0 {
        Some(format!("Lasts {}, just as you wanted", length))
    } else if fit > 0.0 {
        Some(format!("Lasts {}, close to your preferred length", length))
    } else {
        None
    };

    CriterionFit { criterion: Criterion::Duration, fit, reason }
}

fn camping_criterion(festival: &Festival, wanted: bool) -> CriterionFit {
    let matches = festival.camping == wanted;
    let reason = match (matches, wanted) {
        (true, true) => Some("Camping available, as you wanted".to_string()),
        (true, false) => Some("No camping needed, as you prefer".to_string()),
        (false, _) => None,
    };

    CriterionFit {
        criterion: Criterion::Camping,
        fit: if matches { 1.0 } else { 0.0 },
        reason,
    }
}

/// Format a USD range as "$150-$350"
pub fn format_price_range(range: &PriceRange) -> String {
    format!("${:.0}-${:.0}", range.min, range.max)
}

#[inline]
fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
