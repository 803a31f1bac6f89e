// Unit tests for Festival Matcher

use festival_matcher::core::{
    filters::{is_rankable, normalize_budget, NormalizedAnswers},
    proximity::{budget_fit, duration_closeness, range_gap},
    scoring::{calculate_match_score, evaluate_criteria, Criterion},
};
use festival_matcher::models::{
    DurationLabel, DurationPreference, Festival, FestivalStatus, Month, PriceRange, QuizAnswers,
    ScoringTuning, ScoringWeights,
};

fn create_festival() -> Festival {
    Festival {
        id: "outlook".to_string(),
        name: "Outlook".to_string(),
        country: "Croatia".to_string(),
        city: Some("Pula".to_string()),
        region: Some("Europe".to_string()),
        months: vec![Month::September],
        genres: vec!["Dub".to_string(), "Drum & Bass".to_string(), "Hip-Hop".to_string()],
        estimated_cost_usd: PriceRange::new(250.0, 450.0),
        audience_size: Some("medium".to_string()),
        duration_days: 4,
        family_friendly: false,
        camping: true,
        glamping: false,
        weather_profile: Some("warm".to_string()),
        vibe: vec!["Beach".to_string(), "Boat Parties".to_string()],
        website: Some("https://outlookfestival.com".to_string()),
        ticket_official_url: None,
        status: FestivalStatus::Confirmed,
        min_age: Some(18),
    }
}

fn score(answers: QuizAnswers) -> (f64, Vec<String>) {
    calculate_match_score(
        &create_festival(),
        &NormalizedAnswers::from_answers(&answers),
        &ScoringWeights::default(),
        &ScoringTuning::default(),
    )
}

#[test]
fn test_range_gap_touching_ranges() {
    let a = PriceRange::new(100.0, 200.0);
    let b = PriceRange::new(200.0, 300.0);
    assert_eq!(range_gap(&a, &b), 0.0);
    assert_eq!(range_gap(&b, &a), 0.0);
}

#[test]
fn test_budget_fit_bounds() {
    let budget = PriceRange::new(0.0, 1000.0);
    // band = 250
    let fit = budget_fit(&PriceRange::new(1100.0, 1500.0), &budget, 0.25);
    assert!((fit - 0.6).abs() < 1e-9, "Expected 0.6, got {}", fit);

    assert_eq!(budget_fit(&PriceRange::new(5000.0, 6000.0), &budget, 0.25), 0.0);
}

#[test]
fn test_budget_fit_zero_tolerance_uses_floor() {
    let budget = PriceRange::new(0.0, 100.0);
    let fit = budget_fit(&PriceRange::new(125.0, 200.0), &budget, 0.0);
    assert!((fit - 0.5).abs() < 1e-9);
}

#[test]
fn test_duration_closeness_symmetry() {
    assert_eq!(duration_closeness(2.0, 5.0), duration_closeness(5.0, 2.0));
}

#[test]
fn test_normalize_budget_swaps_and_clamps() {
    assert_eq!(
        normalize_budget(&PriceRange::new(600.0, -20.0)),
        Some(PriceRange::new(0.0, 600.0))
    );
}

#[test]
fn test_unset_fields_are_not_evaluated() {
    let answers = NormalizedAnswers::from_answers(&QuizAnswers {
        vibes: vec!["beach".to_string()],
        camping: Some(true),
        ..Default::default()
    });

    let fits = evaluate_criteria(&create_festival(), &answers, &ScoringTuning::default());
    let criteria: Vec<Criterion> = fits.iter().map(|f| f.criterion).collect();

    assert_eq!(criteria, vec![Criterion::Vibe, Criterion::Camping]);
}

#[test]
fn test_genre_reason_uses_festival_spelling() {
    let (_, reasons) = score(QuizAnswers {
        genres: vec!["drum & bass".to_string(), "HIP-HOP".to_string()],
        ..Default::default()
    });

    assert_eq!(reasons, vec!["Matches your genre preference: Drum & Bass, Hip-Hop"]);
}

#[test]
fn test_month_miss_scores_zero() {
    let (s, reasons) = score(QuizAnswers {
        months: vec!["July".to_string()],
        ..Default::default()
    });

    assert_eq!(s, 0.0);
    assert!(reasons.is_empty());
}

#[test]
fn test_invalid_months_leave_criterion_unset() {
    let base = score(QuizAnswers {
        camping: Some(true),
        ..Default::default()
    });
    let with_junk = score(QuizAnswers {
        camping: Some(true),
        months: vec!["Thermidor".to_string()],
        ..Default::default()
    });

    assert_eq!(base, with_junk);
}

#[test]
fn test_label_duration() {
    let (s, reasons) = score(QuizAnswers {
        duration: Some(DurationPreference::Label(DurationLabel::LongWeekend)),
        ..Default::default()
    });

    assert_eq!(s, 100.0);
    assert_eq!(reasons, vec!["Lasts 4 days, just as you wanted"]);
}

#[test]
fn test_non_positive_duration_clamped() {
    let (s, _) = score(QuizAnswers {
        duration: Some(DurationPreference::Days(0.0)),
        ..Default::default()
    });

    // 1 day requested vs 4 actual
    assert_eq!(s, 25.0);
}

#[test]
fn test_weighted_combination() {
    // genre fit 1.0 (weight 0.30), camping fit 0.0 (weight 0.05)
    let (s, reasons) = score(QuizAnswers {
        genres: vec!["Dub".to_string()],
        camping: Some(false),
        ..Default::default()
    });

    assert_eq!(s, 85.7);
    assert_eq!(reasons, vec!["Matches your genre preference: Dub"]);
}

#[test]
fn test_custom_reason_threshold() {
    let answers = NormalizedAnswers::from_answers(&QuizAnswers {
        genres: vec!["Dub".to_string(), "Techno".to_string(), "Jazz".to_string()],
        vibes: vec!["beach".to_string()],
        ..Default::default()
    });
    let strict = ScoringTuning {
        reason_threshold: 1.0,
        ..ScoringTuning::default()
    };

    let (_, reasons) =
        calculate_match_score(&create_festival(), &answers, &ScoringWeights::default(), &strict);

    assert_eq!(reasons, vec!["Matches your vibe: Beach"]);
}

#[test]
fn test_postponed_festival_still_rankable() {
    let mut festival = create_festival();
    festival.status = FestivalStatus::Postponed;
    assert!(is_rankable(&festival));

    festival.status = FestivalStatus::Inactive;
    assert!(!is_rankable(&festival));
}
