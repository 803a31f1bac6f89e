// Integration tests for Festival Matcher

use festival_matcher::core::{Matcher, ShareCard};
use festival_matcher::models::{
    DurationPreference, Festival, FestivalStatus, Month, PriceRange, QuizAnswers,
};
use festival_matcher::services::Catalog;

const GENRES: [&str; 6] = ["House", "Techno", "Rock", "Pop", "Jazz", "Hip-Hop"];
const VIBES: [&str; 4] = ["Beach", "Chill", "Party", "Forest"];
const REGIONS: [&str; 3] = ["Europe", "Asia", "North America"];

fn create_festival(id: &str) -> Festival {
    Festival {
        id: id.to_string(),
        name: format!("Festival {}", id),
        country: "Croatia".to_string(),
        city: None,
        region: Some("Europe".to_string()),
        months: vec![],
        genres: vec![],
        estimated_cost_usd: PriceRange::new(100.0, 200.0),
        audience_size: None,
        duration_days: 3,
        family_friendly: false,
        camping: false,
        glamping: false,
        weather_profile: None,
        vibe: vec![],
        website: None,
        ticket_official_url: None,
        status: FestivalStatus::Confirmed,
        min_age: None,
    }
}

/// Varied catalog built from index arithmetic so every run sees the same data
fn create_catalog(size: usize) -> Vec<Festival> {
    (0..size)
        .map(|i| {
            let mut festival = create_festival(&format!("f{}", i));
            festival.genres = vec![
                GENRES[i % GENRES.len()].to_string(),
                GENRES[(i * 7 + 1) % GENRES.len()].to_string(),
            ];
            festival.vibe = vec![VIBES[i % VIBES.len()].to_string()];
            festival.region = Some(REGIONS[i % REGIONS.len()].to_string());
            festival.months = vec![Month::ALL[i % 12], Month::ALL[(i + 1) % 12]];
            let base = 50.0 + (i * 37 % 900) as f64;
            festival.estimated_cost_usd = PriceRange::new(base, base + 150.0);
            festival.duration_days = 1 + (i % 7) as u16;
            festival.camping = i % 3 == 0;
            if i % 11 == 5 {
                festival.status = FestivalStatus::Cancelled;
            }
            if i % 13 == 8 {
                festival.status = FestivalStatus::Inactive;
            }
            festival
        })
        .collect()
}

fn create_answer_sets() -> Vec<QuizAnswers> {
    vec![
        QuizAnswers::default(),
        QuizAnswers {
            genres: vec!["House".to_string()],
            ..Default::default()
        },
        QuizAnswers {
            genres: vec!["Rock".to_string(), "Jazz".to_string(), "Folk".to_string()],
            budget: Some(PriceRange::new(200.0, 500.0)),
            months: vec!["June".to_string(), "July".to_string()],
            ..Default::default()
        },
        QuizAnswers {
            region: Some("Asia".to_string()),
            vibes: vec!["Chill".to_string(), "Beach".to_string()],
            duration: Some(DurationPreference::Days(4.0)),
            camping: Some(false),
            ..Default::default()
        },
        QuizAnswers {
            genres: vec!["Techno".to_string(), "House".to_string()],
            budget: Some(PriceRange::new(-100.0, 50.0)),
            months: vec!["Dec".to_string(), "nonsense".to_string()],
            region: Some("Europe".to_string()),
            vibes: vec!["Party".to_string()],
            duration: Some(DurationPreference::Days(-3.0)),
            camping: Some(true),
        },
    ]
}

fn active_count(catalog: &[Festival]) -> usize {
    catalog.iter().filter(|f| f.status.is_active()).count()
}

#[test]
fn test_no_active_festival_dropped() {
    let matcher = Matcher::with_default_weights();
    let catalog = create_catalog(60);

    for answers in create_answer_sets() {
        let ranked = matcher.rank(&answers, &catalog);
        assert_eq!(ranked.len(), active_count(&catalog));
    }
}

#[test]
fn test_output_sorted_and_stable() {
    let matcher = Matcher::with_default_weights();
    let catalog = create_catalog(60);
    let position = |id: &str| catalog.iter().position(|f| f.id == id).unwrap();

    for answers in create_answer_sets() {
        let ranked = matcher.rank(&answers, &catalog);

        for pair in ranked.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "Matches not sorted by score: {} then {}",
                pair[0].score,
                pair[1].score
            );
            if pair[0].score == pair[1].score {
                assert!(
                    position(&pair[0].festival.id) < position(&pair[1].festival.id),
                    "Equal scores must keep catalog order"
                );
            }
        }
    }
}

#[test]
fn test_empty_catalog_yields_empty_ranking() {
    let matcher = Matcher::with_default_weights();
    for answers in create_answer_sets() {
        assert!(matcher.rank(&answers, &[]).is_empty());
    }
}

#[test]
fn test_empty_answers_give_uniform_baseline() {
    let matcher = Matcher::with_default_weights();
    let catalog = create_catalog(40);

    let ranked = matcher.rank(&QuizAnswers::default(), &catalog);

    assert!(ranked.iter().all(|m| m.score == 0.0 && m.reasons.is_empty()));

    // Uniform scores mean the ranking is catalog order
    let expected: Vec<&str> = catalog
        .iter()
        .filter(|f| f.status.is_active())
        .map(|f| f.id.as_str())
        .collect();
    let actual: Vec<&str> = ranked.iter().map(|m| m.festival.id.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_ranking_is_deterministic() {
    let matcher = Matcher::with_default_weights();
    let catalog = create_catalog(60);

    for answers in create_answer_sets() {
        let first = serde_json::to_string(&matcher.rank(&answers, &catalog)).unwrap();
        let second = serde_json::to_string(&matcher.rank(&answers, &catalog)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_reasons_present_for_positive_scores() {
    let matcher = Matcher::with_default_weights();
    let catalog = create_catalog(60);

    for answers in create_answer_sets() {
        for m in matcher.rank(&answers, &catalog) {
            assert!(m.score >= 0.0 && m.score <= 100.0, "Score {} out of range", m.score);
            if m.score > 0.0 {
                assert!(!m.reasons.is_empty(), "{} scored {} with no reasons", m.festival.id, m.score);
            }
        }
    }
}

#[test]
fn test_house_july_camping_scenario() {
    let matcher = Matcher::with_default_weights();

    let mut good = create_festival("good");
    good.genres = vec!["House".to_string(), "Techno".to_string()];
    good.estimated_cost_usd = PriceRange::new(150.0, 350.0);
    good.months = vec![Month::July, Month::August];
    good.camping = true;

    let mut unrelated = create_festival("unrelated");
    unrelated.genres = vec!["Classical".to_string()];
    unrelated.estimated_cost_usd = PriceRange::new(2000.0, 5000.0);
    unrelated.months = vec![Month::January];
    unrelated.camping = false;

    let answers = QuizAnswers {
        genres: vec!["House".to_string()],
        budget: Some(PriceRange::new(100.0, 400.0)),
        months: vec!["July".to_string()],
        camping: Some(true),
        ..Default::default()
    };

    let ranked = matcher.rank(&answers, &[unrelated, good]);

    assert_eq!(ranked[0].festival.id, "good");
    assert!(ranked[0].score > ranked[1].score);

    let reasons = ranked[0].reasons.join(" | ").to_lowercase();
    for keyword in ["genre", "budget", "month", "camping"] {
        assert!(reasons.contains(keyword), "Missing {} reason in: {}", keyword, reasons);
    }
}

#[test]
fn test_cancelled_festival_never_ranked() {
    let matcher = Matcher::with_default_weights();

    let mut perfect = create_festival("cancelled-perfect");
    perfect.genres = vec!["House".to_string()];
    perfect.months = vec![Month::July];
    perfect.camping = true;
    perfect.status = FestivalStatus::Cancelled;

    let answers = QuizAnswers {
        genres: vec!["House".to_string()],
        months: vec!["July".to_string()],
        camping: Some(true),
        ..Default::default()
    };

    let mut catalog = create_catalog(20);
    catalog.insert(0, perfect);

    let ranked = matcher.rank(&answers, &catalog);
    assert!(ranked.iter().all(|m| m.festival.id != "cancelled-perfect"));
}

#[test]
fn test_bundled_catalog_end_to_end() {
    let catalog = Catalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/festivals.json"))
        .expect("bundled catalog should load");
    let matcher = Matcher::with_default_weights();

    let answers: QuizAnswers = serde_json::from_value(serde_json::json!({
        "genres": ["Techno", "House"],
        "budget": { "min": 150, "max": 500 },
        "months": ["August"],
        "region": "Europe",
        "duration": "long_weekend",
        "camping": false
    }))
    .unwrap();

    let result = matcher.find_matches(&answers, catalog.festivals(), 3);

    assert_eq!(result.matches.len(), 3);
    assert_eq!(result.matches[0].festival.id, "dekmantel");
    assert!(result.matches.iter().all(|m| m.festival.id != "fyre"));

    let card = ShareCard::from_match(&result.matches[0]);
    assert_eq!(card.genre.as_deref(), Some("Techno"));
    assert_eq!(card.country, "Netherlands");
}
