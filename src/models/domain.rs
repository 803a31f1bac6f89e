use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::{Validate, ValidationError};

use super::lenient;

/// Calendar month, ordered January..December
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown month: {0}")]
pub struct UnknownMonth(pub String);

impl FromStr for Month {
    type Err = UnknownMonth;

    /// Accepts full English names and three-letter abbreviations, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Month::ALL
            .iter()
            .copied()
            .find(|month| {
                let name = month.name().to_ascii_lowercase();
                wanted == name || wanted == name[..3]
            })
            .ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

impl TryFrom<String> for Month {
    type Error = UnknownMonth;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Lifecycle status of a festival edition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FestivalStatus {
    #[default]
    Confirmed,
    Announced,
    Tentative,
    Postponed,
    Cancelled,
    Inactive,
    /// Any status string the dataset uses that we don't model
    Other(String),
}

impl FestivalStatus {
    /// Cancelled and inactive festivals never reach the ranking
    pub fn is_active(&self) -> bool {
        !matches!(self, FestivalStatus::Cancelled | FestivalStatus::Inactive)
    }
}

impl From<String> for FestivalStatus {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "confirmed" | "active" => FestivalStatus::Confirmed,
            "announced" => FestivalStatus::Announced,
            "tentative" => FestivalStatus::Tentative,
            "postponed" => FestivalStatus::Postponed,
            "cancelled" | "canceled" => FestivalStatus::Cancelled,
            "inactive" => FestivalStatus::Inactive,
            _ => FestivalStatus::Other(value),
        }
    }
}

impl From<FestivalStatus> for String {
    fn from(value: FestivalStatus) -> Self {
        match value {
            FestivalStatus::Confirmed => "confirmed".to_string(),
            FestivalStatus::Announced => "announced".to_string(),
            FestivalStatus::Tentative => "tentative".to_string(),
            FestivalStatus::Postponed => "postponed".to_string(),
            FestivalStatus::Cancelled => "cancelled".to_string(),
            FestivalStatus::Inactive => "inactive".to_string(),
            FestivalStatus::Other(raw) => raw,
        }
    }
}

/// Closed price range in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

fn validate_cost_range(range: &PriceRange) -> Result<(), ValidationError> {
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(ValidationError::new("cost_not_finite"));
    }
    if range.min < 0.0 {
        return Err(ValidationError::new("cost_negative"));
    }
    if range.min > range.max {
        return Err(ValidationError::new("cost_min_above_max"));
    }
    Ok(())
}

/// A festival as it appears in the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Festival {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub months: Vec<Month>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[validate(custom(function = "validate_cost_range"))]
    pub estimated_cost_usd: PriceRange,
    #[serde(default)]
    pub audience_size: Option<String>,
    #[validate(range(min = 1))]
    pub duration_days: u16,
    #[serde(default)]
    pub family_friendly: bool,
    #[serde(default)]
    pub camping: bool,
    #[serde(default)]
    pub glamping: bool,
    #[serde(default)]
    pub weather_profile: Option<String>,
    #[serde(default)]
    pub vibe: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub ticket_official_url: Option<String>,
    #[serde(default)]
    pub status: FestivalStatus,
    #[serde(default)]
    pub min_age: Option<u8>,
}

/// Named trip lengths offered by the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationLabel {
    Day,
    Weekend,
    LongWeekend,
    Week,
}

impl DurationLabel {
    pub fn days(self) -> f64 {
        match self {
            DurationLabel::Day => 1.0,
            DurationLabel::Weekend => 3.0,
            DurationLabel::LongWeekend => 4.0,
            DurationLabel::Week => 7.0,
        }
    }
}

/// Preferred festival length, either a day count or a quiz label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationPreference {
    Days(f64),
    Label(DurationLabel),
}

impl DurationPreference {
    /// Requested length in days, clamped to at least one day
    pub fn target_days(&self) -> f64 {
        match self {
            DurationPreference::Days(days) if days.is_finite() => days.max(1.0),
            DurationPreference::Days(_) => 1.0,
            DurationPreference::Label(label) => label.days(),
        }
    }
}

/// Quiz answers, complete or partial
///
/// Every field is optional. A field with the wrong JSON shape is dropped
/// instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub budget: Option<PriceRange>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub months: Vec<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub vibes: Vec<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub duration: Option<DurationPreference>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub camping: Option<bool>,
}

/// Ranked festival with its normalized score and the reasons behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FestivalMatch {
    pub festival: Festival,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Scoring weights, one per criterion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub genre: f64,
    pub budget: f64,
    pub month: f64,
    pub region: f64,
    pub vibe: f64,
    pub duration: f64,
    pub camping: f64,
}

impl ScoringWeights {
    /// Replace negative or non-finite weights with zero
    ///
    /// Weights too large to sum without overflowing are rescaled so the
    /// largest becomes 1.0. Only their ratios matter to the score.
    pub fn sanitised(self) -> Self {
        fn clean(weight: f64) -> f64 {
            if weight.is_finite() && weight > 0.0 {
                weight
            } else {
                0.0
            }
        }

        let cleaned = self.map(clean);
        if cleaned.values().iter().sum::<f64>().is_finite() {
            return cleaned;
        }

        let largest = cleaned.values().iter().copied().fold(0.0, f64::max);
        cleaned.map(|weight| weight / largest)
    }

    fn values(&self) -> [f64; 7] {
        [
            self.genre,
            self.budget,
            self.month,
            self.region,
            self.vibe,
            self.duration,
            self.camping,
        ]
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            genre: f(self.genre),
            budget: f(self.budget),
            month: f(self.month),
            region: f(self.region),
            vibe: f(self.vibe),
            duration: f(self.duration),
            camping: f(self.camping),
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            genre: 0.30,
            budget: 0.20,
            month: 0.15,
            region: 0.10,
            vibe: 0.10,
            duration: 0.10,
            camping: 0.05,
        }
    }
}

/// Thresholds that shape scoring beyond the weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringTuning {
    /// Minimum criterion fit (0-1) that earns a reason string
    pub reason_threshold: f64,
    /// Width of the partial-credit band past the budget, as a share of the budget max
    pub budget_tolerance_ratio: f64,
}

impl ScoringTuning {
    pub fn sanitised(self) -> Self {
        let defaults = Self::default();
        Self {
            reason_threshold: if self.reason_threshold.is_finite() {
                self.reason_threshold.clamp(0.0, 1.0)
            } else {
                defaults.reason_threshold
            },
            budget_tolerance_ratio: if self.budget_tolerance_ratio.is_finite() {
                self.budget_tolerance_ratio.max(0.0)
            } else {
                defaults.budget_tolerance_ratio
            },
        }
    }
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            reason_threshold: 0.5,
            budget_tolerance_ratio: 0.25,
        }
    }
}
