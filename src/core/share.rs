use crate::core::scoring::format_price_range;
use crate::models::FestivalMatch;

/// Top-match summary rendered into the share/OG image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub name: String,
    /// Whole-number match percentage
    pub score: u8,
    pub genre: Option<String>,
    pub budget: String,
    pub country: String,
}

impl ShareCard {
    pub fn from_match(top: &FestivalMatch) -> Self {
        let festival = &top.festival;
        Self {
            name: festival.name.clone(),
            score: top.score.round().clamp(0.0, 100.0) as u8,
            genre: festival.genres.first().cloned(),
            budget: format_price_range(&festival.estimated_cost_usd),
            country: festival.country.clone(),
        }
    }

    /// Percent-encoded query string: name, score, genre, budget, country
    pub fn query_string(&self) -> String {
        let score = self.score.to_string();
        let mut params: Vec<(&str, &str)> =
            vec![("name", self.name.as_str()), ("score", score.as_str())];
        if let Some(genre) = &self.genre {
            params.push(("genre", genre.as_str()));
        }
        params.push(("budget", self.budget.as_str()));
        params.push(("country", self.country.as_str()));

        params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full image URL for the given rendering endpoint
    pub fn image_url(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", endpoint, separator, self.query_string())
    }
}
