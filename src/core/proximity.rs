use crate::models::PriceRange;

/// Smallest partial-credit band past the budget, in USD
pub const MIN_BUDGET_BAND_USD: f64 = 50.0;

/// Distance between two closed ranges
///
/// # Returns
/// 0.0 when the ranges intersect, otherwise the size of the gap between them
#[inline]
pub fn range_gap(a: &PriceRange, b: &PriceRange) -> f64 {
    if a.min > b.max {
        a.min - b.max
    } else if b.min > a.max {
        b.min - a.max
    } else {
        0.0
    }
}

/// Calculate budget fit (0-1)
///
/// Full credit when the festival cost range intersects the budget. Past the
/// budget, credit decays linearly to zero across a tolerance band of
/// `budget.max * tolerance_ratio` (never narrower than [`MIN_BUDGET_BAND_USD`]).
#[inline]
pub fn budget_fit(cost: &PriceRange, budget: &PriceRange, tolerance_ratio: f64) -> f64 {
    let gap = range_gap(cost, budget);
    if gap <= 0.0 {
        return 1.0;
    }

    let band = (budget.max * tolerance_ratio).max(MIN_BUDGET_BAND_USD);
    (1.0 - gap / band).max(0.0)
}

/// Calculate duration closeness (0-1)
///
/// 1.0 for an exact match, shrinking with the relative difference.
#[inline]
pub fn duration_closeness(requested_days: f64, actual_days: f64) -> f64 {
    let longest = requested_days.max(actual_days);
    if longest <= 0.0 {
        return 1.0;
    }

    (1.0 - (requested_days - actual_days).abs() / longest).clamp(0.0, 1.0)
}
