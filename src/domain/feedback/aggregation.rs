//! Overall rating across all answers of an interview.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RawRating;

/// Lowest overall rating.
pub const MIN_OVERALL_RATING: f64 = 0.0;

/// Highest overall rating.
pub const MAX_OVERALL_RATING: f64 = 10.0;

/// Mean rating on the 0-10 scale, rounded to one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct OverallRating(f64);

impl OverallRating {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for OverallRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Averages ratings into an overall score.
///
/// Ratings that are missing or unreadable count as zero and stay in the
/// denominator. The mean is clamped to `[0, 10]` and rounded to one
/// decimal place. No ratings yields `0`.
pub fn aggregate(ratings: &[RawRating]) -> OverallRating {
    if ratings.is_empty() {
        return OverallRating(MIN_OVERALL_RATING);
    }

    let total: f64 = ratings.iter().map(|r| r.numeric().unwrap_or(0.0)).sum();
    let mean = total / ratings.len() as f64;
    let clamped = if mean.is_finite() {
        mean.clamp(MIN_OVERALL_RATING, MAX_OVERALL_RATING)
    } else if mean > 0.0 {
        MAX_OVERALL_RATING
    } else {
        MIN_OVERALL_RATING
    };

    OverallRating((clamped * 10.0).round() / 10.0)
}
