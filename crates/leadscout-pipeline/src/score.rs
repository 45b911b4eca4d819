//! Heuristic lead scoring.
//!
//! Pure functions over rating/review-count signals. Tiers are exclusive:
//! only the highest matching tier contributes.

use serde::Serialize;

/// Coarse estimate of how valuable an e-commerce build-out would be.
///
/// Serializes with the human-readable labels the API has always used
/// (`"Very High"`, not `"VeryHigh"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EcomPotential {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl EcomPotential {
    /// Ordinal rank used as the sort key: Very High=4 > High=3 > Medium=2
    /// > Low=1.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            EcomPotential::VeryHigh => 4,
            EcomPotential::High => 3,
            EcomPotential::Medium => 2,
            EcomPotential::Low => 1,
        }
    }
}

impl std::fmt::Display for EcomPotential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EcomPotential::Low => write!(f, "Low"),
            EcomPotential::Medium => write!(f, "Medium"),
            EcomPotential::High => write!(f, "High"),
            EcomPotential::VeryHigh => write!(f, "Very High"),
        }
    }
}

/// Score how attractive a no-website business is as a sales target.
///
/// Base 50; higher rating and more reviews mean a more established business,
/// currently-open adds a small bump. Clamped to 100 (the minimum achievable
/// is the base, so no lower clamp is needed).
#[must_use]
pub fn opportunity_score(rating: f64, reviews: u32, open_now: Option<bool>) -> u8 {
    let mut score: u8 = 50;

    if rating >= 4.5 {
        score += 20;
    } else if rating >= 4.0 {
        score += 15;
    } else if rating >= 3.5 {
        score += 10;
    }

    if reviews >= 100 {
        score += 20;
    } else if reviews >= 50 {
        score += 15;
    } else if reviews >= 20 {
        score += 10;
    } else if reviews >= 5 {
        score += 5;
    }

    if open_now == Some(true) {
        score += 5;
    }

    score.min(100)
}

/// Estimate e-commerce potential from rating and review count.
///
/// Evaluated in order, first match wins.
#[must_use]
pub fn ecom_potential(rating: f64, reviews: u32) -> EcomPotential {
    if rating >= 4.0 && reviews >= 50 {
        EcomPotential::VeryHigh
    } else if rating >= 3.5 && reviews >= 20 {
        EcomPotential::High
    } else if reviews >= 10 {
        EcomPotential::Medium
    } else {
        EcomPotential::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_score_with_no_signals() {
        assert_eq!(opportunity_score(0.0, 0, None), 50);
    }

    #[test]
    fn maximum_score_clamps_to_100() {
        // 50 + 20 + 20 + 5 = 95; no combination exceeds 100 today, but the
        // clamp guards future tier changes.
        assert_eq!(opportunity_score(5.0, 500, Some(true)), 95);
    }

    #[test]
    fn rating_tiers_are_exclusive() {
        assert_eq!(opportunity_score(4.5, 0, None), 70);
        assert_eq!(opportunity_score(4.0, 0, None), 65);
        assert_eq!(opportunity_score(3.5, 0, None), 60);
        assert_eq!(opportunity_score(3.4, 0, None), 50);
    }

    #[test]
    fn review_tiers_are_exclusive() {
        assert_eq!(opportunity_score(0.0, 100, None), 70);
        assert_eq!(opportunity_score(0.0, 50, None), 65);
        assert_eq!(opportunity_score(0.0, 20, None), 60);
        assert_eq!(opportunity_score(0.0, 5, None), 55);
        assert_eq!(opportunity_score(0.0, 4, None), 50);
    }

    #[test]
    fn open_now_adds_five_only_when_true() {
        assert_eq!(opportunity_score(0.0, 0, Some(true)), 55);
        assert_eq!(opportunity_score(0.0, 0, Some(false)), 50);
        assert_eq!(opportunity_score(0.0, 0, None), 50);
    }

    #[test]
    fn score_is_monotonic_in_rating_and_reviews() {
        let ratings = [0.0, 3.4, 3.5, 3.9, 4.0, 4.4, 4.5, 5.0];
        let reviews = [0, 4, 5, 19, 20, 49, 50, 99, 100, 500];
        for pair in ratings.windows(2) {
            for &r in &reviews {
                assert!(
                    opportunity_score(pair[0], r, None) <= opportunity_score(pair[1], r, None),
                    "score should not decrease as rating rises ({} -> {})",
                    pair[0],
                    pair[1]
                );
            }
        }
        for &rating in &ratings {
            for pair in reviews.windows(2) {
                assert!(
                    opportunity_score(rating, pair[0], None)
                        <= opportunity_score(rating, pair[1], None),
                    "score should not decrease as reviews rise ({} -> {})",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn score_always_in_range() {
        for rating in [0.0, 1.0, 2.5, 3.5, 4.0, 4.5, 5.0] {
            for reviews in [0, 5, 20, 50, 100, 10_000] {
                for open in [None, Some(false), Some(true)] {
                    let s = opportunity_score(rating, reviews, open);
                    assert!((50..=100).contains(&s), "score {s} out of range");
                }
            }
        }
    }

    #[test]
    fn potential_tier_boundaries() {
        assert_eq!(ecom_potential(4.2, 60), EcomPotential::VeryHigh);
        assert_eq!(ecom_potential(3.6, 25), EcomPotential::High);
        assert_eq!(ecom_potential(2.0, 12), EcomPotential::Medium);
        assert_eq!(ecom_potential(1.0, 1), EcomPotential::Low);
    }

    #[test]
    fn high_rating_with_few_reviews_is_not_very_high() {
        // 4.9 stars but only 30 reviews: fails the Very High review floor,
        // passes the High one.
        assert_eq!(ecom_potential(4.9, 30), EcomPotential::High);
    }

    #[test]
    fn rank_orders_tiers() {
        assert!(EcomPotential::VeryHigh.rank() > EcomPotential::High.rank());
        assert!(EcomPotential::High.rank() > EcomPotential::Medium.rank());
        assert!(EcomPotential::Medium.rank() > EcomPotential::Low.rank());
    }

    #[test]
    fn very_high_serializes_with_space() {
        let json = serde_json::to_string(&EcomPotential::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
    }
}
