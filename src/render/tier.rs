//! Score bucketing for engagement, health, and win-probability values.
//!
//! Buckets are boundary-inclusive on the upper bound: 80 is Good, 79 and 60
//! are Medium, 59 is Poor. Every tier maps to a fixed color/icon pair.

use serde::Serialize;

/// Display tier for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Good,
    Medium,
    Poor,
}

impl ScoreTier {
    /// Bucket a score by the fixed thresholds.
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreTier::Good
        } else if score >= 60 {
            ScoreTier::Medium
        } else {
            ScoreTier::Poor
        }
    }

    /// Hex color for badges in this tier.
    pub fn color(self) -> &'static str {
        match self {
            ScoreTier::Good => "#16a34a",
            ScoreTier::Medium => "#ca8a04",
            ScoreTier::Poor => "#dc2626",
        }
    }

    /// Icon paired with this tier.
    pub fn icon(self) -> &'static str {
        match self {
            ScoreTier::Good => "\u{1F49A}",   // 💚
            ScoreTier::Medium => "\u{1F49B}", // 💛
            ScoreTier::Poor => "\u{2764}\u{FE0F}", // ❤️
        }
    }
}
