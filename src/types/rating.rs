use serde::{Deserialize, Serialize};
use std::fmt;

/// Performance rating on the fixed 1 (lowest) to 5 (highest) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rating {
    /// All ratings in ascending order. Consumers iterate and index by
    /// position, so this ordering is part of the contract.
    pub const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Rating> {
        match value {
            1 => Some(Rating::One),
            2 => Some(Rating::Two),
            3 => Some(Rating::Three),
            4 => Some(Rating::Four),
            5 => Some(Rating::Five),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Rating::from_u8(value).ok_or_else(|| format!("rating must be 1-5, got {value}"))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.as_u8()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Deviation threshold (percentage points) used when none is configured.
pub const DEVIATION_THRESHOLD: f64 = 2.0;

/// Target share of employees per rating, set by an administrator.
///
/// The split is advisory: an invalid split (sum != 100) is still accepted
/// by the distribution engine and only reported as a blocking finding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageSplit {
    #[serde(default = "default_rating1")]
    pub rating1: f64,
    #[serde(default = "default_rating2")]
    pub rating2: f64,
    #[serde(default = "default_rating3")]
    pub rating3: f64,
    #[serde(default = "default_rating4")]
    pub rating4: f64,
    #[serde(default = "default_rating5")]
    pub rating5: f64,
}

fn default_rating1() -> f64 {
    10.0
}

fn default_rating2() -> f64 {
    20.0
}

fn default_rating3() -> f64 {
    40.0
}

fn default_rating4() -> f64 {
    20.0
}

fn default_rating5() -> f64 {
    10.0
}

impl Default for PercentageSplit {
    fn default() -> Self {
        Self {
            rating1: default_rating1(),
            rating2: default_rating2(),
            rating3: default_rating3(),
            rating4: default_rating4(),
            rating5: default_rating5(),
        }
    }
}

impl PercentageSplit {
    pub fn get(&self, rating: Rating) -> f64 {
        match rating {
            Rating::One => self.rating1,
            Rating::Two => self.rating2,
            Rating::Three => self.rating3,
            Rating::Four => self.rating4,
            Rating::Five => self.rating5,
        }
    }

    /// Replaces one slot only; the other four are never rebalanced.
    pub fn set(&mut self, rating: Rating, percentage: f64) {
        match rating {
            Rating::One => self.rating1 = percentage,
            Rating::Two => self.rating2 = percentage,
            Rating::Three => self.rating3 = percentage,
            Rating::Four => self.rating4 = percentage,
            Rating::Five => self.rating5 = percentage,
        }
    }

    pub fn sum(&self) -> f64 {
        self.rating1 + self.rating2 + self.rating3 + self.rating4 + self.rating5
    }

    /// Exact equality: UI messaging branches on < 100 vs > 100 vs == 100,
    /// so no epsilon is applied.
    pub fn is_valid(&self) -> bool {
        self.sum() == 100.0
    }

    /// Amount left to reach 100; negative means overage.
    pub fn remaining(&self) -> f64 {
        100.0 - self.sum()
    }
}

/// One row of the actual-vs-target distribution breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingBucket {
    pub rating: Rating,
    pub actual_count: usize,
    pub actual_percentage: f64,
    pub target_percentage: f64,
    /// actual_percentage - target_percentage, in percentage points.
    pub deviation: f64,
    /// |deviation| > threshold.
    pub has_deviation: bool,
}

/// Chart-ready point for the bar+line distribution view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BellCurvePoint {
    pub rating: Rating,
    pub actual_count: usize,
    pub target_count: usize,
    pub has_deviation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionStats {
    pub mean: f64,
    pub median: f64,
    pub mode: Rating,
    pub total_deviation: f64,
}
