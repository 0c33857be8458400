use crate::types::employee::Employee;
use crate::types::rating::{
    BellCurvePoint, DistributionStats, PercentageSplit, Rating, RatingBucket,
};

/// Calculate the distribution of employees across ratings and compare it
/// with the target percentages.
///
/// Always returns exactly 5 buckets, ratings 1..5 ascending, zero counts
/// included. Total over its inputs: an empty roster yields zero actuals and
/// `deviation = -target`, and the threshold flag is computed the same way,
/// so an empty roster is still reported as deviating from a nonzero target.
pub fn calculate_distribution(
    employees: &[Employee],
    targets: &PercentageSplit,
    deviation_threshold: f64,
) -> [RatingBucket; 5] {
    let total = employees.len();

    Rating::ALL.map(|rating| {
        let actual_count = employees
            .iter()
            .filter(|employee| employee.rating == rating)
            .count();
        let actual_percentage = if total == 0 {
            0.0
        } else {
            actual_count as f64 / total as f64 * 100.0
        };
        let target_percentage = targets.get(rating);
        let deviation = actual_percentage - target_percentage;

        RatingBucket {
            rating,
            actual_count,
            actual_percentage,
            target_percentage,
            deviation,
            has_deviation: deviation.abs() > deviation_threshold,
        }
    })
}

/// Project the distribution into chart points, converting target
/// percentages into headcounts rounded to the nearest integer.
pub fn bell_curve_data(
    distribution: &[RatingBucket; 5],
    total_employees: usize,
) -> [BellCurvePoint; 5] {
    std::array::from_fn(|index| {
        let bucket = &distribution[index];
        BellCurvePoint {
            rating: bucket.rating,
            actual_count: bucket.actual_count,
            target_count: (bucket.target_percentage / 100.0 * total_employees as f64).round()
                as usize,
            has_deviation: bucket.has_deviation,
        }
    })
}

/// Summary statistics over a distribution.
///
/// `median` is a fixed 3 for the 1-5 scale rather than a count-weighted
/// median; downstream consumers expect the constant, so it stays.
pub fn distribution_stats(distribution: &[RatingBucket; 5]) -> DistributionStats {
    let total: usize = distribution.iter().map(|bucket| bucket.actual_count).sum();

    let weighted_sum: usize = distribution
        .iter()
        .map(|bucket| bucket.rating.as_u8() as usize * bucket.actual_count)
        .sum();
    let mean = if total > 0 {
        weighted_sum as f64 / total as f64
    } else {
        0.0
    };

    // Ascending iteration makes ties resolve to the lowest rating.
    let max_count = distribution
        .iter()
        .map(|bucket| bucket.actual_count)
        .max()
        .unwrap_or(0);
    let mode = distribution
        .iter()
        .find(|bucket| bucket.actual_count == max_count)
        .map(|bucket| bucket.rating)
        .unwrap_or(Rating::Three);

    let total_deviation = distribution
        .iter()
        .map(|bucket| bucket.deviation.abs())
        .sum();

    DistributionStats {
        mean,
        median: 3.0,
        mode,
        total_deviation,
    }
}
