use crate::types::rating::{BellCurvePoint, DistributionStats, RatingBucket};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

/// Full analysis output: the 5-bucket breakdown plus chart projections,
/// summary statistics, split health, and findings.
#[derive(Debug, Clone, Serialize)]
pub struct CalibrationReport {
    pub total_employees: usize,
    pub distribution: [RatingBucket; 5],
    pub bell_curve: [BellCurvePoint; 5],
    pub stats: DistributionStats,
    pub target_sum: f64,
    pub targets_valid: bool,
    pub findings: Vec<Finding>,
}

impl CalibrationReport {
    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|finding| finding.blocking)
    }

    pub fn has_warnings(&self) -> bool {
        self.findings.iter().any(|finding| !finding.blocking)
    }
}
