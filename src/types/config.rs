use crate::types::rating::{PercentageSplit, DEVIATION_THRESHOLD};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalibraConfig {
    #[serde(default)]
    pub targets: PercentageSplit,
    #[serde(default)]
    pub calibration: CalibrationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalibrationConfig {
    #[serde(default = "default_threshold")]
    pub deviation_threshold: f64,
}

fn default_threshold() -> f64 {
    DEVIATION_THRESHOLD
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            deviation_threshold: default_threshold(),
        }
    }
}
