use crate::types::report::CalibrationReport;

pub fn to_json(report: &CalibrationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
