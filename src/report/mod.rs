pub mod json;
pub mod md;
pub mod table;

use crate::error::CalibraError;
use crate::types::report::CalibrationReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Table,
}

pub fn render(report: &CalibrationReport, format: OutputFormat) -> Result<String, CalibraError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CalibraError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Table => Ok(table::to_table(report)),
    }
}
