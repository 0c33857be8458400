pub mod columns;
pub mod validate;

use crate::error::{CalibraError, Result};
use crate::types::employee::ImportedEmployee;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};
use validate::RowError;

/// Result of reading a roster: valid rows plus every per-row failure.
/// The caller decides whether partial success is acceptable.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub employees: Vec<ImportedEmployee>,
    pub errors: Vec<RowError>,
}

/// Read a roster CSV, normalize its headers, and validate every row.
pub fn read_roster(path: &Path) -> Result<ImportOutcome> {
    if !path.exists() {
        return Err(CalibraError::PathNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    // Header position -> canonical field, unknown columns dropped.
    let header_map: Vec<Option<&'static str>> = reader
        .headers()?
        .iter()
        .map(columns::normalize_header)
        .collect();
    debug!(?header_map, "normalized roster headers");

    let mut employees = Vec::new();
    let mut errors = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record?;

        let mut fields: HashMap<&'static str, String> = HashMap::new();
        for (value, field) in record.iter().zip(header_map.iter()) {
            if let Some(field) = *field {
                fields.insert(field, value.to_string());
            }
        }

        match validate::validate_row(row, &fields) {
            Ok(employee) => employees.push(employee),
            Err(row_errors) => errors.extend(row_errors),
        }
    }

    info!(
        path = %path.display(),
        valid = employees.len(),
        invalid_rows = errors.len(),
        "roster read"
    );

    Ok(ImportOutcome { employees, errors })
}
