use crate::error::Result;
use std::path::Path;

const HEADERS: [&str; 5] = ["Employee ID", "Name", "Department", "Manager", "Rating"];

const SAMPLE_ROWS: [[&str; 5]; 3] = [
    ["E001", "Jane Smith", "Engineering", "Sarah Kim", "3"],
    ["E002", "John Doe", "Marketing", "Tom Wilson", "4"],
    ["E003", "Alice Johnson", "HR", "Mark Lee", "5"],
];

/// Write a sample roster with the expected headers and three example rows.
pub fn write_template(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADERS)?;
    for row in SAMPLE_ROWS {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
