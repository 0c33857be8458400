use crate::import::columns;
use crate::types::employee::ImportedEmployee;
use crate::types::rating::Rating;
use std::collections::HashMap;

/// A single validation failure, 1-indexed by data row for user display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,
    pub field: String,
    pub message: String,
}

impl RowError {
    fn new(row: usize, field: &str, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate one normalized row. All failures for the row are collected
/// rather than stopping at the first.
pub fn validate_row(
    row: usize,
    fields: &HashMap<&'static str, String>,
) -> std::result::Result<ImportedEmployee, Vec<RowError>> {
    let mut errors = Vec::new();

    let employee_id = required_text(row, fields, columns::EMPLOYEE_ID, &mut errors);
    let name = required_text(row, fields, columns::NAME, &mut errors);
    let department = required_text(row, fields, columns::DEPARTMENT, &mut errors);
    let manager = required_text(row, fields, columns::MANAGER, &mut errors);

    let rating = match fields.get(columns::RATING).map(|value| value.trim()) {
        Some(raw) if !raw.is_empty() => match raw.parse::<u8>().ok().and_then(Rating::from_u8) {
            Some(rating) => Some(rating),
            None => {
                errors.push(RowError::new(
                    row,
                    columns::RATING,
                    format!("rating must be 1, 2, 3, 4, or 5, got '{raw}'"),
                ));
                None
            }
        },
        _ => {
            errors.push(RowError::new(row, columns::RATING, "rating is required"));
            None
        }
    };

    match (employee_id, name, department, manager, rating) {
        (Some(employee_id), Some(name), Some(department), Some(manager), Some(rating))
            if errors.is_empty() =>
        {
            Ok(ImportedEmployee {
                employee_id,
                name,
                department,
                manager,
                rating,
            })
        }
        _ => Err(errors),
    }
}

fn required_text(
    row: usize,
    fields: &HashMap<&'static str, String>,
    field: &'static str,
    errors: &mut Vec<RowError>,
) -> Option<String> {
    let trimmed = fields.get(field).map(|value| value.trim()).unwrap_or("");
    if trimmed.is_empty() {
        errors.push(RowError::new(row, field, format!("{field} is required")));
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_fields(
        employee_id: &str,
        name: &str,
        department: &str,
        manager: &str,
        rating: &str,
    ) -> HashMap<&'static str, String> {
        HashMap::from([
            (columns::EMPLOYEE_ID, employee_id.to_string()),
            (columns::NAME, name.to_string()),
            (columns::DEPARTMENT, department.to_string()),
            (columns::MANAGER, manager.to_string()),
            (columns::RATING, rating.to_string()),
        ])
    }

    #[test]
    fn valid_row_is_trimmed_and_parsed() {
        let fields = row_fields(" E001 ", "Jane Smith", "Engineering", "Sarah Kim", " 3 ");
        let employee = validate_row(1, &fields).expect("row should validate");
        assert_eq!(employee.employee_id, "E001");
        assert_eq!(employee.rating, Rating::Three);
    }

    #[test]
    fn blank_required_field_is_reported() {
        let fields = row_fields("E001", "  ", "Engineering", "Sarah Kim", "3");
        let errors = validate_row(4, &fields).expect_err("blank name should fail");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].row, 4);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn out_of_range_rating_is_reported() {
        let fields = row_fields("E001", "Jane Smith", "Engineering", "Sarah Kim", "6");
        let errors = validate_row(2, &fields).expect_err("rating 6 should fail");
        assert_eq!(errors[0].field, "rating");
        assert!(errors[0].message.contains("must be 1, 2, 3, 4, or 5"));
    }

    #[test]
    fn non_numeric_rating_is_reported() {
        let fields = row_fields("E001", "Jane Smith", "Engineering", "Sarah Kim", "high");
        let errors = validate_row(2, &fields).expect_err("text rating should fail");
        assert_eq!(errors[0].field, "rating");
    }

    #[test]
    fn multiple_failures_in_one_row_are_all_collected() {
        let fields = row_fields("", "Jane Smith", "", "Sarah Kim", "0");
        let errors = validate_row(7, &fields).expect_err("row should fail");
        let fields_with_errors: Vec<&str> =
            errors.iter().map(|error| error.field.as_str()).collect();
        assert_eq!(fields_with_errors, vec!["employee_id", "department", "rating"]);
    }
}
