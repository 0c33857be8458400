use crate::types::rating::Rating;
use serde::{Deserialize, Serialize};

/// An employee held in a dataset. Identity fields are opaque to the
/// distribution engine; only `rating` is read there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub manager: String,
    pub rating: Rating,
    /// Frozen rows are excluded from calibration edits.
    #[serde(default)]
    pub is_frozen: bool,
}

/// A validated roster row, before dataset bookkeeping is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedEmployee {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub manager: String,
    pub rating: Rating,
}

impl From<ImportedEmployee> for Employee {
    fn from(imported: ImportedEmployee) -> Self {
        Self {
            employee_id: imported.employee_id,
            name: imported.name,
            department: imported.department,
            manager: imported.manager,
            rating: imported.rating,
            is_frozen: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imported_employee_converts_unfrozen() {
        let imported = ImportedEmployee {
            employee_id: "E001".to_string(),
            name: "Jane Smith".to_string(),
            department: "Engineering".to_string(),
            manager: "Sarah Kim".to_string(),
            rating: Rating::Three,
        };

        let employee = Employee::from(imported);
        assert_eq!(employee.employee_id, "E001");
        assert!(!employee.is_frozen);
    }

    #[test]
    fn employee_deserializes_without_frozen_flag() {
        let employee: Employee = serde_json::from_str(
            r#"{
                "employee_id": "E002",
                "name": "John Doe",
                "department": "Marketing",
                "manager": "Tom Wilson",
                "rating": 4
            }"#,
        )
        .expect("employee should deserialize");
        assert_eq!(employee.rating, Rating::Four);
        assert!(!employee.is_frozen);
    }
}
