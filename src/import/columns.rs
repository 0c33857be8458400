/// Canonical roster field names.
pub const EMPLOYEE_ID: &str = "employee_id";
pub const NAME: &str = "name";
pub const DEPARTMENT: &str = "department";
pub const MANAGER: &str = "manager";
pub const RATING: &str = "rating";

pub const REQUIRED: [&str; 5] = [EMPLOYEE_ID, NAME, DEPARTMENT, MANAGER, RATING];

/// Map a raw header to its canonical field name. Rosters come from many
/// HR exports, so common spellings are accepted; unknown columns are
/// ignored by the importer.
pub fn normalize_header(raw: &str) -> Option<&'static str> {
    match raw.trim().to_lowercase().as_str() {
        "employee id" | "employeeid" | "employee_id" | "emp_id" | "id" => Some(EMPLOYEE_ID),
        "name" | "employee name" | "fullname" | "full_name" => Some(NAME),
        "department" | "dept" | "dep" => Some(DEPARTMENT),
        "manager" | "supervisor" | "manager name" => Some(MANAGER),
        "rating" | "performance rating" | "score" | "performance score" => Some(RATING),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_spellings_map_to_canonical_names() {
        assert_eq!(normalize_header("Employee ID"), Some(EMPLOYEE_ID));
        assert_eq!(normalize_header("emp_id"), Some(EMPLOYEE_ID));
        assert_eq!(normalize_header(" Full_Name "), Some(NAME));
        assert_eq!(normalize_header("Dept"), Some(DEPARTMENT));
        assert_eq!(normalize_header("Supervisor"), Some(MANAGER));
        assert_eq!(normalize_header("Performance Score"), Some(RATING));
    }

    #[test]
    fn unknown_headers_are_rejected() {
        assert_eq!(normalize_header("Location"), None);
        assert_eq!(normalize_header(""), None);
    }
}
