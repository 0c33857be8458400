use crate::types::report::CalibrationReport;

/// Plain-text rendering for terminal use; the default format.
pub fn to_table(report: &CalibrationReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "employees: {}   target sum: {} ({})\n\n",
        report.total_employees,
        report.target_sum,
        if report.targets_valid {
            "valid"
        } else {
            "invalid"
        }
    ));

    output.push_str(
        "rating   actual   actual%   target%   target#   deviation   flag\n",
    );
    for (bucket, point) in report.distribution.iter().zip(report.bell_curve.iter()) {
        output.push_str(&format!(
            "{:<8} {:<8} {:<9.1} {:<9.1} {:<9} {:<+11.1} {}\n",
            bucket.rating,
            bucket.actual_count,
            bucket.actual_percentage,
            bucket.target_percentage,
            point.target_count,
            bucket.deviation,
            if bucket.has_deviation { "*" } else { "" }
        ));
    }

    output.push_str(&format!(
        "\nmean {:.2}   median {:.0}   mode {}   total deviation {:.1}\n",
        report.stats.mean, report.stats.median, report.stats.mode, report.stats.total_deviation
    ));

    if !report.findings.is_empty() {
        output.push('\n');
        for finding in &report.findings {
            output.push_str(&format!(
                "[{}] {}: {}\n",
                if finding.blocking { "BLOCKING" } else { "WARN" },
                finding.id,
                finding.body
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::types::employee::Employee;
    use crate::types::rating::{PercentageSplit, Rating};

    #[test]
    fn table_report_lists_all_five_ratings() {
        let employees = vec![Employee {
            employee_id: "E001".to_string(),
            name: "Jane Smith".to_string(),
            department: "Engineering".to_string(),
            manager: "Sarah Kim".to_string(),
            rating: Rating::Three,
            is_frozen: false,
        }];
        let report = analyze(&employees, &PercentageSplit::default(), 2.0, true);
        let rendered = to_table(&report);

        assert!(rendered.contains("employees: 1"));
        // five data lines plus the header mention the ratings in order
        for rating in 1..=5 {
            assert!(rendered.lines().any(|line| line.starts_with(&rating.to_string())));
        }
        assert!(rendered.contains("[WARN] distribution.rating3"));
    }
}
