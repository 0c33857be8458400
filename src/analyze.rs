use crate::distribution::{bell_curve_data, calculate_distribution, distribution_stats};
use crate::types::employee::Employee;
use crate::types::rating::PercentageSplit;
use crate::types::report::{CalibrationReport, Finding};

/// Run the distribution engine and wrap the result in a report with
/// findings. An invalid split blocks calibration; per-bucket deviations
/// and a missing config file are warnings.
pub fn analyze(
    employees: &[Employee],
    targets: &PercentageSplit,
    deviation_threshold: f64,
    settings_found: bool,
) -> CalibrationReport {
    let distribution = calculate_distribution(employees, targets, deviation_threshold);
    let bell_curve = bell_curve_data(&distribution, employees.len());
    let stats = distribution_stats(&distribution);

    let mut findings = Vec::new();

    if !targets.is_valid() {
        let remaining = targets.remaining();
        let body = if remaining > 0.0 {
            format!(
                "Target percentages sum to {} and must sum to exactly 100; short by {}.",
                targets.sum(),
                remaining
            )
        } else {
            format!(
                "Target percentages sum to {} and must sum to exactly 100; over by {}.",
                targets.sum(),
                -remaining
            )
        };
        findings.push(Finding {
            id: "targets.sum".to_string(),
            title: "Target split does not sum to 100".to_string(),
            body,
            blocking: true,
        });
    }

    for bucket in &distribution {
        if bucket.has_deviation {
            findings.push(Finding {
                id: format!("distribution.rating{}", bucket.rating),
                title: format!("Rating {} deviates from target", bucket.rating),
                body: format!(
                    "Actual {:.1}% vs target {:.1}% (deviation {:+.1} points, threshold {}).",
                    bucket.actual_percentage,
                    bucket.target_percentage,
                    bucket.deviation,
                    deviation_threshold
                ),
                blocking: false,
            });
        }
    }

    if !settings_found {
        findings.push(Finding {
            id: "settings.missing_config".to_string(),
            title: "No calibra.toml found".to_string(),
            body: "Analysis used the default target split and deviation threshold.".to_string(),
            blocking: false,
        });
    }

    CalibrationReport {
        total_employees: employees.len(),
        distribution,
        bell_curve,
        stats,
        target_sum: targets.sum(),
        targets_valid: targets.is_valid(),
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rating::Rating;

    fn roster(ratings: &[u8]) -> Vec<Employee> {
        ratings
            .iter()
            .enumerate()
            .map(|(index, value)| Employee {
                employee_id: format!("E{index:03}"),
                name: format!("Employee {index}"),
                department: "Engineering".to_string(),
                manager: "Sarah Kim".to_string(),
                rating: Rating::from_u8(*value).expect("test ratings should be 1-5"),
                is_frozen: false,
            })
            .collect()
    }

    #[test]
    fn analyze_flags_every_deviating_bucket() {
        let employees = roster(&[1, 1, 2, 3, 3, 3, 4, 5]);
        let report = analyze(&employees, &PercentageSplit::default(), 2.0, true);

        assert_eq!(report.total_employees, 8);
        assert!(report.targets_valid);
        assert!(!report.has_blocking());
        let deviation_findings = report
            .findings
            .iter()
            .filter(|finding| finding.id.starts_with("distribution."))
            .count();
        assert_eq!(deviation_findings, 5);
    }

    #[test]
    fn analyze_reports_invalid_split_as_blocking() {
        let targets = PercentageSplit {
            rating1: 30.0,
            rating2: 20.0,
            rating3: 40.0,
            rating4: 20.0,
            rating5: 10.0,
        };
        let report = analyze(&[], &targets, 2.0, true);

        assert_eq!(report.target_sum, 120.0);
        assert!(!report.targets_valid);
        let finding = report
            .findings
            .iter()
            .find(|finding| finding.id == "targets.sum")
            .expect("sum finding should exist");
        assert!(finding.blocking);
        assert!(finding.body.contains("over by 20"));
    }

    #[test]
    fn analyze_reports_shortfall_wording() {
        let targets = PercentageSplit {
            rating1: 10.0,
            rating2: 20.0,
            rating3: 30.0,
            rating4: 15.0,
            rating5: 5.0,
        };
        let report = analyze(&[], &targets, 2.0, true);
        let finding = report
            .findings
            .iter()
            .find(|finding| finding.id == "targets.sum")
            .expect("sum finding should exist");
        assert!(finding.body.contains("short by 20"));
    }

    #[test]
    fn analyze_warns_when_config_is_missing() {
        let employees = roster(&[1, 2, 2, 3, 3, 3, 3, 4, 4, 5]);
        let report = analyze(&employees, &PercentageSplit::default(), 2.0, false);
        assert!(report
            .findings
            .iter()
            .any(|finding| finding.id == "settings.missing_config" && !finding.blocking));
    }

    #[test]
    fn empty_roster_with_nonzero_targets_still_deviates() {
        let report = analyze(&[], &PercentageSplit::default(), 2.0, true);
        // every default target exceeds the threshold, so all 5 buckets flag
        let deviation_findings = report
            .findings
            .iter()
            .filter(|finding| finding.id.starts_with("distribution."))
            .count();
        assert_eq!(deviation_findings, 5);
        assert!(report.has_warnings());
    }

    #[test]
    fn matched_distribution_produces_no_findings() {
        // 1,2,2,3,3,3,3,4,4,5 against 10/20/40/20/10 is an exact match
        let employees = roster(&[1, 2, 2, 3, 3, 3, 3, 4, 4, 5]);
        let report = analyze(&employees, &PercentageSplit::default(), 2.0, true);
        assert!(report.findings.is_empty());
        assert!(!report.has_warnings());
    }
}
