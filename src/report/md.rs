use crate::types::report::CalibrationReport;

pub fn to_markdown(report: &CalibrationReport) -> String {
    let mut output = String::new();
    output.push_str("# Calibration Report\n\n");
    output.push_str(&format!("Employees: {}\n", report.total_employees));
    output.push_str(&format!(
        "Target sum: {} ({})\n\n",
        report.target_sum,
        if report.targets_valid {
            "valid"
        } else {
            "invalid"
        }
    ));

    output.push_str("## Distribution\n\n");
    output.push_str("| rating | actual | actual % | target % | deviation | flagged |\n");
    output.push_str("|-------:|-------:|---------:|---------:|----------:|:--------|\n");
    for bucket in &report.distribution {
        output.push_str(&format!(
            "| {} | {} | {:.1} | {:.1} | {:+.1} | {} |\n",
            bucket.rating,
            bucket.actual_count,
            bucket.actual_percentage,
            bucket.target_percentage,
            bucket.deviation,
            if bucket.has_deviation { "yes" } else { "" }
        ));
    }
    output.push('\n');

    output.push_str("## Statistics\n\n");
    output.push_str(&format!(
        "- mean: {:.2}\n- median: {:.0}\n- mode: {}\n- total deviation: {:.1}\n\n",
        report.stats.mean, report.stats.median, report.stats.mode, report.stats.total_deviation
    ));

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking {
                    "blocking"
                } else {
                    "warning"
                },
                finding.title,
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
    use crate::types::rating::PercentageSplit;

    #[test]
    fn markdown_report_contains_sections() {
        let report = analyze(&[], &PercentageSplit::default(), 2.0, true);
        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Calibration Report"));
        assert!(rendered.contains("## Distribution"));
        assert!(rendered.contains("## Statistics"));
        assert!(rendered.contains("## Findings"));
        assert!(rendered.contains("[warning]"));
    }
}
