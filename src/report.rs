use std::fmt::Write;

use chrono::NaiveDate;

use crate::dataset;
use crate::models::{LevelSummary, PredictionResult, ScoredRecord, StressLevel};

pub fn summarize_by_level(records: &[ScoredRecord]) -> Vec<LevelSummary> {
    let mut totals: std::collections::BTreeMap<StressLevel, (usize, u64)> =
        std::collections::BTreeMap::new();

    for record in records {
        let entry = totals.entry(record.result.level).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(record.result.score);
    }

    totals
        .into_iter()
        .map(|(level, (count, total_score))| LevelSummary {
            level,
            count,
            avg_score: total_score as f64 / count as f64,
        })
        .collect()
}

/// Highest scores first; ties keep their input order.
pub fn rank_by_score(records: &[ScoredRecord]) -> Vec<&ScoredRecord> {
    let mut ranked: Vec<&ScoredRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    ranked
}

pub fn format_prediction(result: &PredictionResult) -> String {
    let mut output = String::new();

    // Shown out of 100 although the score is not capped.
    let _ = writeln!(output, "Stress Score: {}/100", result.score);
    let _ = writeln!(
        output,
        "Level: {} ({})",
        result.level.label(),
        result.color.name()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "Recommendations:");
    for recommendation in &result.recommendations {
        let _ = writeln!(output, "- {recommendation}");
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "Breakdown:");
    for contribution in &result.contributions {
        let _ = writeln!(
            output,
            "- {:<18} +{}",
            contribution.factor.label(),
            contribution.points
        );
    }

    output
}

pub fn format_home() -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Understanding Student Stress Through Data");
    let _ = writeln!(output);
    for card in dataset::STAT_CARDS.iter() {
        let _ = writeln!(output, "{:<22} {}", card.title, card.value);
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "The Problem");
    let _ = writeln!(output, "{}", dataset::PROBLEM_STATEMENT);
    for (title, text) in dataset::FEATURES.iter() {
        let _ = writeln!(output);
        let _ = writeln!(output, "{title}");
        let _ = writeln!(output, "{text}");
    }

    output
}

pub fn format_dashboard() -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Stress Level Distribution");
    for bucket in dataset::STRESS_DISTRIBUTION.iter() {
        let label = format!("{} Stress", bucket.level);
        let _ = writeln!(
            output,
            "  {:<14} {:>4} students ({}%)",
            label, bucket.count, bucket.percentage
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Study Time vs Stress Level");
    for point in dataset::STUDY_TIME_VS_STRESS.iter() {
        let _ = writeln!(output, "  {:<5} hours  {:.1}", point.hours, point.stress);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Key Stress Factors Impact Analysis");
    for factor in dataset::FACTORS_IMPACT.iter() {
        let bar = "#".repeat((factor.impact / 5) as usize);
        let _ = writeln!(output, "  {:<20} {:>3} {}", factor.factor, factor.impact, bar);
    }

    output
}

pub fn format_about() -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Project Overview");
    let _ = writeln!(output, "{}", dataset::PROJECT_OVERVIEW);
    let _ = writeln!(output);
    let _ = writeln!(output, "Methodology");
    for (step, detail) in dataset::METHODOLOGY.iter() {
        let _ = writeln!(output, "- {step}: {detail}");
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "Key Findings");
    for finding in dataset::KEY_FINDINGS.iter() {
        let _ = writeln!(output, "- {finding}");
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "Technologies Used");
    let _ = writeln!(output, "{}", dataset::TECHNOLOGIES.join(", "));
    let _ = writeln!(output);
    let _ = writeln!(output, "Future Scope");
    for item in dataset::FUTURE_SCOPE.iter() {
        let _ = writeln!(output, "- {item}");
    }

    output
}

pub fn format_level_mix(summaries: &[LevelSummary]) -> String {
    let mut output = String::new();
    for summary in summaries {
        let _ = writeln!(
            output,
            "- {}: {} students (avg score {:.1})",
            summary.level.label(),
            summary.count,
            summary.avg_score
        );
    }
    output
}

pub fn build_report(generated_on: NaiveDate, batch: Option<&[ScoredRecord]>) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Student Stress Analysis Report");
    let _ = writeln!(output, "Generated on {generated_on}");
    let _ = writeln!(output);
    let _ = writeln!(output, "## Stress Level Distribution");
    let _ = writeln!(output, "| Level | Students | Share |");
    let _ = writeln!(output, "|---|---|---|");
    for bucket in dataset::STRESS_DISTRIBUTION.iter() {
        let _ = writeln!(
            output,
            "| {} | {} | {}% |",
            bucket.level, bucket.count, bucket.percentage
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Study Time vs Stress");
    let _ = writeln!(output, "| Hours | Stress |");
    let _ = writeln!(output, "|---|---|");
    for point in dataset::STUDY_TIME_VS_STRESS.iter() {
        let _ = writeln!(output, "| {} | {:.1} |", point.hours, point.stress);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Factor Impact");
    let _ = writeln!(output, "| Factor | Impact |");
    let _ = writeln!(output, "|---|---|");
    for factor in dataset::FACTORS_IMPACT.iter() {
        let _ = writeln!(output, "| {} | {} |", factor.factor, factor.impact);
    }

    let Some(records) = batch else {
        return output;
    };

    let _ = writeln!(output);
    let _ = writeln!(output, "## Level Mix");
    if records.is_empty() {
        let _ = writeln!(output, "No student profiles were scored.");
    } else {
        output.push_str(&format_level_mix(&summarize_by_level(records)));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Highest Stress Students");
    if records.is_empty() {
        let _ = writeln!(output, "No student profiles were scored.");
    } else {
        for record in rank_by_score(records).into_iter().take(10) {
            let _ = writeln!(
                output,
                "- {}: score {} ({})",
                record.student,
                record.result.score,
                record.result.level.label()
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialStatus, PartTimeJob, StudentProfile};
    use crate::scorer;

    fn scored(student: &str, profile: StudentProfile) -> ScoredRecord {
        ScoredRecord {
            student: student.to_string(),
            result: scorer::score(&profile).unwrap(),
        }
    }

    fn sample_batch() -> Vec<ScoredRecord> {
        let stressed = StudentProfile {
            sleep_hours: 4,
            financial_status: FinancialStatus::Low,
            part_time_job: PartTimeJob::Yes,
            ..StudentProfile::default()
        };
        let calm = StudentProfile {
            financial_status: FinancialStatus::High,
            ..StudentProfile::default()
        };
        vec![
            scored("Avery Lee", StudentProfile::default()),
            scored("Kiara Patel", stressed),
            scored("Jules Moreno", calm),
            scored("Sam Ortiz", StudentProfile::default()),
        ]
    }

    #[test]
    fn summaries_are_ordered_by_level() {
        let summaries = summarize_by_level(&sample_batch());
        let levels: Vec<StressLevel> = summaries.iter().map(|s| s.level).collect();
        assert_eq!(
            levels,
            vec![
                StressLevel::LowStress,
                StressLevel::ModerateStress,
                StressLevel::HighStress
            ]
        );
        assert_eq!(summaries[1].count, 2);
        assert!((summaries[1].avg_score - 40.0).abs() < 0.001);
    }

    #[test]
    fn empty_levels_are_omitted() {
        let batch = vec![scored("Avery Lee", StudentProfile::default())];
        let summaries = summarize_by_level(&batch);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].level, StressLevel::ModerateStress);
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let batch = sample_batch();
        let ranked: Vec<&str> = rank_by_score(&batch)
            .iter()
            .map(|r| r.student.as_str())
            .collect();
        assert_eq!(ranked, vec!["Kiara Patel", "Avery Lee", "Sam Ortiz", "Jules Moreno"]);
    }

    #[test]
    fn prediction_panel_lists_advice_and_breakdown() {
        let result = scorer::score(&StudentProfile::default()).unwrap();
        let text = format_prediction(&result);
        assert!(text.starts_with("Stress Score: 40/100\nLevel: Moderate Stress (yellow)\n"));
        assert!(text.contains("- Take regular breaks\n"));
        assert!(text.contains("Financial status"));
    }

    #[test]
    fn high_stress_panel_is_tagged_red() {
        let profile = StudentProfile {
            sleep_hours: 4,
            financial_status: FinancialStatus::Low,
            ..StudentProfile::default()
        };
        let text = format_prediction(&scorer::score(&profile).unwrap());
        assert!(text.contains("Stress Score: 80/100\nLevel: High Stress (red)\n"));
    }

    #[test]
    fn home_lists_stat_cards_and_features() {
        let text = format_home();
        assert!(text
            .lines()
            .any(|line| line.starts_with("Students Analyzed") && line.ends_with(" 345")));
        assert!(text
            .lines()
            .any(|line| line.starts_with("Prediction Accuracy") && line.ends_with(" 87%")));
        assert!(text.contains("The Problem\nStudents today face"));
        assert!(text.contains("\nIntervention Support\n"));
    }

    #[test]
    fn about_lists_methodology_and_findings() {
        let text = format_about();
        assert!(text.starts_with("Project Overview\nThis B.Tech final year project"));
        assert!(text.contains("- Data Collection: Dataset collected from 345 university students"));
        assert!(text.contains("- Deployment: Web-based interface"));
        assert!(text.contains(
            "- Students with less than 6 hours of sleep show 3x higher stress levels\n"
        ));
        assert!(text.contains("Python, Pandas, Scikit-learn"));
        assert!(text.contains("- Expansion to multiple universities for broader dataset\n"));
    }

    #[test]
    fn dashboard_passes_sample_data_through() {
        let text = format_dashboard();
        assert!(text.contains("Medium Stress"));
        assert!(text.contains("180 students (52%)"));
        assert!(text.contains("8+"));
        assert!(text.contains("Academic Pressure"));
    }

    #[test]
    fn report_without_batch_has_only_dashboard() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let report = build_report(date, None);
        assert!(report.contains("Generated on 2026-02-02"));
        assert!(report.contains("| Medium | 180 | 52% |"));
        assert!(!report.contains("## Level Mix"));
    }

    #[test]
    fn report_with_batch_lists_highest_stress_first() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let batch = sample_batch();
        let report = build_report(date, Some(batch.as_slice()));
        assert!(report.contains("## Level Mix"));
        assert!(report.contains("- Moderate Stress: 2 students (avg score 40.0)"));
        let kiara = report.find("- Kiara Patel").unwrap();
        let avery = report.find("- Avery Lee").unwrap();
        assert!(kiara < avery);
    }

    #[test]
    fn report_with_empty_batch_says_so() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let report = build_report(date, Some(&[][..]));
        assert!(report.contains("No student profiles were scored."));
    }
}
