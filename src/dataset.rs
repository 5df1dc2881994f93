use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::models::{
    FactorImpact, FinancialStatus, PartTimeJob, ProfileRecord, StatCard, StressBucket,
    StudentProfile, StudyTimePoint,
};

pub const STRESS_DISTRIBUTION: [StressBucket; 3] = [
    StressBucket {
        level: "Low",
        count: 120,
        percentage: 35,
    },
    StressBucket {
        level: "Medium",
        count: 180,
        percentage: 52,
    },
    StressBucket {
        level: "High",
        count: 45,
        percentage: 13,
    },
];

pub const STUDY_TIME_VS_STRESS: [StudyTimePoint; 5] = [
    StudyTimePoint {
        hours: "0-2",
        stress: 7.5,
    },
    StudyTimePoint {
        hours: "2-4",
        stress: 5.2,
    },
    StudyTimePoint {
        hours: "4-6",
        stress: 4.8,
    },
    StudyTimePoint {
        hours: "6-8",
        stress: 6.5,
    },
    StudyTimePoint {
        hours: "8+",
        stress: 8.2,
    },
];

pub const FACTORS_IMPACT: [FactorImpact; 6] = [
    FactorImpact {
        factor: "Academic Pressure",
        impact: 85,
    },
    FactorImpact {
        factor: "Financial Status",
        impact: 72,
    },
    FactorImpact {
        factor: "Sleep Quality",
        impact: 68,
    },
    FactorImpact {
        factor: "Social Media Usage",
        impact: 55,
    },
    FactorImpact {
        factor: "Travel Time",
        impact: 45,
    },
    FactorImpact {
        factor: "Part-time Job",
        impact: 38,
    },
];

pub const STAT_CARDS: [StatCard; 4] = [
    StatCard {
        title: "Students Analyzed",
        value: "345",
    },
    StatCard {
        title: "Prediction Accuracy",
        value: "87%",
    },
    StatCard {
        title: "High Stress Cases",
        value: "13%",
    },
    StatCard {
        title: "Improvement Rate",
        value: "68%",
    },
];

pub const PROBLEM_STATEMENT: &str = "Students today face unprecedented levels of stress from \
multiple sources including academic pressure, financial constraints, social media, and personal \
challenges. This stress significantly impacts their mental health, academic performance, and \
overall well-being. Our research aims to understand these stress factors through data analysis \
and develop predictive models to identify at-risk students early.";

pub const FEATURES: [(&str, &str); 3] = [
    (
        "Data Analysis",
        "Comprehensive exploratory data analysis to identify patterns and correlations in student behavior and stress levels.",
    ),
    (
        "ML Prediction",
        "Machine learning models trained to predict stress levels based on various lifestyle and academic factors.",
    ),
    (
        "Intervention Support",
        "Personalized recommendations and support systems to help students manage stress effectively.",
    ),
];

pub const PROJECT_OVERVIEW: &str = "This B.Tech final year project focuses on analyzing and \
predicting student stress levels using machine learning techniques. The system analyzes various \
factors including academic performance, study habits, sleep patterns, social media usage, and \
financial status to provide insights into student well-being.";

pub const METHODOLOGY: [(&str, &str); 4] = [
    (
        "Data Collection",
        "Dataset collected from 345 university students covering academic records, lifestyle habits, and self-reported stress levels.",
    ),
    (
        "Data Preprocessing",
        "Data cleaning, handling missing values, feature scaling, and encoding categorical variables for model training.",
    ),
    (
        "Model Training",
        "Multiple ML algorithms tested including Logistic Regression, Random Forest, and SVM. Best performing model achieved 87% accuracy.",
    ),
    (
        "Deployment",
        "Web-based interface for real-time predictions and data visualization to make insights accessible to educators and counselors.",
    ),
];

pub const KEY_FINDINGS: [&str; 4] = [
    "Academic pressure is the primary stress factor affecting 85% of students",
    "Students with less than 6 hours of sleep show 3x higher stress levels",
    "Optimal study time is 4-6 hours daily; both extremes correlate with higher stress",
    "Financial constraints significantly impact 72% of stressed students",
];

pub const TECHNOLOGIES: [&str; 8] = [
    "Python",
    "Pandas",
    "Scikit-learn",
    "NumPy",
    "Matplotlib",
    "Seaborn",
    "React",
    "Machine Learning",
];

pub const FUTURE_SCOPE: [&str; 5] = [
    "Integration with wearable devices for real-time physiological data",
    "Mobile application for continuous stress monitoring",
    "AI-powered personalized intervention recommendations",
    "Integration with university counseling services",
    "Expansion to multiple universities for broader dataset",
];

/// Reads prediction form submissions from a CSV file. Enum columns are
/// parsed here; numeric ranges are checked when the profile is scored.
pub fn load_profiles(csv_path: &Path) -> anyhow::Result<Vec<ProfileRecord>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        #[serde(default)]
        student: Option<String>,
        study_time: i32,
        sleep_hours: i32,
        grade10: f64,
        grade12: f64,
        college_marks: f64,
        social_media: i32,
        travel_time: i32,
        part_time_job: String,
        financial_status: String,
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut records = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row_number = index + 1;
        let row = result.with_context(|| format!("row {row_number}: malformed record"))?;

        let part_time_job: PartTimeJob = row
            .part_time_job
            .parse()
            .with_context(|| format!("row {row_number}: invalid profile"))?;
        let financial_status: FinancialStatus = row
            .financial_status
            .parse()
            .with_context(|| format!("row {row_number}: invalid profile"))?;

        let student = row
            .student
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("row {row_number}"));

        records.push(ProfileRecord {
            student,
            profile: StudentProfile {
                study_time: row.study_time,
                sleep_hours: row.sleep_hours,
                grade10: row.grade10,
                grade12: row.grade12,
                college_marks: row.college_marks,
                social_media: row.social_media,
                travel_time: row.travel_time,
                part_time_job,
                financial_status,
            },
        });
    }

    info!(path = %csv_path.display(), rows = records.len(), "loaded student profiles");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn sample_distribution_matches_students_analyzed() {
        let total: u32 = STRESS_DISTRIBUTION.iter().map(|b| b.count).sum();
        assert_eq!(total, 345);
        let percent: u32 = STRESS_DISTRIBUTION.iter().map(|b| b.percentage).sum();
        assert_eq!(percent, 100);
    }

    #[test]
    fn loads_rows_with_labels() {
        let file = write_csv(
            "student,study_time,sleep_hours,grade10,grade12,college_marks,social_media,travel_time,part_time_job,financial_status\n\
             Avery Lee,5,7,85,80,75,3,30,no,medium\n\
             ,1,4,50,50,50,8,90,Yes,LOW\n",
        );

        let records = load_profiles(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].student, "Avery Lee");
        assert_eq!(records[0].profile, StudentProfile::default());
        assert_eq!(records[1].student, "row 2");
        assert_eq!(records[1].profile.part_time_job, PartTimeJob::Yes);
        assert_eq!(records[1].profile.financial_status, FinancialStatus::Low);
    }

    #[test]
    fn student_column_is_optional() {
        let file = write_csv(
            "study_time,sleep_hours,grade10,grade12,college_marks,social_media,travel_time,part_time_job,financial_status\n\
             4,8,70,70,70,6,10,no,high\n",
        );

        let records = load_profiles(file.path()).unwrap();
        assert_eq!(records[0].student, "row 1");
        assert_eq!(records[0].profile.social_media, 6);
    }

    #[test]
    fn header_only_file_loads_no_rows() {
        let file = write_csv(
            "student,study_time,sleep_hours,grade10,grade12,college_marks,social_media,travel_time,part_time_job,financial_status\n",
        );

        let records = load_profiles(file.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn unknown_financial_status_is_a_validation_error() {
        let file = write_csv(
            "student,study_time,sleep_hours,grade10,grade12,college_marks,social_media,travel_time,part_time_job,financial_status\n\
             Jules Moreno,5,7,85,80,75,3,30,no,wealthy\n",
        );

        let err = load_profiles(file.path()).unwrap_err();
        assert!(err.to_string().contains("row 1"));
        let validation = err.downcast_ref::<ValidationError>().unwrap();
        assert_eq!(validation.field(), "financial_status");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_profiles(Path::new("/nonexistent/profiles.csv")).unwrap_err();
        assert!(err.to_string().contains("profiles.csv"));
    }
}
