use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartTimeJob {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinancialStatus {
    Low,
    Medium,
    High,
}

/// One filled-in prediction form. Values are checked by
/// [`crate::validation::validate`] before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub study_time: i32,
    pub sleep_hours: i32,
    pub grade10: f64,
    pub grade12: f64,
    pub college_marks: f64,
    pub social_media: i32,
    pub travel_time: i32,
    pub part_time_job: PartTimeJob,
    pub financial_status: FinancialStatus,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            study_time: 5,
            sleep_hours: 7,
            grade10: 85.0,
            grade12: 80.0,
            college_marks: 75.0,
            social_media: 3,
            travel_time: 30,
            part_time_job: PartTimeJob::No,
            financial_status: FinancialStatus::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StressLevel {
    LowStress,
    ModerateStress,
    HighStress,
}

impl StressLevel {
    pub fn label(self) -> &'static str {
        match self {
            StressLevel::LowStress => "Low Stress",
            StressLevel::ModerateStress => "Moderate Stress",
            StressLevel::HighStress => "High Stress",
        }
    }

    pub fn color(self) -> ColorTag {
        match self {
            StressLevel::LowStress => ColorTag::Green,
            StressLevel::ModerateStress => ColorTag::Yellow,
            StressLevel::HighStress => ColorTag::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Green,
    Yellow,
    Red,
}

impl ColorTag {
    pub fn name(self) -> &'static str {
        match self {
            ColorTag::Green => "green",
            ColorTag::Yellow => "yellow",
            ColorTag::Red => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    StudyTime,
    Sleep,
    AcademicAverage,
    SocialMedia,
    TravelTime,
    FinancialStatus,
    PartTimeJob,
}

impl Factor {
    pub fn label(self) -> &'static str {
        match self {
            Factor::StudyTime => "Study time",
            Factor::Sleep => "Sleep",
            Factor::AcademicAverage => "Academic average",
            Factor::SocialMedia => "Social media",
            Factor::TravelTime => "Travel time",
            Factor::FinancialStatus => "Financial status",
            Factor::PartTimeJob => "Part-time job",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub factor: Factor,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    pub score: u32,
    pub level: StressLevel,
    pub color: ColorTag,
    pub recommendations: Vec<&'static str>,
    pub contributions: Vec<Contribution>,
}

/// A profile read from a batch file, labelled for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub student: String,
    pub profile: StudentProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    pub student: String,
    pub result: PredictionResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelSummary {
    pub level: StressLevel,
    pub count: usize,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct StressBucket {
    pub level: &'static str,
    pub count: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct StudyTimePoint {
    pub hours: &'static str,
    pub stress: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct FactorImpact {
    pub factor: &'static str,
    pub impact: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
}
