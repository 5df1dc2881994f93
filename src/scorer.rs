use tracing::debug;

use crate::error::ValidationError;
use crate::models::{
    Contribution, Factor, FinancialStatus, PartTimeJob, PredictionResult, StressLevel,
    StudentProfile,
};
use crate::validation;

const LOW_STRESS_ADVICE: [&str; 3] = [
    "Maintain current lifestyle",
    "Keep up good sleep habits",
    "Continue balanced study routine",
];

const MODERATE_STRESS_ADVICE: [&str; 4] = [
    "Practice stress management techniques",
    "Ensure adequate sleep (7-8 hours)",
    "Take regular breaks",
    "Consider talking to a counselor",
];

const HIGH_STRESS_ADVICE: [&str; 5] = [
    "Seek counseling support immediately",
    "Prioritize mental health",
    "Reduce workload if possible",
    "Practice meditation/mindfulness",
    "Talk to academic advisor",
];

/// Scores a profile by adding up fixed points per factor and banding the
/// total into a stress level. The score is not capped.
pub fn score(profile: &StudentProfile) -> Result<PredictionResult, ValidationError> {
    validation::validate(profile)?;

    let contributions = vec![
        Contribution {
            factor: Factor::StudyTime,
            points: study_time_points(profile.study_time),
        },
        Contribution {
            factor: Factor::Sleep,
            points: sleep_points(profile.sleep_hours),
        },
        Contribution {
            factor: Factor::AcademicAverage,
            points: academic_points(academic_average(profile)),
        },
        Contribution {
            factor: Factor::SocialMedia,
            points: social_media_points(profile.social_media),
        },
        Contribution {
            factor: Factor::TravelTime,
            points: travel_time_points(profile.travel_time),
        },
        Contribution {
            factor: Factor::FinancialStatus,
            points: financial_points(profile.financial_status),
        },
        Contribution {
            factor: Factor::PartTimeJob,
            points: part_time_job_points(profile.part_time_job),
        },
    ];

    let total: u32 = contributions.iter().map(|c| c.points).sum();
    let level = level_for(total);
    debug!(score = total, level = level.label(), "scored student profile");

    Ok(PredictionResult {
        score: total,
        level,
        color: level.color(),
        recommendations: recommendations_for(level).to_vec(),
        contributions,
    })
}

pub fn academic_average(profile: &StudentProfile) -> f64 {
    (profile.grade10 + profile.grade12 + profile.college_marks) / 3.0
}

pub fn level_for(score: u32) -> StressLevel {
    match score {
        0..=39 => StressLevel::LowStress,
        40..=69 => StressLevel::ModerateStress,
        _ => StressLevel::HighStress,
    }
}

pub fn recommendations_for(level: StressLevel) -> &'static [&'static str] {
    match level {
        StressLevel::LowStress => &LOW_STRESS_ADVICE,
        StressLevel::ModerateStress => &MODERATE_STRESS_ADVICE,
        StressLevel::HighStress => &HIGH_STRESS_ADVICE,
    }
}

fn study_time_points(hours: i32) -> u32 {
    match hours {
        ..=1 | 9.. => 25,
        4..=6 => 10,
        _ => 15,
    }
}

fn sleep_points(hours: i32) -> u32 {
    match hours {
        ..=5 => 30,
        9.. => 15,
        _ => 5,
    }
}

fn academic_points(average: f64) -> u32 {
    if average < 60.0 {
        35
    } else if average < 75.0 {
        20
    } else {
        10
    }
}

fn social_media_points(hours: i32) -> u32 {
    if hours > 5 {
        20
    } else {
        5
    }
}

fn travel_time_points(minutes: i32) -> u32 {
    if minutes > 60 {
        15
    } else {
        0
    }
}

fn financial_points(status: FinancialStatus) -> u32 {
    match status {
        FinancialStatus::Low => 25,
        FinancialStatus::Medium => 10,
        FinancialStatus::High => 0,
    }
}

fn part_time_job_points(job: PartTimeJob) -> u32 {
    match job {
        PartTimeJob::Yes => 15,
        PartTimeJob::No => 0,
    }
}
