use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::models::{FinancialStatus, PartTimeJob, StudentProfile};

pub const STUDY_TIME_RANGE: RangeInclusive<i32> = 0..=12;
pub const SLEEP_HOURS_RANGE: RangeInclusive<i32> = 3..=12;
pub const MARKS_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const SOCIAL_MEDIA_RANGE: RangeInclusive<i32> = 0..=10;
pub const TRAVEL_TIME_RANGE: RangeInclusive<i32> = 0..=180;

/// Checks every field against its form domain, reporting the first offender
/// in form order.
pub fn validate(profile: &StudentProfile) -> Result<(), ValidationError> {
    check_int("study_time", profile.study_time, &STUDY_TIME_RANGE)?;
    check_int("sleep_hours", profile.sleep_hours, &SLEEP_HOURS_RANGE)?;
    check_marks("grade10", profile.grade10)?;
    check_marks("grade12", profile.grade12)?;
    check_marks("college_marks", profile.college_marks)?;
    check_int("social_media", profile.social_media, &SOCIAL_MEDIA_RANGE)?;
    check_int("travel_time", profile.travel_time, &TRAVEL_TIME_RANGE)?;
    Ok(())
}

fn check_int(
    field: &'static str,
    value: i32,
    range: &RangeInclusive<i32>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::OutOfRange {
        field,
        value: value as f64,
        min: *range.start() as f64,
        max: *range.end() as f64,
    })
}

// NaN fails `contains`, so it is rejected along with out-of-range marks.
fn check_marks(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if MARKS_RANGE.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::OutOfRange {
        field,
        value,
        min: *MARKS_RANGE.start(),
        max: *MARKS_RANGE.end(),
    })
}

impl FromStr for PartTimeJob {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(PartTimeJob::Yes),
            "no" => Ok(PartTimeJob::No),
            _ => Err(ValidationError::UnknownVariant {
                field: "part_time_job",
                value: s.to_string(),
                expected: "yes, no",
            }),
        }
    }
}

impl FromStr for FinancialStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(FinancialStatus::Low),
            "medium" => Ok(FinancialStatus::Medium),
            "high" => Ok(FinancialStatus::High),
            _ => Err(ValidationError::UnknownVariant {
                field: "financial_status",
                value: s.to_string(),
                expected: "low, medium, high",
            }),
        }
    }
}
