use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod dataset;
mod error;
mod models;
mod report;
mod scorer;
mod validation;

use models::{FinancialStatus, PartTimeJob, ProfileRecord, ScoredRecord, StudentProfile};

#[derive(Parser)]
#[command(name = "stress-analysis")]
#[command(about = "Student stress survey dashboard and rule-based stress scorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show headline statistics and project highlights
    Home,
    /// Show the sample survey charts as tables
    Dashboard,
    /// Score one student profile
    Predict {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score every profile in a CSV file
    Batch {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Print all results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report
    Report {
        /// Optional CSV of profiles to include in the report
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Describe the project
    About,
}

#[derive(clap::Args, Debug)]
struct ProfileArgs {
    /// Daily study time in hours (0-12)
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    study_time: i32,
    /// Sleep per night in hours (3-12)
    #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
    sleep_hours: i32,
    /// 10th grade marks in percent
    #[arg(long, default_value_t = 85.0, allow_negative_numbers = true)]
    grade10: f64,
    /// 12th grade marks in percent
    #[arg(long, default_value_t = 80.0, allow_negative_numbers = true)]
    grade12: f64,
    /// Current college marks in percent
    #[arg(long, default_value_t = 75.0, allow_negative_numbers = true)]
    college_marks: f64,
    /// Social media use in hours per day (0-10)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    social_media: i32,
    /// Daily travel time in minutes (0-180)
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    travel_time: i32,
    /// yes or no
    #[arg(long, default_value = "no")]
    part_time_job: PartTimeJob,
    /// low, medium or high
    #[arg(long, default_value = "medium")]
    financial_status: FinancialStatus,
}

impl From<ProfileArgs> for StudentProfile {
    fn from(args: ProfileArgs) -> Self {
        StudentProfile {
            study_time: args.study_time,
            sleep_hours: args.sleep_hours,
            grade10: args.grade10,
            grade12: args.grade12,
            college_marks: args.college_marks,
            social_media: args.social_media,
            travel_time: args.travel_time,
            part_time_job: args.part_time_job,
            financial_status: args.financial_status,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Home => print!("{}", report::format_home()),
        Commands::Dashboard => print!("{}", report::format_dashboard()),
        Commands::About => print!("{}", report::format_about()),
        Commands::Predict { profile, json } => {
            let profile = StudentProfile::from(profile);
            let result = scorer::score(&profile)
                .inspect_err(|err| warn!(field = err.field(), "rejected student profile"))
                .context("invalid student profile")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", report::format_prediction(&result));
            }
        }
        Commands::Batch { csv, limit, json } => {
            let records = dataset::load_profiles(&csv)?;
            let scored = score_records(records)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&scored)?);
                return Ok(());
            }

            if scored.is_empty() {
                println!("No student profiles found in {}.", csv.display());
                return Ok(());
            }

            println!("Top students by stress score:");
            for record in report::rank_by_score(&scored).into_iter().take(limit) {
                println!(
                    "- {} score {} ({})",
                    record.student,
                    record.result.score,
                    record.result.level.label()
                );
            }
            println!();
            println!("Level mix:");
            print!(
                "{}",
                report::format_level_mix(&report::summarize_by_level(&scored))
            );
        }
        Commands::Report { csv, out } => {
            let generated_on = chrono::Utc::now().date_naive();
            write_report(csv.as_deref(), &out, generated_on)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn write_report(
    csv: Option<&Path>,
    out: &Path,
    generated_on: chrono::NaiveDate,
) -> anyhow::Result<()> {
    let scored = match csv {
        Some(path) => Some(score_records(dataset::load_profiles(path)?)?),
        None => None,
    };
    let report = report::build_report(generated_on, scored.as_deref());
    std::fs::write(out, report).with_context(|| format!("failed to write {}", out.display()))?;
    info!(path = %out.display(), "report written");
    Ok(())
}

fn score_records(records: Vec<ProfileRecord>) -> anyhow::Result<Vec<ScoredRecord>> {
    let mut scored = Vec::with_capacity(records.len());
    for record in records {
        let result = scorer::score(&record.profile)
            .inspect_err(|err| {
                warn!(student = %record.student, field = err.field(), "rejected student profile")
            })
            .with_context(|| format!("{}: invalid profile", record.student))?;
        scored.push(ScoredRecord {
            student: record.student,
            result,
        });
    }
    info!(count = scored.len(), "scored student profiles");
    Ok(scored)
}

// STRESS_LOG_FORMAT=json switches to JSON lines; RUST_LOG overrides the filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stress_analysis=info".into());
    let json = std::env::var("STRESS_LOG_FORMAT").is_ok_and(|format| format == "json");

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
