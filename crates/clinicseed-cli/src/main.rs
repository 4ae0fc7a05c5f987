use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use clinicseed_generate::{SeedCounts, SeedEngine, SeedError, SeedOptions, StreetBook};

#[derive(Debug, Error)]
enum CliError {
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "clinicseed", version, about = "Clinic database seeding CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Populate the clinic collections and dump them as run artifacts.
    Seed(SeedArgs),
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// RNG seed; the same seed reproduces the same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Street reference CSV (street,house,zip_code,longitude,latitude).
    #[arg(long)]
    streets: Option<PathBuf>,
    /// Reference date for "today" (YYYY-MM-DD); defaults to the current date.
    #[arg(long)]
    today: Option<String>,
    /// Output directory for runs.
    #[arg(long, default_value = "runs")]
    out: PathBuf,
    /// Staff documents to generate.
    #[arg(long)]
    staff: Option<usize>,
    /// Visitor/patient draws (each draw may yield a visitor, a patient, or both).
    #[arg(long)]
    visitors: Option<usize>,
    /// Tip documents to generate.
    #[arg(long)]
    tips: Option<usize>,
    /// Home remedy documents to generate.
    #[arg(long)]
    home_remedies: Option<usize>,
    /// Facility documents to generate.
    #[arg(long)]
    facilities: Option<usize>,
    /// Event documents to generate.
    #[arg(long)]
    events: Option<usize>,
    /// Appointment documents to generate.
    #[arg(long)]
    appointments: Option<usize>,
    /// Timetable rounds (one edge per doctor per round).
    #[arg(long)]
    timetable_rounds: Option<usize>,
    /// Leave applications to generate.
    #[arg(long)]
    leave_applies: Option<usize>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Seed(args) => run_seed(args),
    }
}

fn run_seed(args: SeedArgs) -> Result<(), CliError> {
    let today = match &args.today {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            CliError::InvalidConfig(format!("--today must be YYYY-MM-DD, got '{raw}'"))
        })?,
        None => chrono::Utc::now().date_naive(),
    };

    let mut counts = SeedCounts::default();
    if let Some(staff) = args.staff {
        counts.staff = staff;
    }
    if let Some(visitors) = args.visitors {
        counts.visitor_draws = visitors;
    }
    if let Some(tips) = args.tips {
        counts.tips = tips;
    }
    if let Some(home_remedies) = args.home_remedies {
        counts.home_remedies = home_remedies;
    }
    if let Some(facilities) = args.facilities {
        counts.facilities = facilities;
    }
    if let Some(events) = args.events {
        counts.events = events;
    }
    if let Some(appointments) = args.appointments {
        counts.appointments = appointments;
    }
    if let Some(rounds) = args.timetable_rounds {
        counts.timetable_rounds = rounds;
    }
    if let Some(leave_applies) = args.leave_applies {
        counts.leave_applies = leave_applies;
    }

    let options = SeedOptions {
        seed: args.seed,
        today,
        streets_path: args.streets.unwrap_or_else(StreetBook::bundled_path),
        out_dir: args.out,
        counts,
    };

    let run = SeedEngine::new(options).run()?;
    tracing::info!(run_dir = %run.run_dir.display(), "artifacts written");
    Ok(())
}
