mod applicant;
mod config;
mod errors;
mod headshots;
mod models;
mod submitter;

use anyhow::Result;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::applicant::Applicant;
use crate::config::Config;
use crate::errors::AppError;
use crate::headshots::load_headshots;
use crate::submitter::HttpSubmitter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting applicant-bot v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&config).await {
        if e.is_fatal() {
            error!("{e}");
        } else {
            error!("Application not sent: {e}");
        }
        std::process::exit(1);
    }

    Ok(())
}

/// One run: load headshots, build the applicant, size up the job, apply once.
async fn run(config: &Config) -> Result<(), AppError> {
    let headshots = load_headshots(&config.headshots_dir)?;
    if headshots.is_empty() {
        warn!("No headshots in {}", config.headshots_dir.display());
    }

    let mut applicant = Applicant::with_default_skills(headshots);
    applicant.add_skill("Kansas City Shuffle");
    info!(
        "{} from {} ({}), {} skills, currently learning {}",
        applicant.name(),
        applicant.home,
        applicant.portfolio,
        applicant.skills().len(),
        applicant.currently_learning.join(", ")
    );

    let listing = &config.listing;
    applicant.is_compatible_with_job(
        &listing.required_skills,
        &listing.description,
        &listing.company_address,
    )?;

    let submitter = HttpSubmitter::new();
    applicant.apply_for_job(&listing.job, &submitter).await
}
