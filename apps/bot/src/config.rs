use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::job::{Job, JobListing};

const DEFAULT_HEADSHOTS_DIR: &str = "./stock-photos-of-random-people-smiling";
const DEFAULT_JOB_TITLE: &str = "Software Engineer";
const DEFAULT_COMPANY_NAME: &str = "Boss";
const DEFAULT_APPLICATION_URL: &str = "https://jobs.boss.example/careers/apply";
const DEFAULT_COMPANY_ADDRESS: &str = "1 Market Street, Edinburgh";
const DEFAULT_JOB_DESCRIPTION: &str =
    "Build and run backend services with a small, friendly platform team.";
const DEFAULT_REQUIRED_SKILLS: &str = "go,sql,docker,kubernetes";

/// Run configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to the built-in job.
#[derive(Debug, Clone)]
pub struct Config {
    pub headshots_dir: PathBuf,
    pub listing: JobListing,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let url = var("APPLICATION_URL", DEFAULT_APPLICATION_URL);
        reqwest::Url::parse(&url)
            .with_context(|| format!("APPLICATION_URL must be an absolute URL, got '{url}'"))?;

        Ok(Config {
            headshots_dir: PathBuf::from(var("HEADSHOTS_DIR", DEFAULT_HEADSHOTS_DIR)),
            listing: JobListing {
                job: Job {
                    title: var("JOB_TITLE", DEFAULT_JOB_TITLE),
                    company_name: var("COMPANY_NAME", DEFAULT_COMPANY_NAME),
                    url,
                },
                required_skills: split_list(&var("REQUIRED_SKILLS", DEFAULT_REQUIRED_SKILLS)),
                description: var("JOB_DESCRIPTION", DEFAULT_JOB_DESCRIPTION),
                company_address: var("COMPANY_ADDRESS", DEFAULT_COMPANY_ADDRESS),
            },
            rust_log: var("RUST_LOG", "info"),
        })
    }
}

/// Splits a comma separated list, trimming entries and dropping blanks.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
