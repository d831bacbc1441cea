//! The applicant: a fixed profile that collects skills, sizes up jobs, and
//! sends itself off to them.

pub mod heuristics;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::headshots::Headshots;
use crate::models::application::Application;
use crate::models::job::Job;
use crate::submitter::Submitter;

use self::heuristics::{headshot_key, SkillVerdict};

/// Skills every run starts with.
pub const DEFAULT_SKILLS: [&str; 16] = [
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "Redux",
    "SASS",
    "Express",
    "Node",
    "Git",
    "Docker",
    "Java",
    "DevOps",
    "Kubernetes",
    "CI/CD",
    "PSM1 Scrum Master",
    "AWS Cloud Practitioner",
];

const FIRST_NAME: &str = "Leon";
const LAST_NAME: &str = "Brown";
const HOME: &str = "Edinburgh, UK";
const PORTFOLIO: &str = "https://www.leonbrown.dev";
const SCARED_OF: &str = "Spiders that dissapear when you look away for like, ONE second.";

#[derive(Debug, Clone)]
pub struct Applicant {
    first_name: &'static str,
    last_name: &'static str,
    scared_of: &'static str,
    headshots: Headshots,
    pub portfolio: &'static str,
    pub home: &'static str,
    pub currently_learning: Vec<String>,
    /// Lowercase, no duplicates, insertion order.
    skills: Vec<String>,
}

impl Applicant {
    /// The fixed profile with no skills yet.
    pub fn new(headshots: Headshots) -> Self {
        Self {
            first_name: FIRST_NAME,
            last_name: LAST_NAME,
            scared_of: SCARED_OF,
            headshots,
            portfolio: PORTFOLIO,
            home: HOME,
            currently_learning: vec!["AWS Solutions Architect".to_string(), "Go".to_string()],
            skills: Vec::new(),
        }
    }

    /// The fixed profile with `DEFAULT_SKILLS` already added.
    pub fn with_default_skills(headshots: Headshots) -> Self {
        let mut applicant = Self::new(headshots);
        for skill in DEFAULT_SKILLS {
            applicant.add_skill(skill);
        }
        applicant
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Stores `skill` lowercased, unless it is already known.
    pub fn add_skill(&mut self, skill: &str) {
        let skill = skill.to_lowercase();
        if !self.skills.contains(&skill) {
            self.skills.push(skill);
        }
    }

    /// Required skills the applicant has, in the order they were asked for.
    /// A skill listed twice by the job counts twice.
    pub fn matched_skills<'r, S: AsRef<str>>(&self, required_skills: &'r [S]) -> Vec<&'r str> {
        required_skills
            .iter()
            .map(|skill| skill.as_ref())
            .filter(|skill| self.skills.contains(&skill.to_lowercase()))
            .collect()
    }

    pub fn skill_verdict<S: AsRef<str>>(&self, required_skills: &[S]) -> SkillVerdict {
        SkillVerdict::from_matches(self.matched_skills(required_skills).len())
    }

    /// Sizes up a job.
    ///
    /// A description mentioning the applicant's fear is fatal: the error is
    /// returned before any skill is looked at and the caller must not go on.
    /// Otherwise the verdict is logged and the answer is always `true`.
    pub fn is_compatible_with_job<S: AsRef<str>>(
        &self,
        required_skills: &[S],
        description: &str,
        company_address: &str,
    ) -> Result<bool, AppError> {
        if description.contains(self.scared_of) {
            return Err(AppError::Disqualified {
                company_address: company_address.to_string(),
            });
        }

        let verdict = self.skill_verdict(required_skills);
        info!("{}", verdict.message());

        Ok(true)
    }

    /// Builds the payload for `job`, picking the headshot by the hair-gel test.
    pub fn application_for<'a>(&'a self, job: &'a Job) -> Application<'a> {
        let key = headshot_key(&job.company_name);
        let photo = self.headshots.get(key);
        if photo.is_none() {
            warn!("No headshot loaded for '{key}', applying without a photo");
        }

        Application {
            name: self.name(),
            skills: &self.skills,
            photo,
            url: &job.url,
            job_title: &job.title,
        }
    }

    pub async fn apply_for_job(
        &self,
        job: &Job,
        submitter: &dyn Submitter,
    ) -> Result<(), AppError> {
        let application = self.application_for(job);
        info!(
            "Applying to {} as {} for '{}'",
            job.company_name, application.name, job.title
        );

        submitter.submit(&application).await?;

        info!("Application to {} accepted", job.company_name);
        Ok(())
    }
}
