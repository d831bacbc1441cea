/// The role being applied for. Immutable input to one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub title: String,
    pub company_name: String,
    /// Where the application is POSTed.
    pub url: String,
}

/// A job as advertised: the role plus what the compatibility check reads.
#[derive(Debug, Clone)]
pub struct JobListing {
    pub job: Job,
    pub required_skills: Vec<String>,
    pub description: String,
    pub company_address: String,
}
