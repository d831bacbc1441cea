use serde::Serialize;

use crate::models::headshot::Headshot;

/// Wire payload for one submission. Borrowed from the applicant and the job,
/// built per call and dropped once the request is sent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application<'a> {
    pub name: String,
    pub skills: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<&'a Headshot>,
    pub url: &'a str,
    pub job_title: &'a str,
}
