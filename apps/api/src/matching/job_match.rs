//! Unweighted job match: share of a job's required skills the candidate covers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::matching::matcher::match_skills;
use crate::matching::normalizer::{normalize_skills, SkillInput};
use crate::models::job::JobRow;

/// The part of a job document the scorer reads.
///
/// `required_skills` stays a raw JSON value: absent, null or non-array
/// values score 0 instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSkills {
    #[serde(default)]
    pub required_skills: Option<Value>,
}

impl JobSkills {
    /// Reads `requiredSkills` off any JSON value; non-objects carry none.
    pub fn from_value(value: &Value) -> Self {
        Self {
            required_skills: value.get("requiredSkills").cloned(),
        }
    }

    /// Normalized required skills, or `None` when the field is not an array.
    pub fn normalized(&self) -> Option<Vec<String>> {
        match &self.required_skills {
            Some(value @ Value::Array(_)) => {
                Some(normalize_skills(&SkillInput::list_from_value(value)))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub job_id: Uuid,
    pub title: String,
    pub company: Option<String>,
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// `round(matched / required × 100)`, 0 when there is nothing to match.
/// `user_skills` must already be normalized.
pub fn compute_job_match_percentage(job: &JobSkills, user_skills: &[String]) -> u32 {
    match job.normalized() {
        Some(required) => match_skills(user_skills, &required).percentage(),
        None => 0,
    }
}

/// Scores every job and sorts the result by match percentage, highest first.
/// Jobs with equal scores keep their listing order.
pub fn rank_jobs(jobs: &[JobRow], user_skills: &[String]) -> Vec<JobMatch> {
    let mut ranked: Vec<JobMatch> = jobs
        .iter()
        .map(|job| {
            let skills = JobSkills {
                required_skills: job.required_skills.clone(),
            };
            let outcome = match_skills(user_skills, &skills.normalized().unwrap_or_default());

            JobMatch {
                job_id: job.id,
                title: job.title.clone(),
                company: job.company.clone(),
                match_percentage: outcome.percentage(),
                matched_skills: outcome.pairs.into_iter().map(|p| p.target).collect(),
                missing_skills: outcome.unmatched,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    ranked
}
