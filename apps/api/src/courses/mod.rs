//! Course suggestions for the skills a candidate is missing.
//!
//! `AppState` holds an `Arc<dyn CourseAdvisor>`: the LLM-backed advisor when
//! an API key is configured, otherwise the disabled one.

pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSuggestion {
    pub title: String,
    pub provider: String,
    pub skill: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[async_trait]
pub trait CourseAdvisor: Send + Sync {
    async fn suggest(
        &self,
        role: &str,
        missing_skills: &[String],
    ) -> Result<Vec<CourseSuggestion>, AppError>;
}

/// Used when no AI backend is configured.
pub struct DisabledCourseAdvisor;

#[async_trait]
impl CourseAdvisor for DisabledCourseAdvisor {
    async fn suggest(
        &self,
        _role: &str,
        _missing_skills: &[String],
    ) -> Result<Vec<CourseSuggestion>, AppError> {
        Ok(Vec::new())
    }
}

pub struct LlmCourseAdvisor {
    llm: LlmClient,
    max_suggestions: usize,
}

impl LlmCourseAdvisor {
    pub fn new(llm: LlmClient, max_suggestions: usize) -> Self {
        Self {
            llm,
            max_suggestions,
        }
    }
}

#[async_trait]
impl CourseAdvisor for LlmCourseAdvisor {
    async fn suggest(
        &self,
        role: &str,
        missing_skills: &[String],
    ) -> Result<Vec<CourseSuggestion>, AppError> {
        if missing_skills.is_empty() || self.max_suggestions == 0 {
            return Ok(Vec::new());
        }

        let prompt = prompts::course_prompt(role, missing_skills, self.max_suggestions);
        let suggestions: Vec<CourseSuggestion> = self
            .llm
            .call_json(&prompt, &prompts::course_system_prompt())
            .await?;

        let suggestions = retain_relevant(suggestions, missing_skills, self.max_suggestions);
        debug!(role, count = suggestions.len(), "course suggestions received");
        Ok(suggestions)
    }
}

/// Drops suggestions for skills that were not asked about and caps the count.
fn retain_relevant(
    suggestions: Vec<CourseSuggestion>,
    missing_skills: &[String],
    limit: usize,
) -> Vec<CourseSuggestion> {
    suggestions
        .into_iter()
        .filter(|s| {
            let skill = s.skill.trim().to_lowercase();
            missing_skills.iter().any(|m| *m == skill)
        })
        .take(limit)
        .collect()
}
