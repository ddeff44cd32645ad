use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::courses::CourseAdvisor;
use crate::matching::career_paths::CareerPathAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Owns the per-role weight cache for the lifetime of the process.
    pub analyzer: CareerPathAnalyzer,
    /// LLM-backed when `ANTHROPIC_API_KEY` is set, disabled otherwise.
    pub course_advisor: Arc<dyn CourseAdvisor>,
}
