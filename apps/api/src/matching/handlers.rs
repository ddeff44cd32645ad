//! Axum route handlers for career-path analysis and job matching.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::courses::CourseSuggestion;
use crate::errors::AppError;
use crate::matching::career_paths::{CareerPathAnalysis, CareerPathAnalyzer, RoleSkills};
use crate::matching::job_match::{compute_job_match_percentage, rank_jobs, JobMatch, JobSkills};
use crate::matching::normalizer::{normalize_skills, SkillInput};
use crate::matching::weights::WeightCache;
use crate::state::AppState;
use crate::store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields stay raw JSON so null or mistyped values score 0 instead of
/// rejecting the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCareerPathsRequest {
    #[serde(default)]
    pub user_skills: Option<Value>,
    /// Role name → skill list; key order is the tie-break order.
    #[serde(default)]
    pub job_roles_skills: Option<Value>,
}

impl AnalyzeCareerPathsRequest {
    fn user_skills(&self) -> Vec<String> {
        normalized_list(self.user_skills.as_ref())
    }

    fn roles(&self) -> Vec<RoleSkills> {
        match &self.job_roles_skills {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(role, skills)| {
                    RoleSkills::new(role.clone(), SkillInput::list_from_value(skills))
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CareerPathQuery {
    #[serde(default)]
    pub include_courses: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCareerPathsResponse {
    #[serde(flatten)]
    pub analysis: CareerPathAnalysis,
    pub courses: Vec<CourseSuggestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchRequest {
    #[serde(default)]
    pub job: Option<Value>,
    #[serde(default)]
    pub user_skills: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResponse {
    pub match_percentage: u32,
}

#[derive(Debug, Serialize)]
pub struct JobMatchesResponse {
    pub jobs: Vec<JobMatch>,
}

fn normalized_list(value: Option<&Value>) -> Vec<String> {
    value
        .map(SkillInput::list_from_value)
        .map(|skills| normalize_skills(&skills))
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/career-paths/analyze
///
/// Scores the supplied roles against the supplied skills. Malformed entries
/// are dropped, never rejected. Caller-supplied roles get a fresh weight
/// cache; the shared one is reserved for the stored taxonomy.
pub async fn handle_analyze_career_paths(
    Json(request): Json<AnalyzeCareerPathsRequest>,
) -> Json<CareerPathAnalysis> {
    let analyzer = CareerPathAnalyzer::new(WeightCache::new());
    Json(analyzer.analyze(&request.user_skills(), &request.roles()))
}

/// GET /api/v1/users/:user_id/career-paths
///
/// Loads the user's profile skills and the role taxonomy, then analyzes.
/// With `include_courses=true`, attaches course suggestions for the top
/// match's missing skills; advisor failures leave the list empty.
pub async fn handle_user_career_paths(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<CareerPathQuery>,
) -> Result<Json<UserCareerPathsResponse>, AppError> {
    let (user_skills, roles) = tokio::try_join!(
        store::fetch_user_skills(&state.db, user_id),
        store::fetch_role_taxonomy(&state.db),
    )?;

    let analysis = state.analyzer.analyze(&user_skills, &roles);
    info!(
        %user_id,
        roles = roles.len(),
        top = analysis.top_match.as_ref().map(|m| m.role.as_str()),
        "career paths computed"
    );

    let courses = match (&analysis.top_match, params.include_courses) {
        (Some(top), true) => state
            .course_advisor
            .suggest(&top.role, &top.missing_skills)
            .await
            .unwrap_or_else(|e| {
                warn!(%user_id, "course suggestions unavailable: {e}");
                Vec::new()
            }),
        _ => Vec::new(),
    };

    Ok(Json(UserCareerPathsResponse { analysis, courses }))
}

/// POST /api/v1/jobs/match-percentage
pub async fn handle_job_match_percentage(
    Json(request): Json<JobMatchRequest>,
) -> Json<JobMatchResponse> {
    let user_skills = normalized_list(request.user_skills.as_ref());
    let job = request
        .job
        .as_ref()
        .map(JobSkills::from_value)
        .unwrap_or_default();
    Json(JobMatchResponse {
        match_percentage: compute_job_match_percentage(&job, &user_skills),
    })
}

/// GET /api/v1/users/:user_id/job-matches
///
/// Ranks every open job for the user, best match first.
pub async fn handle_user_job_matches(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<JobMatchesResponse>, AppError> {
    let (user_skills, jobs) = tokio::try_join!(
        store::fetch_user_skills(&state.db, user_id),
        store::fetch_open_jobs(&state.db),
    )?;

    let jobs = rank_jobs(&jobs, &user_skills);
    info!(%user_id, jobs = jobs.len(), "job matches ranked");

    Ok(Json(JobMatchesResponse { jobs }))
}
