//! Reads the upstream documents the scorers consume.
//!
//! Everything is fetched wholesale. Callers turn failures into a generic
//! "could not load" response; nothing here retries.

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::career_paths::RoleSkills;
use crate::matching::normalizer::{normalize_skills, SkillInput};
use crate::models::job::JobRow;
use crate::models::profile::ProfileRow;
use crate::models::role::JobRoleRow;

/// Returns the user's normalized technical skills.
pub async fn fetch_user_skills(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, AppError> {
    let profile = sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT user_id, display_name, technical_skills, updated_at
        FROM profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;

    let skills = profile
        .technical_skills
        .as_ref()
        .map(SkillInput::list_from_value)
        .unwrap_or_default();

    Ok(normalize_skills(&skills))
}

/// Returns the job-role taxonomy in display order.
pub async fn fetch_role_taxonomy(pool: &PgPool) -> Result<Vec<RoleSkills>, AppError> {
    let rows = sqlx::query_as::<_, JobRoleRow>(
        "SELECT role, skills, position FROM job_roles ORDER BY position, role",
    )
    .fetch_all(pool)
    .await?;

    debug!(roles = rows.len(), "role taxonomy loaded");
    Ok(taxonomy_from_rows(rows))
}

/// Returns every open job posting, newest first.
pub async fn fetch_open_jobs(pool: &PgPool) -> Result<Vec<JobRow>, AppError> {
    Ok(sqlx::query_as::<_, JobRow>(
        r#"
        SELECT id, title, company, required_skills, status, created_at
        FROM jobs
        WHERE status = 'open'
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?)
}

fn taxonomy_from_rows(rows: Vec<JobRoleRow>) -> Vec<RoleSkills> {
    rows.into_iter()
        .map(|row| RoleSkills::new(row.role, SkillInput::list_from_value(&row.skills)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_taxonomy_rows_keep_order_and_tolerate_bad_skills() {
        let rows = vec![
            JobRoleRow {
                role: "Data Analyst".to_string(),
                skills: json!(["SQL", {"name": "Excel"}]),
                position: 1,
            },
            JobRoleRow {
                role: "Broken".to_string(),
                skills: json!({"not": "a list"}),
                position: 2,
            },
        ];

        let taxonomy = taxonomy_from_rows(rows);
        assert_eq!(taxonomy.len(), 2);
        assert_eq!(taxonomy[0].role, "Data Analyst");
        assert_eq!(normalize_skills(&taxonomy[0].skills), vec!["sql", "excel"]);
        assert!(taxonomy[1].skills.is_empty());
    }
}
