#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting. `required_skills` is whatever the employer's editor stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: Option<String>,
    pub required_skills: Option<Value>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
