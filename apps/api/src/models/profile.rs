#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A job seeker's profile document. Only the skill list is read here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub technical_skills: Option<Value>,
    pub updated_at: DateTime<Utc>,
}
