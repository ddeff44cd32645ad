#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// One entry of the job-role taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRoleRow {
    pub role: String,
    pub skills: Value,
    pub position: i32,
}
