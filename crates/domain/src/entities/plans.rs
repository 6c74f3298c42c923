use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::schema::plans;

/// A stored plan submission. `id` and `created_at` are assigned by Postgres.
#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = plans)]
pub struct PlanEntity {
    pub id: i32,
    pub name: Option<String>,
    pub revenue: Option<i64>,
    pub orbit: Option<String>,
    pub payload: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Columns a caller may write; `created_at` comes from the column default.
#[derive(Debug, Clone, Default, PartialEq, Insertable)]
#[diesel(table_name = plans)]
pub struct InsertPlanEntity {
    pub name: Option<String>,
    pub revenue: Option<i64>,
    pub orbit: Option<String>,
    pub payload: Option<serde_json::Value>,
}
