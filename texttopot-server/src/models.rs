use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

/// A persisted recipe plus its assigned identity, as returned by the
/// listing read path.
#[derive(Queryable, Selectable, Debug, Clone, Serialize, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StoredRecipe {
    pub id: i64,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub title: &'a str,
    pub ingredients: &'a str,
    pub instructions: &'a str,
    pub source: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::request_logs)]
pub struct NewRequestLog<'a> {
    pub endpoint: &'a str,
    pub payload: serde_json::Value,
}
