//! Best-effort audit logging of generation exchanges.
//!
//! Callers discard the returned result; a failed audit write must never
//! affect the response.

use diesel::prelude::*;
use thiserror::Error;

use crate::db::DbPool;
use crate::models::NewRequestLog;
use crate::schema::request_logs;

/// Endpoint tag recorded for generation calls made by /api/suggest.
pub const SUGGEST_GENERATION: &str = "/api/suggest:generation";

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("connection checkout failed: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("insert failed: {0}")]
    Insert(#[from] diesel::result::Error),
}

/// Record one request/response exchange against the given endpoint tag.
pub fn record(pool: &DbPool, endpoint: &str, payload: serde_json::Value) -> Result<(), AuditError> {
    let mut conn = pool.get()?;

    diesel::insert_into(request_logs::table)
        .values(&NewRequestLog { endpoint, payload })
        .execute(&mut conn)?;

    Ok(())
}
