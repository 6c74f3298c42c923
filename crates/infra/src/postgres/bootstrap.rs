use anyhow::Result;
use diesel::{Connection, RunQueryDsl, sql_query, sql_types::BigInt};
use std::sync::Arc;
use tokio::task;
use tracing::info;

use super::postgres_connection::PgPoolSquad;

/// Serialises concurrent bootstraps (several replicas starting at once).
const BOOTSTRAP_LOCK_KEY: i64 = 0x6f72_6269_7466_6e64;

pub const CREATE_PLANS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS plans (
    id SERIAL PRIMARY KEY,
    name TEXT,
    revenue BIGINT,
    orbit TEXT,
    payload JSONB,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

/// Creates the `plans` table if it is missing. Never alters or drops anything.
pub async fn ensure_plans_table(db_pool: Arc<PgPoolSquad>) -> Result<()> {
    task::spawn_blocking(move || -> Result<()> {
        let mut conn = db_pool.get()?;

        conn.transaction::<_, diesel::result::Error, _>(|tx| {
            sql_query("SELECT pg_advisory_xact_lock($1)")
                .bind::<BigInt, _>(BOOTSTRAP_LOCK_KEY)
                .execute(tx)?;
            sql_query(CREATE_PLANS_TABLE).execute(tx)?;
            Ok(())
        })?;

        Ok(())
    })
    .await??;

    info!("bootstrap: plans table is present");
    Ok(())
}
