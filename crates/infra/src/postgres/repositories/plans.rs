use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use tokio::task;

use crate::postgres::postgres_connection::PgPoolSquad;
use domain::{
    entities::plans::{InsertPlanEntity, PlanEntity},
    repositories::plans::PlanRepository,
    schema::plans,
};

pub struct PlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }

    /// Direct read of a stored row. Not part of the HTTP surface.
    pub async fn find_by_id(&self, plan_id: i32) -> Result<PlanEntity> {
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<PlanEntity> {
            let mut conn = db_pool.get()?;

            let row = plans::table
                .filter(plans::id.eq(plan_id))
                .select(PlanEntity::as_select())
                .first::<PlanEntity>(&mut conn)?;

            Ok(row)
        })
        .await?
    }
}

#[async_trait]
impl PlanRepository for PlanPostgres {
    async fn insert(&self, insert_plan_entity: InsertPlanEntity) -> Result<i32> {
        // Diesel is synchronous; keep the checkout and the query off the async workers.
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<i32> {
            let mut conn = db_pool.get()?;

            let id = insert_into(plans::table)
                .values(&insert_plan_entity)
                .returning(plans::id)
                .get_result::<i32>(&mut conn)?;

            Ok(id)
        })
        .await?
    }
}
